//! Spherical surface.

use std::f64::consts::PI;

use parsurf_core::{ParsurfError, Result, Validate};
use parsurf_math::{Point3, DVec3};
use serde::{Deserialize, Serialize};

use super::Surface;

/// A sphere centered at the origin, parameterized by longitude `u` in
/// `[0, 2*PI]` and colatitude `v` in `[0, PI]`.
///
/// Points are computed as:
/// `P(u, v) = radius * (cos(u)*sin(v), sin(u)*sin(v), cos(v))`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SphericalSurface {
    pub radius: f64,
}

impl SphericalSurface {
    pub fn new(radius: f64) -> Self {
        Self { radius }
    }
}

impl Surface for SphericalSurface {
    fn point_at(&self, u: f64, v: f64) -> Point3 {
        let x = self.radius * u.cos() * v.sin();
        let y = self.radius * u.sin() * v.sin();
        let z = self.radius * v.cos();
        DVec3::new(x, y, z)
    }

    fn domain_u(&self) -> (f64, f64) {
        (0.0, 2.0 * PI)
    }

    fn domain_v(&self) -> (f64, f64) {
        (0.0, PI)
    }
}

impl Validate for SphericalSurface {
    fn validate(&self) -> Result<()> {
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(ParsurfError::InvalidParameter(format!(
                "radius must be finite and positive, got {}",
                self.radius
            )));
        }
        Ok(())
    }
}
