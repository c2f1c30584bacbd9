//! Astroid torus surface.

use std::f64::consts::PI;

use parsurf_core::{ParsurfError, Result, Validate};
use parsurf_math::{Point3, DVec3};
use serde::{Deserialize, Serialize};

use super::Surface;

/// A tube surface whose cross-section is an astroid (`cos^3`, `sin^3`)
/// rotated by `phase` in the profile plane and swept around the z-axis at
/// distance `base_radius`, parameterized by `u` (profile angle) in
/// `[-PI, PI]` and `v` (sweep angle) in `[0, 2*PI]`.
///
/// Points are computed as:
/// ```text
/// x = (r + a*cos^3(u)*cos(t) - a*sin^3(u)*sin(t)) * cos(v)
/// y = (r + a*cos^3(u)*cos(t) - a*sin^3(u)*sin(t)) * sin(v)
/// z = a*cos^3(u)*sin(t) + a*sin^3(u)*cos(t)
/// ```
/// with `a = tube_radius`, `r = base_radius`, `t = phase`. The mapping is
/// smooth and 2*PI-periodic in both parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AstroidTorus {
    pub tube_radius: f64,
    pub base_radius: f64,
    pub phase: f64,
}

impl AstroidTorus {
    pub fn new(tube_radius: f64, base_radius: f64, phase: f64) -> Self {
        Self {
            tube_radius,
            base_radius,
            phase,
        }
    }

    /// Profile curve in the (radial, z) half-plane at profile angle `u`.
    fn profile(&self, u: f64) -> (f64, f64) {
        let cu3 = u.cos().powi(3);
        let su3 = u.sin().powi(3);
        let (sin_t, cos_t) = self.phase.sin_cos();
        let radial = self.base_radius + self.tube_radius * (cu3 * cos_t - su3 * sin_t);
        let height = self.tube_radius * (cu3 * sin_t + su3 * cos_t);
        (radial, height)
    }
}

impl Surface for AstroidTorus {
    fn point_at(&self, u: f64, v: f64) -> Point3 {
        let (radial, height) = self.profile(u);
        DVec3::new(radial * v.cos(), radial * v.sin(), height)
    }

    fn domain_u(&self) -> (f64, f64) {
        (-PI, PI)
    }

    fn domain_v(&self) -> (f64, f64) {
        (0.0, 2.0 * PI)
    }
}

impl Validate for AstroidTorus {
    fn validate(&self) -> Result<()> {
        if !self.tube_radius.is_finite() {
            return Err(ParsurfError::InvalidParameter(format!(
                "tube_radius must be finite, got {}",
                self.tube_radius
            )));
        }
        if !self.base_radius.is_finite() {
            return Err(ParsurfError::InvalidParameter(format!(
                "base_radius must be finite, got {}",
                self.base_radius
            )));
        }
        if !self.phase.is_finite() {
            return Err(ParsurfError::InvalidParameter(format!(
                "phase must be finite, got {}",
                self.phase
            )));
        }
        Ok(())
    }
}
