//! Surface trait and implementations.

mod astroid_torus;
mod spherical;

use parsurf_core::Validate;
use parsurf_math::Point3;

pub use astroid_torus::AstroidTorus;
pub use spherical::SphericalSurface;

/// Trait for parametric surfaces in 3D space.
///
/// Implementations expose positions and parameter domains only; surface
/// normals are estimated from positions by finite differences during
/// tessellation, so a surface never has to provide analytic derivatives.
/// The `Validate` bound lets consumers reject bad shape coefficients
/// before evaluating anything.
pub trait Surface: Validate + Send + Sync {
    /// Evaluate the surface at parameters `(u, v)`.
    ///
    /// Must accept any finite `(u, v)`, including values outside the
    /// declared domain (the tessellator probes neighbors past the domain
    /// edge when estimating normals).
    fn point_at(&self, u: f64, v: f64) -> Point3;

    /// Return the u-parameter domain `(u_min, u_max)`.
    fn domain_u(&self) -> (f64, f64);

    /// Return the v-parameter domain `(v_min, v_max)`.
    fn domain_v(&self) -> (f64, f64);
}
