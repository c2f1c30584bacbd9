//! Finite-difference normal estimation.
//!
//! The parameter directions of a surface are not generally orthogonal in
//! Cartesian space, so a single cross product of two tangent estimates
//! biases the normal toward one direction of the parameterization.
//! Sampling six neighbors around the point and averaging the six
//! per-direction cross products reduces that bias.

use parsurf_geometry::Surface;
use parsurf_math::Vector3;

/// Cross products shorter than this are degenerate and contribute nothing.
const DEGENERATE_LENGTH: f64 = 1e-12;

/// Neighbor sample offsets in units of the probe step, in cyclic order
/// around the center point.
const NEIGHBOR_OFFSETS: [(f64, f64); 6] = [
    (1.0, 0.0),
    (0.0, 1.0),
    (-1.0, 1.0),
    (-1.0, 0.0),
    (-1.0, -1.0),
    (0.0, -1.0),
];

/// Estimate the unit surface normal at `(u, v)` by finite differences.
///
/// Samples the six neighbors at `step` distance in parameter space, forms
/// the center-to-neighbor difference vectors, crosses each cyclically
/// adjacent pair, unit-normalizes each non-degenerate cross product,
/// averages them, and re-normalizes the average.
///
/// Degenerate cross products (at parametric singularities such as profile
/// cusps) are skipped instead of poisoning the average with NaN. If every
/// direction is degenerate the estimate falls back to `+Z`.
pub fn estimate_normal(surface: &dyn Surface, u: f64, v: f64, step: f64) -> Vector3 {
    let center = surface.point_at(u, v);
    let diffs =
        NEIGHBOR_OFFSETS.map(|(du, dv)| surface.point_at(u + du * step, v + dv * step) - center);

    let mut sum = Vector3::ZERO;
    for i in 0..diffs.len() {
        let cross = diffs[i].cross(diffs[(i + 1) % diffs.len()]);
        let len = cross.length();
        if len > DEGENERATE_LENGTH {
            sum += cross / len;
        }
    }

    let len = sum.length();
    if len > DEGENERATE_LENGTH {
        sum / len
    } else {
        Vector3::Z
    }
}
