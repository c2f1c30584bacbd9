//! Flat tessellation: convert a parametric surface to a non-indexed
//! triangle stream with finite-difference normals.

use parsurf_core::{ParsurfError, Result, Validate};
use parsurf_geometry::Surface;
use parsurf_math::Point2;
use rayon::prelude::*;

use crate::buffer::MeshBuffer;
use crate::normal::estimate_normal;

/// Options for flat tessellation of a parametric surface.
#[derive(Debug, Clone, Copy)]
pub struct FlatTessellation {
    /// Grid step in parameter space, shared by both directions.
    pub step: f64,
    /// Probe step for finite-difference normal estimation.
    pub normal_step: f64,
    /// Emit normalized texture coordinates per vertex. Coordinates are the
    /// parameters rescaled to the unit square; the final grid cell of a
    /// range that is not an exact step multiple overshoots past 1 by up to
    /// `step / range`.
    pub texcoords: bool,
}

impl FlatTessellation {
    /// Create options with the given grid step. The normal probe step
    /// defaults to the grid step and no texture coordinates are emitted.
    pub fn new(step: f64) -> Self {
        Self {
            step,
            normal_step: step,
            texcoords: false,
        }
    }

    pub fn with_texcoords(mut self, texcoords: bool) -> Self {
        self.texcoords = texcoords;
        self
    }

    pub fn with_normal_step(mut self, normal_step: f64) -> Self {
        self.normal_step = normal_step;
        self
    }
}

impl Validate for FlatTessellation {
    fn validate(&self) -> Result<()> {
        if !self.step.is_finite() || self.step <= 0.0 {
            return Err(ParsurfError::InvalidParameter(format!(
                "step must be finite and positive, got {}",
                self.step
            )));
        }
        if !self.normal_step.is_finite() || self.normal_step <= 0.0 {
            return Err(ParsurfError::InvalidParameter(format!(
                "normal_step must be finite and positive, got {}",
                self.normal_step
            )));
        }
        Ok(())
    }
}

/// Fixed-count grid over a surface's parameter domain.
///
/// Cell counts are computed up front as `ceil(range / step)` so the emitted
/// vertex count is exactly `6 * cells_u * cells_v` regardless of floating-
/// point accumulation; the final cell of a range that is not an exact step
/// multiple overshoots the domain end rather than clamping to it.
#[derive(Debug, Clone, Copy)]
struct GridLayout {
    u_min: f64,
    v_min: f64,
    u_range: f64,
    v_range: f64,
    cells_u: usize,
    cells_v: usize,
}

impl GridLayout {
    fn of(surface: &dyn Surface, step: f64) -> Self {
        let (u_min, u_max) = surface.domain_u();
        let (v_min, v_max) = surface.domain_v();
        let u_range = u_max - u_min;
        let v_range = v_max - v_min;
        Self {
            u_min,
            v_min,
            u_range,
            v_range,
            cells_u: (u_range / step).ceil() as usize,
            cells_v: (v_range / step).ceil() as usize,
        }
    }

    fn vertex_count(&self) -> usize {
        self.cells_u * self.cells_v * 6
    }
}

/// Emit the two triangles of every cell in grid row `row` (one `u` band).
fn emit_row(
    surface: &dyn Surface,
    options: &FlatTessellation,
    grid: &GridLayout,
    row: usize,
    out: &mut MeshBuffer,
) {
    let s = options.step;
    let u = grid.u_min + row as f64 * s;
    for j in 0..grid.cells_v {
        let v = grid.v_min + j as f64 * s;
        // Quad split along the (u+s,v)-(u,v+s) diagonal.
        let corners = [
            (u, v),
            (u + s, v),
            (u, v + s),
            (u, v + s),
            (u + s, v),
            (u + s, v + s),
        ];
        for (cu, cv) in corners {
            out.positions.push(surface.point_at(cu, cv));
            out.normals
                .push(estimate_normal(surface, cu, cv, options.normal_step));
            if options.texcoords {
                out.uvs.push(Point2::new(
                    (cu - grid.u_min) / grid.u_range,
                    (cv - grid.v_min) / grid.v_range,
                ));
            }
        }
    }
}

/// Tessellate a parametric surface into a non-indexed triangle stream.
///
/// Walks the surface's parameter domain in fixed steps and emits two
/// triangles per grid cell, six vertices each carrying an independently
/// estimated normal. The result holds exactly
/// `6 * ceil(range_u / step) * ceil(range_v / step)` vertices, and
/// identical inputs produce bitwise-identical buffers.
///
/// Fails fast with `InvalidParameter` if the surface coefficients or the
/// options are invalid; no partial output is ever returned.
pub fn tessellate_flat(surface: &dyn Surface, options: &FlatTessellation) -> Result<MeshBuffer> {
    surface.validate()?;
    options.validate()?;

    let grid = GridLayout::of(surface, options.step);
    let mut buffer = MeshBuffer::with_capacity(grid.vertex_count(), options.texcoords);
    for row in 0..grid.cells_u {
        emit_row(surface, options, &grid, row, &mut buffer);
    }
    Ok(buffer)
}

/// Row-parallel variant of [`tessellate_flat`].
///
/// Each `u` band is tessellated into its own pre-sized buffer and the bands
/// are concatenated in row order, so the output is identical to the serial
/// path.
pub fn tessellate_flat_parallel(
    surface: &dyn Surface,
    options: &FlatTessellation,
) -> Result<MeshBuffer> {
    surface.validate()?;
    options.validate()?;

    let grid = GridLayout::of(surface, options.step);
    let rows: Vec<MeshBuffer> = (0..grid.cells_u)
        .into_par_iter()
        .map(|row| {
            let mut band = MeshBuffer::with_capacity(grid.cells_v * 6, options.texcoords);
            emit_row(surface, options, &grid, row, &mut band);
            band
        })
        .collect();

    let mut buffer = MeshBuffer::with_capacity(grid.vertex_count(), options.texcoords);
    for band in &rows {
        buffer.merge(band);
    }
    Ok(buffer)
}
