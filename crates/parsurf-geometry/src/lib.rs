//! parsurf geometry: parametric surface definitions.

pub mod surface;

pub use surface::Surface;
