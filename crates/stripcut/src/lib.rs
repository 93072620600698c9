//! Density-modulated strip geometry for laser cutting.
//!
//! An image is split into vertical strips. Each strip is sampled row by row
//! with Monte-Carlo quadrature, the sampled density sets the local cut
//! halfwidth on each side, and the per-row offsets are assembled into closed
//! polygons that downstream tools turn into cut paths.
//!
//! Layout
//! - `geom2`: distances, areas, and uniform random points in triangles/quads.
//! - `image`: the read-only density map the sampler reads from.
//! - `strips`: configuration, row sampling, and polygon assembly.
//! - `api`: curated re-exports and a one-shot entry point.
//!
//! Randomness is never ambient: every sampling routine takes `&mut R` with
//! `R: rand::Rng`, so callers decide between a seeded `StdRng` and entropy.

pub mod api;
pub mod error;
pub mod geom2;
pub mod image;
pub mod strips;

pub use error::StripError;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::error::StripError;
    pub use crate::geom2::{
        distance, random_point_in_triangle, random_points_in_quad, triangle_area, Point,
    };
    pub use crate::image::ImageBuffer;
    pub use crate::strips::{MinCutBehavior, Polygon, StripConfig, StripSampler};
    pub use nalgebra::Vector2 as Vec2;
}
