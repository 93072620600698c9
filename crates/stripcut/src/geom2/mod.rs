//! Planar helpers for Monte-Carlo area sampling.
//!
//! Purpose
//! - Uniform random points inside triangles and quadrilaterals, with the
//!   point count driven by a sampling density (points per unit area).
//! - Small measurement helpers (distance, triangle area) used by the sampler.
//!
//! All functions are pure apart from the RNG they are handed.

mod sample;
mod util;

pub use sample::{random_point_in_triangle, random_points_in_quad};
pub use util::{distance, triangle_area};

/// Upper bound on the points drawn for a single quad.
pub const MAX_QUAD_POINTS: usize = 1 << 24;

/// A point in image-pixel space.
pub type Point = nalgebra::Vector2<f64>;

#[cfg(test)]
mod tests;
