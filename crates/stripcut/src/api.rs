//! Curated surface for callers that only need "image in, polygons out".
//!
//! Prefer these re-exports over reaching into submodules.

pub use crate::error::StripError;
pub use crate::geom2::{
    distance, random_point_in_triangle, random_points_in_quad, triangle_area, Point,
    MAX_QUAD_POINTS,
};
pub use crate::image::ImageBuffer;
pub use crate::strips::{
    assemble_runs, sample_quad, MinCutBehavior, Polygon, RowSpan, Side, StripConfig, StripSampler,
};

use rand::Rng;

/// Validate `config` against `image` and sample it into polygons.
///
/// Pre: channel 0 of `image` holds the density map (0 = no cut, 255 = full-width cut).
/// Post: either the full polygon list, strips left to right, or an error with no output.
pub fn sample_image<R: Rng + ?Sized>(
    image: &ImageBuffer,
    config: StripConfig,
    rng: &mut R,
) -> Result<Vec<Polygon>, StripError> {
    StripSampler::for_image(image, config)?.sample_to_polygons(image, rng)
}
