//! Strip sampler: image → density-modulated strip polygons.
//!
//! Purpose
//! - Partition the image into `num_strips` vertical bands, estimate local
//!   density per row and side, and convert it into a cut halfwidth that
//!   honours the minimum cut spacing, the material left between strips, and
//!   the beam kerf.
//! - Assemble the row offsets into closed polygons, one per strip (`Clamp`)
//!   or one per sufficiently wide run of rows (`Cull`).
//!
//! Flow
//! - `StripSampler::new` validates the configuration before any sampling.
//! - `StripSampler::sample_to_polygons` samples all strips; the result is
//!   all-or-nothing.
//!
//! Polarity: a higher channel value means a wider cut.

mod assemble;
mod config;
mod polygon;
mod sampler;

pub use assemble::assemble_runs;
pub use config::{MinCutBehavior, StripConfig};
pub use polygon::Polygon;
pub use sampler::{sample_quad, RowSpan, Side, StripSampler};
