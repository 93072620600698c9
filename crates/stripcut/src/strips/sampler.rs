//! Row sampling for vertical strips.
//!
//! Model
//! - Strip `s` is centered at `cx = (s + 0.5) * strip_width`.
//! - Rows sit at `y = 0`, `y = i * du` (`0 < i < strip_res`), and `y = height`.
//!   Interior rows average over `[y - du/2, y + du/2]`; the first and last rows
//!   only over the half that lies inside the image.
//! - Each row averages channel 0 over the rectangle between the centerline and
//!   the right strip edge. Both sides use that window; the left side mirrors
//!   the resulting offset about the centerline. The normalized average times
//!   `strip_halfwidth` is the raw cut halfwidth, which is then kerf-compensated
//!   and bounded (`adjust_cut_halfwidth`).

use super::assemble::assemble_runs;
use super::{MinCutBehavior, Polygon, StripConfig};
use crate::error::StripError;
use crate::geom2::{random_points_in_quad, Point, MAX_QUAD_POINTS};
use crate::image::ImageBuffer;
use nalgebra::vector;
use rand::Rng;

/// Side of a strip's centerline.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    #[inline]
    pub fn sign(self) -> f64 {
        match self {
            Side::Left => -1.0,
            Side::Right => 1.0,
        }
    }
}

/// One sampled row: its `y` and the vertical span it averages over.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RowSpan {
    pub y: f64,
    pub top: f64,
    pub bottom: f64,
}

/// Validated strip layout for an image of fixed size.
#[derive(Clone, Debug)]
pub struct StripSampler {
    width: usize,
    height: usize,
    config: StripConfig,
    strip_width: f64,
    strip_halfwidth: f64,
    min_cut_halfwidth: f64,
    max_cut_halfwidth: f64,
}

impl StripSampler {
    /// Check `config` against a `width x height` image and derive the strip geometry.
    ///
    /// Errors
    /// - `InvalidConfiguration` for an empty image, zero strips/rows, a
    ///   non-positive or non-finite density, negative or non-finite lengths,
    ///   constraints that leave no room for a cut
    ///   (`min_cut_spacing/2 > strip_halfwidth - (min_material_width + beam_width)/2`),
    ///   or a density that would draw more than `MAX_QUAD_POINTS` points per row.
    pub fn new(width: usize, height: usize, config: StripConfig) -> Result<Self, StripError> {
        if width == 0 || height == 0 {
            return Err(StripError::invalid(format!(
                "image must be non-empty (got {width}x{height})"
            )));
        }
        if config.num_strips == 0 {
            return Err(StripError::invalid("num_strips must be >= 1"));
        }
        if config.strip_res == 0 {
            return Err(StripError::invalid("strip_res must be >= 1"));
        }
        if !(config.density.is_finite() && config.density > 0.0) {
            return Err(StripError::invalid(format!(
                "density must be finite and > 0 (got {})",
                config.density
            )));
        }
        for (name, v) in [
            ("min_cut_spacing", config.min_cut_spacing),
            ("min_material_width", config.min_material_width),
            ("beam_width", config.beam_width),
        ] {
            if !(v.is_finite() && v >= 0.0) {
                return Err(StripError::invalid(format!(
                    "{name} must be finite and >= 0 (got {v})"
                )));
            }
        }

        let strip_width = width as f64 / config.num_strips as f64;
        let strip_halfwidth = 0.5 * strip_width;
        if strip_halfwidth <= 0.0 {
            return Err(StripError::invalid("strip halfwidth must be > 0"));
        }
        // Interior rows are the largest sampling windows.
        let row_height = height as f64 / config.strip_res as f64;
        let row_points = config.density * strip_halfwidth * row_height;
        if row_points.round() > MAX_QUAD_POINTS as f64 {
            return Err(StripError::invalid(format!(
                "density {} draws {row_points:.0} points per row (limit {MAX_QUAD_POINTS})",
                config.density
            )));
        }
        let min_cut_halfwidth = 0.5 * config.min_cut_spacing;
        let max_cut_halfwidth =
            strip_halfwidth - 0.5 * (config.min_material_width + config.beam_width);
        if min_cut_halfwidth > max_cut_halfwidth {
            return Err(StripError::invalid(format!(
                "min cut halfwidth {min_cut_halfwidth} exceeds max cut halfwidth \
                 {max_cut_halfwidth} (strip halfwidth {strip_halfwidth}); \
                 use fewer strips or smaller spacing/material/beam widths"
            )));
        }

        Ok(Self {
            width,
            height,
            config,
            strip_width,
            strip_halfwidth,
            min_cut_halfwidth,
            max_cut_halfwidth,
        })
    }

    /// Same as [`StripSampler::new`] with the dimensions taken from `image`.
    pub fn for_image(image: &ImageBuffer, config: StripConfig) -> Result<Self, StripError> {
        Self::new(image.width(), image.height(), config)
    }

    pub fn config(&self) -> &StripConfig {
        &self.config
    }

    pub fn strip_width(&self) -> f64 {
        self.strip_width
    }

    pub fn strip_halfwidth(&self) -> f64 {
        self.strip_halfwidth
    }

    pub fn min_cut_halfwidth(&self) -> f64 {
        self.min_cut_halfwidth
    }

    pub fn max_cut_halfwidth(&self) -> f64 {
        self.max_cut_halfwidth
    }

    /// Nominal row height `height / strip_res`.
    pub fn row_height(&self) -> f64 {
        self.height as f64 / self.config.strip_res as f64
    }

    #[inline]
    pub fn strip_center(&self, s: usize) -> f64 {
        (s as f64 + 0.5) * self.strip_width
    }

    /// The `strip_res + 1` rows of every strip, top to bottom.
    pub fn rows(&self) -> Vec<RowSpan> {
        let h = self.height as f64;
        let du = self.row_height();
        let hdu = 0.5 * du;
        let res = self.config.strip_res;
        let mut rows = Vec::with_capacity(res + 1);
        rows.push(RowSpan {
            y: 0.0,
            top: 0.0,
            bottom: hdu,
        });
        for i in 1..res {
            let y = i as f64 * du;
            rows.push(RowSpan {
                y,
                top: y - hdu,
                bottom: y + hdu,
            });
        }
        rows.push(RowSpan {
            y: h,
            top: h - hdu,
            bottom: h,
        });
        rows
    }

    /// Kerf compensation plus bounds: `max(0, raw - beam/2)` capped at the max
    /// halfwidth and, under `Clamp`, raised to the min halfwidth.
    pub fn adjust_cut_halfwidth(&self, raw: f64) -> f64 {
        let hw = (raw - 0.5 * self.config.beam_width)
            .max(0.0)
            .min(self.max_cut_halfwidth);
        match self.config.min_cut_behavior {
            MinCutBehavior::Clamp => hw.max(self.min_cut_halfwidth),
            MinCutBehavior::Cull => hw,
        }
    }

    /// Boundary points on one side of the strip centered at `cx`, top to bottom.
    pub fn sample_halfstrip<R: Rng + ?Sized>(
        &self,
        image: &ImageBuffer,
        rng: &mut R,
        cx: f64,
        side: Side,
    ) -> Result<Vec<Point>, StripError> {
        self.check_image(image)?;
        let dir = side.sign();
        // Both sides read the same window right of the centerline; only the
        // resulting offset is mirrored.
        let edge = cx + self.strip_halfwidth;
        let rows = self.rows();
        let mut points = Vec::with_capacity(rows.len());
        for row in rows {
            let val = sample_quad(
                image,
                &mut *rng,
                self.config.density,
                vector![cx, row.top],
                vector![edge, row.top],
                vector![edge, row.bottom],
                vector![cx, row.bottom],
            )?;
            let hw = self.adjust_cut_halfwidth(val * self.strip_halfwidth);
            points.push(vector![cx + dir * hw, row.y]);
        }
        Ok(points)
    }

    /// Sample both sides of strip `s` and assemble its polygons.
    pub fn sample_strip<R: Rng + ?Sized>(
        &self,
        image: &ImageBuffer,
        rng: &mut R,
        s: usize,
    ) -> Result<Vec<Polygon>, StripError> {
        if s >= self.config.num_strips {
            return Err(StripError::invalid(format!(
                "strip index {s} out of range (num_strips = {})",
                self.config.num_strips
            )));
        }
        let cx = self.strip_center(s);
        let left = self.sample_halfstrip(image, rng, cx, Side::Left)?;
        let right = self.sample_halfstrip(image, rng, cx, Side::Right)?;
        let polys = assemble_runs(
            &left,
            &right,
            self.config.min_cut_behavior,
            self.config.min_cut_spacing,
        );
        tracing::trace!(strip = s, cx, polygons = polys.len(), "strip sampled");
        Ok(polys)
    }

    /// Sample every strip left to right. Any failure aborts the whole call.
    pub fn sample_to_polygons<R: Rng + ?Sized>(
        &self,
        image: &ImageBuffer,
        rng: &mut R,
    ) -> Result<Vec<Polygon>, StripError> {
        self.check_image(image)?;
        tracing::debug!(
            width = self.width,
            height = self.height,
            num_strips = self.config.num_strips,
            strip_res = self.config.strip_res,
            density = self.config.density,
            behavior = ?self.config.min_cut_behavior,
            "sampling strips"
        );
        let mut polys = Vec::with_capacity(self.config.num_strips);
        for s in 0..self.config.num_strips {
            polys.extend(self.sample_strip(image, rng, s)?);
        }
        tracing::debug!(polygons = polys.len(), "strips sampled");
        Ok(polys)
    }

    fn check_image(&self, image: &ImageBuffer) -> Result<(), StripError> {
        if image.width() != self.width || image.height() != self.height {
            return Err(StripError::invalid(format!(
                "sampler configured for {}x{} but image is {}x{}",
                self.width,
                self.height,
                image.width(),
                image.height()
            )));
        }
        Ok(())
    }
}

/// Mean channel-0 value over quad `abcd`, normalized to `[0, 1]`.
pub fn sample_quad<R: Rng + ?Sized>(
    image: &ImageBuffer,
    rng: &mut R,
    density: f64,
    a: Point,
    b: Point,
    c: Point,
    d: Point,
) -> Result<f64, StripError> {
    let points = random_points_in_quad(rng, density, a, b, c, d)?;
    let total: u64 = points.iter().map(|&p| u64::from(image.sample_at(p))).sum();
    Ok(total as f64 / (points.len() as f64 * 255.0))
}
