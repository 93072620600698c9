//! Synthetic density maps for exercising the sampler without an image decoder.

use clap::ValueEnum;
use stripcut::image::ImageBuffer;
use stripcut::StripError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Pattern {
    /// Black on the left, full red on the right.
    Gradient,
    /// Concentric rings around the image center.
    Rings,
    /// Alternating horizontal bands, dark and bright.
    Bands,
}

impl Pattern {
    /// Render the pattern into the red channel of an RGBA buffer.
    pub fn render(self, width: usize, height: usize) -> Result<ImageBuffer, StripError> {
        let w = width.max(1) as f64;
        let h = height.max(1) as f64;
        match self {
            Pattern::Gradient => ImageBuffer::from_fn_rgba(width, height, |x, _| {
                (255.0 * (x as f64 + 0.5) / w).round() as u8
            }),
            Pattern::Rings => {
                let (cx, cy) = (0.5 * w, 0.5 * h);
                let period = 0.1 * w.min(h);
                ImageBuffer::from_fn_rgba(width, height, |x, y| {
                    let r = (x as f64 + 0.5 - cx).hypot(y as f64 + 0.5 - cy);
                    let phase = (r / period * std::f64::consts::TAU).cos();
                    (127.5 * (1.0 + phase)).round() as u8
                })
            }
            Pattern::Bands => {
                let band = (height / 8).max(1);
                ImageBuffer::from_fn_rgba(width, height, |_, y| {
                    if (y / band) % 2 == 0 {
                        230
                    } else {
                        20
                    }
                })
            }
        }
    }
}
