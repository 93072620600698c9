//! Sample a horizontal gradient and print the polygon outline per strip.
//!
//! Usage:
//!   cargo run -p stripcut --example gradient_strips -- [clamp|cull]
//!
//! The left edge of the image is black (no cut), the right edge full red, so
//! strips widen from left to right. With `cull`, the narrow strips on the left
//! disappear entirely.

use rand::{rngs::StdRng, SeedableRng};
use stripcut::prelude::*;

fn main() {
    let behavior = match std::env::args().nth(1).as_deref() {
        Some("cull") => MinCutBehavior::Cull,
        Some("clamp") | None => MinCutBehavior::Clamp,
        Some(other) => {
            eprintln!("usage: gradient_strips [clamp|cull] (got {other})");
            return;
        }
    };
    let (width, height) = (240usize, 120usize);
    let img = ImageBuffer::from_fn_rgba(width, height, |x, _| (x * 255 / (width - 1)) as u8)
        .expect("gradient image");
    let cfg = StripConfig {
        num_strips: 12,
        strip_res: 12,
        min_cut_spacing: 3.0,
        min_material_width: 2.0,
        beam_width: 0.5,
        min_cut_behavior: behavior,
        density: 0.5,
    };
    let sampler = StripSampler::for_image(&img, cfg).expect("valid config");
    let mut rng = StdRng::seed_from_u64(2025);
    let polys = sampler
        .sample_to_polygons(&img, &mut rng)
        .expect("sampling succeeds");
    println!("{behavior:?}: {} polygons", polys.len());
    for (i, p) in polys.iter().enumerate() {
        let Some((lo, hi)) = p.bounds() else {
            continue;
        };
        println!(
            "polygon {i}: {} points, x in [{:.1}, {:.1}], area {:.1}",
            p.len(),
            lo.x,
            hi.x,
            p.signed_area().abs()
        );
    }
}
