//! Criterion benchmarks for Monte-Carlo quad sampling and full-image strip sampling.
//! Results: by default under target/criterion.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use nalgebra::vector;
use rand::{rngs::StdRng, Rng, SeedableRng};
use stripcut::geom2::random_points_in_quad;
use stripcut::image::ImageBuffer;
use stripcut::strips::{MinCutBehavior, StripConfig, StripSampler};

fn noise_image(width: usize, height: usize, seed: u64) -> ImageBuffer {
    let mut rng = StdRng::seed_from_u64(seed);
    ImageBuffer::from_fn_rgba(width, height, |_, _| rng.gen()).unwrap()
}

fn bench_quad(c: &mut Criterion) {
    let mut group = c.benchmark_group("quad");
    for &density in &[0.1f64, 1.0, 10.0] {
        group.bench_with_input(
            BenchmarkId::new("random_points_in_quad", density),
            &density,
            |b, &density| {
                b.iter_batched(
                    || StdRng::seed_from_u64(17),
                    |mut rng| {
                        let _pts = random_points_in_quad(
                            &mut rng,
                            density,
                            vector![0.0, 0.0],
                            vector![20.0, 0.0],
                            vector![20.0, 20.0],
                            vector![0.0, 20.0],
                        )
                        .unwrap();
                    },
                    BatchSize::SmallInput,
                )
            },
        );
    }
    group.finish();
}

fn bench_strips(c: &mut Criterion) {
    let mut group = c.benchmark_group("strips");
    let img = noise_image(400, 300, 5);
    for &num_strips in &[10usize, 40] {
        for behavior in [MinCutBehavior::Clamp, MinCutBehavior::Cull] {
            let cfg = StripConfig {
                num_strips,
                strip_res: 60,
                min_cut_spacing: 1.0,
                min_material_width: 0.5,
                beam_width: 0.2,
                min_cut_behavior: behavior,
                density: 0.5,
            };
            let sampler = StripSampler::for_image(&img, cfg).unwrap();
            group.bench_with_input(
                BenchmarkId::new(format!("sample_to_polygons/{behavior:?}"), num_strips),
                &sampler,
                |b, sampler| {
                    b.iter_batched(
                        || StdRng::seed_from_u64(23),
                        |mut rng| {
                            let _polys = sampler.sample_to_polygons(&img, &mut rng).unwrap();
                        },
                        BatchSize::SmallInput,
                    )
                },
            );
        }
    }
    group.finish();
}

criterion_group!(benches, bench_quad, bench_strips);
criterion_main!(benches);
