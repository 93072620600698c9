use super::*;
use crate::error::StripError;
use nalgebra::vector;
use rand::{rngs::StdRng, SeedableRng};

#[test]
fn distance_and_area_basics() {
    assert!((distance(vector![0.0, 0.0], vector![3.0, 4.0]) - 5.0).abs() < 1e-12);
    let a = vector![0.0, 0.0];
    let b = vector![4.0, 0.0];
    let c = vector![0.0, 3.0];
    assert!((triangle_area(a, b, c) - 6.0).abs() < 1e-12);
    // Orientation does not change the unsigned area.
    assert!((triangle_area(a, c, b) - 6.0).abs() < 1e-12);
}

#[test]
fn triangle_points_stay_inside() {
    let mut rng = StdRng::seed_from_u64(7);
    let a = vector![0.0, 0.0];
    let b = vector![10.0, 0.0];
    let c = vector![0.0, 10.0];
    for _ in 0..100_000 {
        let p = random_point_in_triangle(&mut rng, a, b, c);
        assert!(p.x >= 0.0 && p.y >= 0.0, "{p:?}");
        assert!(p.x + p.y <= 10.0 + 1e-9, "{p:?}");
    }
}

#[test]
fn triangle_points_are_uniform() {
    // Split the triangle by the midline x + y = 5: the inner part holds 1/4 of the area.
    let mut rng = StdRng::seed_from_u64(11);
    let a = vector![0.0, 0.0];
    let b = vector![10.0, 0.0];
    let c = vector![0.0, 10.0];
    let n = 40_000;
    let inner = (0..n)
        .filter(|_| {
            let p = random_point_in_triangle(&mut rng, a, b, c);
            p.x + p.y < 5.0
        })
        .count();
    let frac = inner as f64 / n as f64;
    assert!((frac - 0.25).abs() < 0.015, "inner fraction {frac}");
}

#[test]
fn unit_square_point_count_matches_density() {
    let mut rng = StdRng::seed_from_u64(1);
    let pts = random_points_in_quad(
        &mut rng,
        1000.0,
        vector![0.0, 0.0],
        vector![1.0, 0.0],
        vector![1.0, 1.0],
        vector![0.0, 1.0],
    )
    .unwrap();
    assert_eq!(pts.len(), 1000);
    assert!(pts
        .iter()
        .all(|p| (0.0..=1.0).contains(&p.x) && (0.0..=1.0).contains(&p.y)));
}

#[test]
fn quad_split_follows_area_fractions() {
    // abc has area 4, cda has area 2; abc is the part below the a–c diagonal.
    let a = vector![0.0, 0.0];
    let b = vector![4.0, 0.0];
    let c = vector![4.0, 2.0];
    let d = vector![0.0, 1.0];
    let mut rng = StdRng::seed_from_u64(2024);
    let mut in_abc = 0usize;
    let mut total = 0usize;
    for _ in 0..10 {
        let pts = random_points_in_quad(&mut rng, 500.0, a, b, c, d).unwrap();
        assert_eq!(pts.len(), 3000);
        total += pts.len();
        in_abc += pts.iter().filter(|p| p.y < 0.5 * p.x).count();
    }
    let frac = in_abc as f64 / total as f64;
    assert!((frac - 2.0 / 3.0).abs() < 0.02, "abc fraction {frac}");
}

#[test]
fn zero_area_quad_is_degenerate() {
    let mut rng = StdRng::seed_from_u64(3);
    let p = vector![2.0, 2.0];
    let err = random_points_in_quad(&mut rng, 1e6, p, p, p, p).unwrap_err();
    assert!(matches!(err, StripError::DegenerateRegion { .. }));

    // Collinear corners also enclose nothing.
    let err = random_points_in_quad(
        &mut rng,
        1e6,
        vector![0.0, 0.0],
        vector![1.0, 0.0],
        vector![2.0, 0.0],
        vector![3.0, 0.0],
    )
    .unwrap_err();
    assert!(matches!(err, StripError::DegenerateRegion { .. }));
}

#[test]
fn low_density_is_degenerate() {
    let mut rng = StdRng::seed_from_u64(4);
    let res = random_points_in_quad(
        &mut rng,
        0.001,
        vector![0.0, 0.0],
        vector![10.0, 0.0],
        vector![10.0, 10.0],
        vector![0.0, 10.0],
    );
    assert_eq!(
        res,
        Err(StripError::DegenerateRegion {
            area: 100.0,
            density: 0.001
        })
    );
}

#[test]
fn huge_point_counts_are_refused() {
    let mut rng = StdRng::seed_from_u64(5);
    let (a, b, c, d) = (
        vector![0.0, 0.0],
        vector![10.0, 0.0],
        vector![10.0, 10.0],
        vector![0.0, 10.0],
    );
    for density in [1e18, f64::INFINITY] {
        let err = random_points_in_quad(&mut rng, density, a, b, c, d).unwrap_err();
        match err {
            StripError::TooManyPoints { limit, .. } => assert_eq!(limit, MAX_QUAD_POINTS),
            other => panic!("density {density}: unexpected {other:?}"),
        }
    }
}
