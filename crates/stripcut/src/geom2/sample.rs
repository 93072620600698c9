//! Uniform sampling in triangles and quadrilaterals.
//!
//! Model
//! - Triangle: draw `(j, k)` uniform on the unit square and fold the upper
//!   half back onto the lower one (`j + k > 1 → (1-j, 1-k)`), then map through
//!   the edge vectors. The fold keeps the density uniform.
//! - Quad `abcd`: split into `abc` and `cda`; each point picks a triangle with
//!   probability proportional to its area.

use super::util::triangle_area;
use super::{Point, MAX_QUAD_POINTS};
use crate::error::StripError;
use rand::Rng;

/// Uniform random point inside triangle `abc`.
pub fn random_point_in_triangle<R: Rng + ?Sized>(
    rng: &mut R,
    a: Point,
    b: Point,
    c: Point,
) -> Point {
    let mut j: f64 = rng.gen();
    let mut k: f64 = rng.gen();
    if j + k > 1.0 {
        j = 1.0 - j;
        k = 1.0 - k;
    }
    a + (b - a) * j + (c - a) * k
}

/// `round(density * area)` uniform random points inside quad `abcd`.
///
/// The quad is split along the `a–c` diagonal, so it must be convex (or at
/// least have `a–c` inside it) for the points to stay within its outline.
///
/// Errors
/// - `DegenerateRegion` when the rounded point count is zero, either because
///   the quad has no area or because `density` is too low for it.
/// - `TooManyPoints` when the count exceeds `MAX_QUAD_POINTS`.
pub fn random_points_in_quad<R: Rng + ?Sized>(
    rng: &mut R,
    density: f64,
    a: Point,
    b: Point,
    c: Point,
    d: Point,
) -> Result<Vec<Point>, StripError> {
    let abc_area = triangle_area(a, b, c);
    let cda_area = triangle_area(c, d, a);
    let total = abc_area + cda_area;

    let n = (density * total).round();
    if n > MAX_QUAD_POINTS as f64 {
        return Err(StripError::TooManyPoints {
            requested: n,
            limit: MAX_QUAD_POINTS,
        });
    }
    if n.is_nan() || n < 1.0 {
        return Err(StripError::DegenerateRegion {
            area: total,
            density,
        });
    }
    let abc_frac = abc_area / total;

    let n = n as usize;
    let mut points = Vec::with_capacity(n);
    for _ in 0..n {
        let p = if rng.gen::<f64>() < abc_frac {
            random_point_in_triangle(rng, a, b, c)
        } else {
            random_point_in_triangle(rng, c, d, a)
        };
        points.push(p);
    }
    Ok(points)
}
