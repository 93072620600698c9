use crate::geom2::Point;
use serde::{Deserialize, Serialize};

/// Closed polygon; the last point connects back to the first (not repeated).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Polygon {
    points: Vec<Point>,
}

impl Polygon {
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Join a left boundary (top→bottom) with a right boundary given top→bottom;
    /// the right side is walked bottom→top so the outline closes.
    pub(crate) fn from_sides(mut left: Vec<Point>, right: Vec<Point>) -> Self {
        left.extend(right.into_iter().rev());
        Self { points: left }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn into_points(self) -> Vec<Point> {
        self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Shoelace area; positive for counterclockwise order in a y-up frame.
    pub fn signed_area(&self) -> f64 {
        let n = self.points.len();
        if n < 3 {
            return 0.0;
        }
        let mut acc = 0.0;
        for i in 0..n {
            let p = self.points[i];
            let q = self.points[(i + 1) % n];
            acc += p.x * q.y - q.x * p.y;
        }
        0.5 * acc
    }

    /// Axis-aligned `(min, max)` corners, `None` when empty.
    pub fn bounds(&self) -> Option<(Point, Point)> {
        let first = *self.points.first()?;
        Some(self.points.iter().fold((first, first), |(lo, hi), p| {
            (lo.inf(p), hi.sup(p))
        }))
    }
}
