//! Turn per-row left/right boundary points into closed polygons.
//!
//! Under `Clamp` every row belongs to the single strip polygon. Under `Cull`
//! a row is kept only while its left–right gap is at least `min_cut_spacing`;
//! consecutive kept rows form a run, and each run of two or more rows closes
//! into its own polygon.

use super::{MinCutBehavior, Polygon};
use crate::geom2::{distance, Point};

/// Per-strip run accumulator.
#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) enum RunState {
    #[default]
    Idle,
    Accumulating {
        left: Vec<Point>,
        right: Vec<Point>,
    },
}

impl RunState {
    /// Advance by one row; an excluded row (`None`) closes any open run.
    fn step(self, row: Option<(Point, Point)>, out: &mut Vec<Polygon>) -> Self {
        match (self, row) {
            (RunState::Idle, Some((lp, rp))) => RunState::Accumulating {
                left: vec![lp],
                right: vec![rp],
            },
            (RunState::Accumulating { mut left, mut right }, Some((lp, rp))) => {
                left.push(lp);
                right.push(rp);
                RunState::Accumulating { left, right }
            }
            (state, None) => {
                state.close(out);
                RunState::Idle
            }
        }
    }

    /// Emit the open run if it spans at least two rows; shorter runs are dropped.
    fn close(self, out: &mut Vec<Polygon>) {
        if let RunState::Accumulating { left, right } = self {
            if left.len() > 1 {
                out.push(Polygon::from_sides(left, right));
            }
        }
    }
}

/// Assemble the polygons of one strip from its row points (both sides top→bottom).
pub fn assemble_runs(
    left: &[Point],
    right: &[Point],
    behavior: MinCutBehavior,
    min_cut_spacing: f64,
) -> Vec<Polygon> {
    debug_assert_eq!(left.len(), right.len());
    let mut out = Vec::new();
    let end = left
        .iter()
        .zip(right)
        .fold(RunState::Idle, |state, (&lp, &rp)| {
            let included = match behavior {
                MinCutBehavior::Clamp => true,
                MinCutBehavior::Cull => distance(lp, rp) >= min_cut_spacing,
            };
            state.step(included.then_some((lp, rp)), &mut out)
        });
    end.close(&mut out);
    out
}
