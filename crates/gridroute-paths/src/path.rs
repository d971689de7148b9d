//! Helpers for inspecting a found path.

use gridroute_core::Coord;

/// Total cost of walking `path` under the search's cost model: 1 per
/// cardinal step, `diagonal_cost` per diagonal step.
pub fn path_cost(path: &[Coord], diagonal_cost: f64) -> f64 {
    path.windows(2)
        .map(|w| {
            if w[0].is_diagonal_to(w[1]) {
                diagonal_cost
            } else {
                1.0
            }
        })
        .sum()
}

/// Whether every consecutive pair in `path` is a single grid step.
///
/// A step moves at most one cell on each axis and never stays in place;
/// diagonal steps are only accepted when `allow_diagonal` is set.
pub fn is_contiguous(path: &[Coord], allow_diagonal: bool) -> bool {
    path.windows(2).all(|w| {
        let (dr, dc) = (w[0].row.abs_diff(w[1].row), w[0].col.abs_diff(w[1].col));
        if dr > 1 || dc > 1 || (dr == 0 && dc == 0) {
            return false;
        }
        allow_diagonal || dr + dc == 1
    })
}
