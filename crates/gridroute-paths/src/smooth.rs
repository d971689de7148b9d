//! Path smoothing by string-pulling.
//!
//! Waypoints that can be skipped because a later waypoint is in straight
//! line of sight are dropped. Two line-of-sight tests are available:
//!
//! - [`LineOfSight::Sampled`] walks the dominant axis one cell at a time and
//!   rounds the other axis to the nearest cell. It is cheap but approximate:
//!   at shallow angles it can step over the corner of a wall, and it can
//!   slip between two diagonally touching walls.
//! - [`LineOfSight::Exact`] visits every cell the segment between the two
//!   cell centres passes through, and refuses to squeeze through a corner
//!   where either flanking cell is blocked.
//!
//! Only the cells strictly between the two endpoints are tested.

use gridroute_core::Coord;

use crate::traits::Walkable;

/// Line-of-sight test used by the smoother.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum LineOfSight {
    /// Rounded unit-step sampling along the dominant axis.
    #[default]
    Sampled,
    /// Full grid traversal of the segment.
    Exact,
}

/// Smooth `path` with [`LineOfSight::Sampled`].
///
/// The result has the same first and last cell and is never longer than
/// the input. Paths of two cells or fewer are returned unchanged.
pub fn smooth_path<W: Walkable + ?Sized>(path: &[Coord], walkable: &W) -> Vec<Coord> {
    smooth_path_with(path, walkable, LineOfSight::Sampled)
}

/// Smooth `path` with the given line-of-sight test.
pub fn smooth_path_with<W: Walkable + ?Sized>(
    path: &[Coord],
    walkable: &W,
    los: LineOfSight,
) -> Vec<Coord> {
    if path.len() <= 2 {
        return path.to_vec();
    }
    let last = path.len() - 1;
    let mut out = vec![path[0]];
    let mut cursor = 0;
    while cursor < last {
        // The next waypoint is always kept, so the cursor always advances.
        let next = (cursor + 2..=last)
            .rev()
            .find(|&j| line_of_sight(path[cursor], path[j], walkable, los))
            .unwrap_or(cursor + 1);
        out.push(path[next]);
        cursor = next;
    }
    log::trace!("smoothed path from {} to {} waypoints", path.len(), out.len());
    out
}

/// Whether the straight line from `a` to `b` is unobstructed.
pub fn line_of_sight<W: Walkable + ?Sized>(
    a: Coord,
    b: Coord,
    walkable: &W,
    los: LineOfSight,
) -> bool {
    match los {
        LineOfSight::Sampled => sampled(a, b, walkable),
        LineOfSight::Exact => exact(a, b, walkable),
    }
}

/// Round half up, so that `x.5` goes to the next cell on both axes.
#[inline]
fn round_half_up(v: f64) -> i32 {
    (v + 0.5).floor() as i32
}

fn sampled<W: Walkable + ?Sized>(a: Coord, b: Coord, walkable: &W) -> bool {
    let dr = i64::from(b.row) - i64::from(a.row);
    let dc = i64::from(b.col) - i64::from(a.col);
    let steps = dr.abs().max(dc.abs());
    (1..steps).all(|i| {
        let t = i as f64 / steps as f64;
        let p = Coord::new(
            round_half_up(f64::from(a.row) + dr as f64 * t),
            round_half_up(f64::from(a.col) + dc as f64 * t),
        );
        walkable.is_walkable(p)
    })
}

fn exact<W: Walkable + ?Sized>(a: Coord, b: Coord, walkable: &W) -> bool {
    let (nr, nc) = (a.row.abs_diff(b.row), a.col.abs_diff(b.col));
    let (sr, sc) = (b.row.cmp(&a.row) as i32, b.col.cmp(&a.col) as i32);
    let mut p = a;
    let (mut ir, mut ic) = (0u32, 0u32);
    while ir < nr || ic < nc {
        // Compare the parameters of the next column boundary, (ic + ½) / nc,
        // and the next row boundary, (ir + ½) / nr, in integers.
        let decision = (1 + 2 * i128::from(ic)) * i128::from(nr)
            - (1 + 2 * i128::from(ir)) * i128::from(nc);
        if decision == 0 {
            // Exactly through a corner: both flanks must be open.
            if !walkable.is_walkable(p.shift(sr, 0)) || !walkable.is_walkable(p.shift(0, sc))
            {
                return false;
            }
            p = p.shift(sr, sc);
            ir += 1;
            ic += 1;
        } else if decision < 0 {
            p = p.shift(0, sc);
            ic += 1;
        } else {
            p = p.shift(sr, 0);
            ir += 1;
        }
        if p != b && !walkable.is_walkable(p) {
            return false;
        }
    }
    true
}
