use gridroute_core::{Coord, Extent};

use crate::traits::Walkable;

/// Cardinal offsets: up, right, down, left.
const CARDINALS: [Coord; 4] = [
    Coord::new(-1, 0),
    Coord::new(0, 1),
    Coord::new(1, 0),
    Coord::new(0, -1),
];

/// Diagonal offsets: up-right, down-right, down-left, up-left.
const DIAGONALS: [Coord; 4] = [
    Coord::new(-1, 1),
    Coord::new(1, 1),
    Coord::new(1, -1),
    Coord::new(-1, -1),
];

/// Reusable neighbor computation helper.
///
/// Produces the admissible moves out of a cell: in-bounds, walkable
/// cardinal cells, followed (when diagonals are allowed) by walkable
/// diagonal cells with at least one walkable flanking orthogonal cell.
/// A diagonal step is refused only when *both* flanks are blocked.
pub struct Neighbors {
    buf: Vec<Coord>,
}

impl Default for Neighbors {
    fn default() -> Self {
        Self::new()
    }
}

impl Neighbors {
    /// Create a new `Neighbors` helper.
    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(8),
        }
    }

    /// Return the admissible neighbors of `p`, in a fixed order.
    pub fn admissible<W: Walkable + ?Sized>(
        &mut self,
        p: Coord,
        extent: Extent,
        allow_diagonal: bool,
        walkable: &W,
    ) -> &[Coord] {
        self.buf.clear();
        let passable = |q: Coord| extent.contains(q) && walkable.is_walkable(q);

        for d in CARDINALS {
            let n = p + d;
            if passable(n) {
                self.buf.push(n);
            }
        }
        if allow_diagonal {
            for d in DIAGONALS {
                let n = p + d;
                if !passable(n) {
                    continue;
                }
                // Flanks: same row as the target, and same column as the target.
                if passable(p.shift(d.row, 0)) || passable(p.shift(0, d.col)) {
                    self.buf.push(n);
                }
            }
        }
        &self.buf
    }
}
