use gridroute_core::{Coord, Extent};

/// Walkability predicate consulted by every search and smoothing pass.
///
/// Implemented for any `Fn(Coord) -> bool`, so closures over caller state
/// can be passed directly. Implementations must be free of side effects.
pub trait Walkable {
    /// Whether an agent may stand on `p`.
    fn is_walkable(&self, p: Coord) -> bool;
}

impl<F: Fn(Coord) -> bool + ?Sized> Walkable for F {
    #[inline]
    fn is_walkable(&self, p: Coord) -> bool {
        self(p)
    }
}

/// Predicate that accepts every cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AllWalkable;

impl Walkable for AllWalkable {
    #[inline]
    fn is_walkable(&self, _p: Coord) -> bool {
        true
    }
}

/// Host-side scene queried by the scene-bound searches.
pub trait GridProvider {
    /// Dimensions of the scene grid.
    fn extent(&self) -> Extent;

    /// Whether any entity currently stands on `p`.
    fn is_occupied(&self, p: Coord) -> bool;
}

/// Anything with a grid position, such as an obstacle entity.
pub trait Positioned {
    fn position(&self) -> Coord;
}

impl Positioned for Coord {
    #[inline]
    fn position(&self) -> Coord {
        *self
    }
}

impl<T: Positioned + ?Sized> Positioned for &T {
    #[inline]
    fn position(&self) -> Coord {
        (**self).position()
    }
}
