//! Distance estimates used to guide A*.

use std::f64::consts::SQRT_2;
use std::fmt;

use gridroute_core::Coord;

/// Diagonal unit used by [`octile`]. Fixed at √2 whatever the configured
/// diagonal step cost; with a smaller `diagonal_cost` the octile estimate
/// may overestimate and A* loses its optimality guarantee.
pub const OCTILE_DIAGONAL: f64 = SQRT_2;

/// Heuristic selector.
///
/// Deserializes through [`Heuristic::from_name`], so configuration accepts
/// any casing and unknown names fall back to Manhattan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize),
    serde(rename_all = "lowercase")
)]
pub enum Heuristic {
    /// `|dy| + |dx|`. Admissible for 4-way movement only.
    #[default]
    Manhattan,
    /// Straight-line distance.
    Euclidean,
    /// `max(|dy|, |dx|)`. Admissible for 8-way movement.
    Chebyshev,
    /// 8-way distance with √2 diagonals.
    Octile,
}

impl Heuristic {
    /// Estimate the remaining cost from `a` to `b`.
    #[inline]
    pub fn estimate(self, a: Coord, b: Coord) -> f64 {
        match self {
            Self::Manhattan => manhattan(a, b),
            Self::Euclidean => euclidean(a, b),
            Self::Chebyshev => chebyshev(a, b),
            Self::Octile => octile(a, b),
        }
    }

    /// Look up a heuristic by name, ignoring case. Unknown names fall back
    /// to [`Heuristic::Manhattan`].
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "manhattan" => Self::Manhattan,
            "euclidean" => Self::Euclidean,
            "chebyshev" => Self::Chebyshev,
            "octile" => Self::Octile,
            other => {
                log::debug!("unknown heuristic {other:?}, using manhattan");
                Self::Manhattan
            }
        }
    }

    /// Lowercase name, as accepted by [`from_name`](Self::from_name).
    pub fn name(self) -> &'static str {
        match self {
            Self::Manhattan => "manhattan",
            Self::Euclidean => "euclidean",
            Self::Chebyshev => "chebyshev",
            Self::Octile => "octile",
        }
    }
}

impl fmt::Display for Heuristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Heuristic {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = <String as serde::Deserialize>::deserialize(deserializer)?;
        Ok(Self::from_name(&name))
    }
}

#[inline]
fn deltas(a: Coord, b: Coord) -> (f64, f64) {
    (
        f64::from(a.row.abs_diff(b.row)),
        f64::from(a.col.abs_diff(b.col)),
    )
}

/// Manhattan (L1) distance between two cells.
#[inline]
pub fn manhattan(a: Coord, b: Coord) -> f64 {
    let (dy, dx) = deltas(a, b);
    dy + dx
}

/// Euclidean (L2) distance between two cells.
#[inline]
pub fn euclidean(a: Coord, b: Coord) -> f64 {
    let (dy, dx) = deltas(a, b);
    dy.hypot(dx)
}

/// Chebyshev (L∞) distance between two cells.
#[inline]
pub fn chebyshev(a: Coord, b: Coord) -> f64 {
    let (dy, dx) = deltas(a, b);
    dy.max(dx)
}

/// Octile distance between two cells, using [`OCTILE_DIAGONAL`].
#[inline]
pub fn octile(a: Coord, b: Coord) -> f64 {
    let (dy, dx) = deltas(a, b);
    dy + dx + (OCTILE_DIAGONAL - 2.0) * dy.min(dx)
}
