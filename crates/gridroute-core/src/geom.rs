//! Geometry primitives: [`Coord`] and [`Extent`].
//!
//! Coordinates are `(row, col)` pairs. Rows grow downward, columns grow to
//! the right, matching how ASCII maps are read.

use std::fmt;
use std::ops::{Add, Sub};

use crate::error::GridError;

// ---------------------------------------------------------------------------
// Coord
// ---------------------------------------------------------------------------

/// A grid cell identified by `(row, col)`. Equality is by value only.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub row: i32,
    pub col: i32,
}

impl Coord {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { row: 0, col: 0 };

    /// Create a new coordinate.
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Return a coordinate shifted by (dr, dc).
    #[inline]
    pub const fn shift(self, dr: i32, dc: i32) -> Self {
        Self {
            row: self.row + dr,
            col: self.col + dc,
        }
    }

    /// Whether `self` and `other` differ on both axes.
    #[inline]
    pub fn is_diagonal_to(self, other: Coord) -> bool {
        self.row != other.row && self.col != other.col
    }
}

impl PartialOrd for Coord {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Coord {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.row.cmp(&other.row).then(self.col.cmp(&other.col))
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(i32, i32)> for Coord {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

impl Add for Coord {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.row + rhs.row, self.col + rhs.col)
    }
}

impl Sub for Coord {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.row - rhs.row, self.col - rhs.col)
    }
}

// ---------------------------------------------------------------------------
// Extent
// ---------------------------------------------------------------------------

/// Grid dimensions. Valid cells are `row ∈ [0, height)` and `col ∈ [0, width)`.
///
/// An `Extent` can only be built with strictly positive dimensions, so every
/// value of this type describes at least one cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Extent {
    width: i32,
    height: i32,
}

impl Extent {
    /// Create an extent, rejecting non-positive dimensions.
    pub fn new(width: i32, height: i32) -> Result<Self, GridError> {
        if width <= 0 || height <= 0 {
            return Err(GridError::InvalidExtent { width, height });
        }
        Ok(Self { width, height })
    }

    /// Number of columns.
    #[inline]
    pub fn width(self) -> i32 {
        self.width
    }

    /// Number of rows.
    #[inline]
    pub fn height(self) -> i32 {
        self.height
    }

    /// Total number of cells.
    #[inline]
    pub fn len(self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Always `false`: an extent holds at least one cell.
    #[inline]
    pub fn is_empty(self) -> bool {
        false
    }

    /// Whether `p` lies inside the half-open extent.
    #[inline]
    pub fn contains(self, p: Coord) -> bool {
        p.row >= 0 && p.row < self.height && p.col >= 0 && p.col < self.width
    }

    /// Flat row-major index of `p`, or `None` if out of bounds.
    #[inline]
    pub fn index(self, p: Coord) -> Option<usize> {
        if !self.contains(p) {
            return None;
        }
        Some(p.row as usize * self.width as usize + p.col as usize)
    }

    /// Row-major iterator over every cell.
    #[inline]
    pub fn iter(self) -> ExtentIter {
        ExtentIter {
            extent: self,
            cur: Coord::ZERO,
        }
    }
}

impl IntoIterator for Extent {
    type Item = Coord;
    type IntoIter = ExtentIter;
    #[inline]
    fn into_iter(self) -> ExtentIter {
        self.iter()
    }
}

impl fmt::Display for Extent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Extent {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(serde::Deserialize)]
        struct Raw {
            width: i32,
            height: i32,
        }
        let raw = Raw::deserialize(deserializer)?;
        Extent::new(raw.width, raw.height).map_err(serde::de::Error::custom)
    }
}

// ---------------------------------------------------------------------------
// ExtentIter
// ---------------------------------------------------------------------------

/// Row-major iterator over the cells of an [`Extent`].
#[derive(Clone, Debug)]
pub struct ExtentIter {
    extent: Extent,
    cur: Coord,
}

impl Iterator for ExtentIter {
    type Item = Coord;

    #[inline]
    fn next(&mut self) -> Option<Coord> {
        if self.cur.row >= self.extent.height {
            return None;
        }
        let p = self.cur;
        self.cur.col += 1;
        if self.cur.col >= self.extent.width {
            self.cur.col = 0;
            self.cur.row += 1;
        }
        Some(p)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.cur.row >= self.extent.height {
            return (0, Some(0));
        }
        let w = self.extent.width as usize;
        let remaining_in_row = (self.extent.width - self.cur.col) as usize;
        let remaining_rows = (self.extent.height - self.cur.row - 1) as usize;
        let total = remaining_in_row + remaining_rows * w;
        (total, Some(total))
    }
}

impl ExactSizeIterator for ExtentIter {}
