use std::fmt;

use crate::geom::Coord;

/// Errors raised when building grid geometry or parsing an ASCII map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Width or height is not strictly positive.
    InvalidExtent { width: i32, height: i32 },
    /// A map line has a different width than the first one.
    InconsistentSize {
        line: usize,
        expected: usize,
        found: usize,
    },
    /// A character outside the accepted set was found.
    InvalidRune { ch: char, pos: Coord },
    /// A requested marker character does not appear in the map.
    MissingMarker(char),
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidExtent { width, height } => {
                write!(f, "invalid grid extent {width}x{height}: dimensions must be positive")
            }
            Self::InconsistentSize {
                line,
                expected,
                found,
            } => write!(
                f,
                "map line {line} has width {found}, expected {expected}"
            ),
            Self::InvalidRune { ch, pos } => {
                write!(f, "map contains invalid rune \u{201c}{ch}\u{201d} at {pos}")
            }
            Self::MissingMarker(ch) => write!(f, "map has no \u{201c}{ch}\u{201d} marker"),
        }
    }
}

impl std::error::Error for GridError {}
