//! A boolean walkability grid, parsable from ASCII maps.
//!
//! In map text `.` is floor and `#` is wall. Extra marker characters (for
//! example `S` and `G` for start and goal) can be declared when parsing;
//! they are walkable and their positions are reported back.

use crate::error::GridError;
use crate::geom::{Coord, Extent};

const FLOOR: char = '.';
const WALL: char = '#';

/// A rectangular map of walkable / blocked cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    extent: Extent,
    cells: Vec<bool>,
}

impl Grid {
    /// Create a grid where every cell is walkable.
    pub fn new(extent: Extent) -> Self {
        Self {
            extent,
            cells: vec![true; extent.len()],
        }
    }

    /// Parse a map made only of `.` and `#`.
    pub fn from_ascii(s: &str) -> Result<Self, GridError> {
        Self::from_ascii_with_markers(s, "").map(|(grid, _)| grid)
    }

    /// Parse a map that may also contain any character of `markers`.
    ///
    /// The whole string is trimmed; individual lines are not, apart from a
    /// trailing `\r`. All lines must have the same width.
    pub fn from_ascii_with_markers(s: &str, markers: &str) -> Result<(Self, Markers), GridError> {
        let lines: Vec<&str> = s
            .trim()
            .lines()
            .map(|l| l.strip_suffix('\r').unwrap_or(l))
            .collect();
        let expected = lines.first().map_or(0, |l| l.chars().count());
        let extent = Extent::new(expected as i32, lines.len() as i32)?;

        let mut cells = Vec::with_capacity(extent.len());
        let mut found = Vec::new();
        for (row, line) in lines.iter().enumerate() {
            let width = line.chars().count();
            if width != expected {
                return Err(GridError::InconsistentSize {
                    line: row,
                    expected,
                    found: width,
                });
            }
            for (col, ch) in line.chars().enumerate() {
                let pos = Coord::new(row as i32, col as i32);
                match ch {
                    FLOOR => cells.push(true),
                    WALL => cells.push(false),
                    c if markers.contains(c) => {
                        cells.push(true);
                        found.push((c, pos));
                    }
                    c => return Err(GridError::InvalidRune { ch: c, pos }),
                }
            }
        }
        Ok((Self { extent, cells }, Markers(found)))
    }

    /// The grid dimensions.
    #[inline]
    pub fn extent(&self) -> Extent {
        self.extent
    }

    /// Whether `p` is inside the grid and walkable.
    #[inline]
    pub fn is_walkable(&self, p: Coord) -> bool {
        self.extent.index(p).is_some_and(|i| self.cells[i])
    }

    /// Mark a cell walkable or blocked. Does nothing if out of bounds.
    pub fn set_walkable(&mut self, p: Coord, walkable: bool) {
        if let Some(i) = self.extent.index(p) {
            self.cells[i] = walkable;
        }
    }

    /// Number of walkable cells.
    pub fn count_walkable(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// Render the grid back to ASCII, letting `overlay` replace any cell.
    pub fn render(&self, overlay: impl Fn(Coord) -> Option<char>) -> String {
        let mut out = String::with_capacity(self.extent.len() + self.extent.height() as usize);
        for p in self.extent {
            if p.col == 0 && p.row > 0 {
                out.push('\n');
            }
            let ch = overlay(p).unwrap_or(if self.is_walkable(p) { FLOOR } else { WALL });
            out.push(ch);
        }
        out
    }
}

/// Marker characters found while parsing a map, in reading order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Markers(Vec<(char, Coord)>);

impl Markers {
    /// Position of the first occurrence of `ch`.
    pub fn find(&self, ch: char) -> Result<Coord, GridError> {
        self.0
            .iter()
            .find(|(c, _)| *c == ch)
            .map(|&(_, p)| p)
            .ok_or(GridError::MissingMarker(ch))
    }

    /// Positions of every occurrence of `ch`.
    pub fn all(&self, ch: char) -> impl Iterator<Item = Coord> + '_ {
        self.0.iter().filter(move |(c, _)| *c == ch).map(|&(_, p)| p)
    }

    /// Number of markers found.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no marker was found.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROOM: &str = "\
####
#..#
#..#
####";

    #[test]
    fn parse_and_size() {
        let g = Grid::from_ascii(ROOM).unwrap();
        assert_eq!(g.extent(), Extent::new(4, 4).unwrap());
        assert_eq!(g.count_walkable(), 4);
        assert!(g.is_walkable(Coord::new(1, 1)));
        assert!(!g.is_walkable(Coord::new(0, 0)));
        assert!(!g.is_walkable(Coord::new(9, 9)));
    }

    #[test]
    fn markers_are_walkable_and_reported() {
        let (g, m) = Grid::from_ascii_with_markers("S.#\n.#G", "SG").unwrap();
        assert_eq!(m.len(), 2);
        assert_eq!(m.find('S'), Ok(Coord::new(0, 0)));
        assert_eq!(m.find('G'), Ok(Coord::new(1, 2)));
        assert!(g.is_walkable(Coord::new(1, 2)));
        assert_eq!(m.find('X'), Err(GridError::MissingMarker('X')));
    }

    #[test]
    fn all_markers_of_a_kind() {
        let (_, m) = Grid::from_ascii_with_markers("E.E\n..E", "E").unwrap();
        let es: Vec<_> = m.all('E').collect();
        assert_eq!(es, vec![Coord::new(0, 0), Coord::new(0, 2), Coord::new(1, 2)]);
    }

    #[test]
    fn inconsistent_size_error() {
        assert_eq!(
            Grid::from_ascii("..\n..."),
            Err(GridError::InconsistentSize {
                line: 1,
                expected: 2,
                found: 3
            })
        );
    }

    #[test]
    fn invalid_rune_error() {
        assert_eq!(
            Grid::from_ascii("..\n.x"),
            Err(GridError::InvalidRune {
                ch: 'x',
                pos: Coord::new(1, 1)
            })
        );
    }

    #[test]
    fn empty_map_is_an_invalid_extent() {
        assert!(matches!(
            Grid::from_ascii("   "),
            Err(GridError::InvalidExtent { .. })
        ));
    }

    #[test]
    fn set_walkable_and_render() {
        let mut g = Grid::new(Extent::new(3, 2).unwrap());
        g.set_walkable(Coord::new(0, 1), false);
        g.set_walkable(Coord::new(5, 5), false);
        let s = g.render(|p| (p == Coord::new(1, 2)).then_some('*'));
        assert_eq!(s, ".#.\n..*");
    }
}
