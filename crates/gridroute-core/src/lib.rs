//! Value types shared across the *gridroute* crates.
//!
//! This crate provides the grid geometry ([`Coord`], [`Extent`]), a simple
//! boolean walkability map ([`Grid`]) that can be parsed from ASCII, and the
//! [`GridError`] type for malformed extents and maps.

pub mod error;
pub mod geom;
pub mod grid;

pub use error::GridError;
pub use geom::{Coord, Extent, ExtentIter};
pub use grid::{Grid, Markers};
