//! Shortest paths for agents moving on a 2D grid.
//!
//! This crate routes an agent from a start cell to a goal cell:
//!
//! - **A\*** search with four heuristics and optional diagonal movement
//!   ([`find_path`])
//! - **Scene-bound** searches that also avoid entities
//!   ([`find_path_in_scene`], [`find_path_avoiding`])
//! - **String-pulling** smoothing of a found path ([`smooth_path`])
//! - **Step selection** along a path as the agent advances ([`next_step`])
//!
//! Every call owns its own search state; nothing is cached between calls.
//! A search that cannot reach the goal returns `None`, whether the
//! endpoints were invalid, the reachable area was exhausted, or the
//! iteration budget in [`SearchOptions`] ran out.
//!
//! # Seams
//!
//! | Trait | Supplied by the caller as |
//! |---|---|
//! | [`Walkable`] | any `Fn(Coord) -> bool`, or [`AllWalkable`] |
//! | [`GridProvider`] | the host scene (extent + entity occupancy) |
//! | [`Positioned`] | obstacle entities, or plain [`Coord`]s |

mod astar;
mod heuristic;
mod neighbors;
mod options;
mod path;
mod scene;
mod smooth;
mod step;
mod traits;

pub use astar::find_path;
pub use gridroute_core::{Coord, Extent};
pub use heuristic::{Heuristic, OCTILE_DIAGONAL, chebyshev, euclidean, manhattan, octile};
pub use neighbors::Neighbors;
pub use options::{DEFAULT_MAX_ITERATIONS, OptionsError, SearchOptions};
pub use path::{is_contiguous, path_cost};
pub use scene::{find_path_avoiding, find_path_in_scene};
pub use smooth::{LineOfSight, line_of_sight, smooth_path, smooth_path_with};
pub use step::next_step;
pub use traits::{AllWalkable, GridProvider, Positioned, Walkable};
