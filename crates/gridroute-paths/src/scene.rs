//! Searches bound to a host scene instead of a bare extent.

use std::collections::HashSet;

use gridroute_core::Coord;

use crate::astar::find_path;
use crate::options::SearchOptions;
use crate::traits::{GridProvider, Positioned, Walkable};

/// [`find_path`] over the provider's extent, treating every cell occupied
/// by a scene entity as blocked in addition to `walkable`.
pub fn find_path_in_scene<G, W>(
    start: Coord,
    goal: Coord,
    provider: &G,
    options: &SearchOptions,
    walkable: &W,
) -> Option<Vec<Coord>>
where
    G: GridProvider + ?Sized,
    W: Walkable + ?Sized,
{
    let free = |p: Coord| walkable.is_walkable(p) && !provider.is_occupied(p);
    find_path(start, goal, provider.extent(), options, &free)
}

/// [`find_path`] over the provider's extent, treating the cells under the
/// given obstacles as blocked in addition to `walkable`.
///
/// Obstacles are reduced to the set of their positions once, before the
/// search starts; the provider's own occupancy is not consulted.
pub fn find_path_avoiding<G, I, W>(
    start: Coord,
    goal: Coord,
    provider: &G,
    obstacles: I,
    options: &SearchOptions,
    walkable: &W,
) -> Option<Vec<Coord>>
where
    G: GridProvider + ?Sized,
    I: IntoIterator,
    I::Item: Positioned,
    W: Walkable + ?Sized,
{
    let occupied: HashSet<Coord> = obstacles.into_iter().map(|o| o.position()).collect();
    log::trace!("avoiding {} occupied cells", occupied.len());
    let free = |p: Coord| walkable.is_walkable(p) && !occupied.contains(&p);
    find_path(start, goal, provider.extent(), options, &free)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::AllWalkable;
    use gridroute_core::{Extent, Grid};

    fn c(row: i32, col: i32) -> Coord {
        Coord::new(row, col)
    }

    struct Crate {
        at: Coord,
    }

    impl Positioned for Crate {
        fn position(&self) -> Coord {
            self.at
        }
    }

    struct TestScene {
        extent: Extent,
        entities: Vec<Crate>,
    }

    impl GridProvider for TestScene {
        fn extent(&self) -> Extent {
            self.extent
        }

        fn is_occupied(&self, p: Coord) -> bool {
            self.entities.iter().any(|e| e.at == p)
        }
    }

    fn column_scene() -> TestScene {
        // Entities fill column 2 except for the bottom row.
        TestScene {
            extent: Extent::new(5, 5).unwrap(),
            entities: (0..4).map(|row| Crate { at: c(row, 2) }).collect(),
        }
    }

    #[test]
    fn scene_entities_block_cells() {
        let scene = column_scene();
        let path = find_path_in_scene(
            c(0, 0),
            c(0, 4),
            &scene,
            &SearchOptions::default(),
            &AllWalkable,
        )
        .unwrap();
        assert!(path.contains(&c(4, 2)));
        assert!(path.iter().all(|&p| !scene.is_occupied(p)));
        assert_eq!(path.len(), 13);
    }

    #[test]
    fn scene_occupancy_combines_with_walkable() {
        let scene = column_scene();
        let walk = |p: Coord| p != c(4, 2);
        assert_eq!(
            find_path_in_scene(c(0, 0), c(0, 4), &scene, &SearchOptions::default(), &walk),
            None
        );
    }

    #[test]
    fn occupied_goal_is_unreachable() {
        let scene = column_scene();
        assert_eq!(
            find_path_in_scene(
                c(0, 0),
                c(1, 2),
                &scene,
                &SearchOptions::default(),
                &AllWalkable
            ),
            None
        );
    }

    #[test]
    fn avoiding_uses_obstacle_positions_only() {
        let scene = column_scene();
        // Obstacles here are a different set than the scene's entities.
        let obstacles = [c(1, 0), c(1, 1), c(1, 3), c(1, 4)];
        let path = find_path_avoiding(
            c(0, 0),
            c(2, 0),
            &scene,
            obstacles,
            &SearchOptions::default(),
            &AllWalkable,
        )
        .unwrap();
        assert!(path.contains(&c(1, 2)));
        assert!(path.iter().all(|p| !obstacles.contains(p)));
    }

    #[test]
    fn avoiding_accepts_borrowed_entities() {
        let g = Grid::from_ascii(
            "\
.....
.....
.....",
        )
        .unwrap();
        let scene = TestScene {
            extent: g.extent(),
            entities: Vec::new(),
        };
        let crates = vec![Crate { at: c(0, 1) }, Crate { at: c(1, 1) }, Crate { at: c(2, 1) }];
        let walk = |p: Coord| g.is_walkable(p);
        assert_eq!(
            find_path_avoiding(
                c(1, 0),
                c(1, 4),
                &scene,
                &crates,
                &SearchOptions::default().with_diagonal(true),
                &walk
            ),
            None
        );
        let path = find_path_avoiding(
            c(1, 0),
            c(1, 4),
            &scene,
            &crates[..2],
            &SearchOptions::default(),
            &walk,
        )
        .unwrap();
        assert!(path.contains(&c(2, 1)));
    }
}
