use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use gridroute_core::{Coord, Extent};

use crate::neighbors::Neighbors;
use crate::options::SearchOptions;
use crate::traits::Walkable;

/// Parent index of the start node.
const NO_PARENT: usize = usize::MAX;

/// Search node, owned by the arena of a single [`find_path`] call.
struct Node {
    pos: Coord,
    g: f64,
    h: f64,
    f: f64,
    parent: usize,
    /// Sequence number of the node's live heap entry.
    seq: u64,
    closed: bool,
}

/// Heap entry referencing an arena node.
///
/// Ordered so that `BinaryHeap` (a max-heap) pops the lowest `f` first,
/// then the lowest `h`, then the earliest pushed entry.
#[derive(Clone, Copy)]
struct OpenRef {
    idx: usize,
    f: f64,
    h: f64,
    seq: u64,
}

impl Ord for OpenRef {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .f
            .total_cmp(&self.f)
            .then_with(|| other.h.total_cmp(&self.h))
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for OpenRef {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for OpenRef {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for OpenRef {}

/// Compute a shortest path from `start` to `goal` using A*.
///
/// Returns the full path (including both endpoints) or `None` when either
/// endpoint is outside `extent` or not walkable, when the reachable area is
/// exhausted, or when `options.max_iterations` expansions were spent without
/// reaching the goal. The three cases are not distinguished.
///
/// When several open nodes share the lowest `f`, the one with the lowest
/// `h` is expanded first, then the one that entered (or was last improved
/// in) the open set earliest.
pub fn find_path<W: Walkable + ?Sized>(
    start: Coord,
    goal: Coord,
    extent: Extent,
    options: &SearchOptions,
    walkable: &W,
) -> Option<Vec<Coord>> {
    let valid = |p: Coord| extent.contains(p) && walkable.is_walkable(p);
    if !valid(start) || !valid(goal) {
        log::debug!("astar {start} -> {goal}: endpoint outside {extent} or not walkable");
        return None;
    }
    if start == goal {
        return Some(vec![start]);
    }
    log::trace!(
        "astar {start} -> {goal} on {extent}, heuristic {}, diagonal {}",
        options.heuristic,
        options.allow_diagonal
    );

    let heuristic = options.heuristic;
    let mut nodes: Vec<Node> = Vec::new();
    let mut index: HashMap<Coord, usize> = HashMap::new();
    let mut open: BinaryHeap<OpenRef> = BinaryHeap::new();
    let mut seq: u64 = 0;

    let h = heuristic.estimate(start, goal);
    nodes.push(Node {
        pos: start,
        g: 0.0,
        h,
        f: h,
        parent: NO_PARENT,
        seq,
        closed: false,
    });
    index.insert(start, 0);
    open.push(OpenRef {
        idx: 0,
        f: h,
        h,
        seq,
    });

    let mut neighbors = Neighbors::new();
    let mut iterations = 0usize;

    let found = 'search: loop {
        let Some(current) = open.pop() else {
            log::debug!("astar {start} -> {goal}: open set exhausted after {iterations} iterations");
            break 'search None;
        };

        let ci = current.idx;

        // Skip entries superseded by a cheaper one.
        if nodes[ci].closed || nodes[ci].seq != current.seq {
            continue;
        }

        if iterations >= options.max_iterations {
            log::debug!("astar {start} -> {goal}: iteration budget of {iterations} spent");
            break 'search None;
        }
        iterations += 1;

        if nodes[ci].pos == goal {
            break 'search Some(ci);
        }

        nodes[ci].closed = true;
        let current_g = nodes[ci].g;
        let current_pos = nodes[ci].pos;

        for &np in neighbors.admissible(current_pos, extent, options.allow_diagonal, walkable) {
            let step = if current_pos.is_diagonal_to(np) {
                options.diagonal_cost
            } else {
                1.0
            };
            let tentative_g = current_g + step;

            match index.get(&np) {
                Some(&ni) => {
                    let n = &mut nodes[ni];
                    if n.closed || tentative_g >= n.g {
                        continue;
                    }
                    seq += 1;
                    n.g = tentative_g;
                    n.f = tentative_g + n.h;
                    n.parent = ci;
                    n.seq = seq;
                    open.push(OpenRef {
                        idx: ni,
                        f: n.f,
                        h: n.h,
                        seq,
                    });
                }
                None => {
                    seq += 1;
                    let h = heuristic.estimate(np, goal);
                    let ni = nodes.len();
                    nodes.push(Node {
                        pos: np,
                        g: tentative_g,
                        h,
                        f: tentative_g + h,
                        parent: ci,
                        seq,
                        closed: false,
                    });
                    index.insert(np, ni);
                    open.push(OpenRef {
                        idx: ni,
                        f: tentative_g + h,
                        h,
                        seq,
                    });
                }
            }
        }
    };

    let goal_idx = found?;
    let path = reconstruct(&nodes, goal_idx);
    log::trace!(
        "astar {start} -> {goal}: {} steps, cost {:.3}, {iterations} iterations, {} nodes",
        path.len() - 1,
        nodes[goal_idx].g,
        nodes.len()
    );
    Some(path)
}

/// Walk parent links back from `goal_idx` and return the start-to-goal path.
fn reconstruct(nodes: &[Node], goal_idx: usize) -> Vec<Coord> {
    let mut path = Vec::new();
    let mut ci = goal_idx;
    while ci != NO_PARENT {
        path.push(nodes[ci].pos);
        ci = nodes[ci].parent;
    }
    path.reverse();
    path
}
