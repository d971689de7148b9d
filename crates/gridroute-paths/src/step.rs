use gridroute_core::Coord;

/// Pick the cell an agent at `current` should move to next along `path`.
///
/// Returns `None` for an empty path or when `current` is the last cell.
/// An agent that is not on the path at all is sent back to its first cell.
pub fn next_step(path: &[Coord], current: Coord) -> Option<Coord> {
    let first = *path.first()?;
    match path.iter().position(|&p| p == current) {
        None => Some(first),
        Some(i) => path.get(i + 1).copied(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(row: i32, col: i32) -> Coord {
        Coord::new(row, col)
    }

    #[test]
    fn empty_path_has_no_step() {
        assert_eq!(next_step(&[], c(0, 0)), None);
    }

    #[test]
    fn last_cell_has_no_step() {
        let path = [c(0, 0), c(0, 1), c(1, 1)];
        assert_eq!(next_step(&path, c(1, 1)), None);
        assert_eq!(next_step(&[c(5, 5)], c(5, 5)), None);
    }

    #[test]
    fn off_path_returns_first_cell() {
        let path = [c(0, 0), c(0, 1), c(1, 1)];
        assert_eq!(next_step(&path, c(7, 7)), Some(c(0, 0)));
    }

    #[test]
    fn on_path_returns_following_cell() {
        let path = [c(0, 0), c(0, 1), c(1, 1)];
        assert_eq!(next_step(&path, c(0, 0)), Some(c(0, 1)));
        assert_eq!(next_step(&path, c(0, 1)), Some(c(1, 1)));
    }

    #[test]
    fn walking_a_path_visits_every_cell() {
        let path = [c(0, 0), c(1, 1), c(2, 1), c(3, 2)];
        let mut at = c(9, 9);
        let mut visited = Vec::new();
        while let Some(next) = next_step(&path, at) {
            visited.push(next);
            at = next;
        }
        assert_eq!(visited, path);
    }
}
