#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Pure system that finds shortest walking paths across the diamond board.

use std::collections::VecDeque;

use sightline_core::{Board, CellId, MapPoint, Puzzle};

/// Breadth-first path finder that reuses its frontier between queries.
///
/// Units move between orthogonal neighbours only and may enter floor cells
/// that no other unit occupies. Ties between equally short paths resolve to
/// the first one discovered, visiting neighbours up, right, down, left.
#[derive(Debug, Default)]
pub struct PathFinder {
    visited: Vec<bool>,
    parents: Vec<Option<CellId>>,
    queue: VecDeque<MapPoint>,
}

impl PathFinder {
    /// Creates a new path finder with empty scratch buffers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Finds the shortest path a unit standing on `from` can walk to `to`.
    ///
    /// The returned cells exclude `from` and end with `to`; an empty path
    /// means both cells are the same. `None` signals that `to` is unreachable.
    pub fn find_shortest_path(
        &mut self,
        board: &Board,
        from: CellId,
        to: CellId,
        puzzle: &Puzzle,
    ) -> Option<Vec<CellId>> {
        self.find_path_with(board, from, to, |cell| !puzzle.is_accessible(cell))
    }

    /// Finds the shortest path from `from` to `to`, skipping blocked cells.
    ///
    /// The start cell is never tested against `is_blocked`, so a unit may
    /// leave the cell it occupies.
    pub fn find_path_with<F>(
        &mut self,
        board: &Board,
        from: CellId,
        to: CellId,
        mut is_blocked: F,
    ) -> Option<Vec<CellId>>
    where
        F: FnMut(CellId) -> bool,
    {
        let start = board.point(from)?;
        if !board.is_valid(to) {
            return None;
        }
        if from == to {
            return Some(Vec::new());
        }

        self.reset(board.cell_count());
        self.visited[start.cell().index()] = true;
        self.queue.push_back(start);

        while let Some(current) = self.queue.pop_front() {
            if current.cell() == to {
                return Some(self.reconstruct(from, to));
            }

            for neighbor in board.neighbors(current) {
                let slot = neighbor.cell().index();
                if self.visited[slot] || is_blocked(neighbor.cell()) {
                    continue;
                }

                self.visited[slot] = true;
                self.parents[slot] = Some(current.cell());
                self.queue.push_back(neighbor);
            }
        }

        None
    }

    fn reset(&mut self, cell_count: usize) {
        self.visited.clear();
        self.visited.resize(cell_count, false);
        self.parents.clear();
        self.parents.resize(cell_count, None);
        self.queue.clear();
    }

    fn reconstruct(&self, from: CellId, to: CellId) -> Vec<CellId> {
        let mut path = Vec::new();
        let mut cursor = to;

        while cursor != from {
            path.push(cursor);
            match self.parents[cursor.index()] {
                Some(parent) => cursor = parent,
                None => break,
            }
        }

        path.reverse();
        path
    }
}

/// Finds the shortest path from `from` to `to` using a fresh path finder.
#[must_use]
pub fn find_shortest_path(
    board: &Board,
    from: CellId,
    to: CellId,
    puzzle: &Puzzle,
) -> Option<Vec<CellId>> {
    PathFinder::new().find_shortest_path(board, from, to, puzzle)
}
