#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Pure system that finds where the ally must move to see the enemy.
//!
//! The solver asks the line-of-sight system which cells the enemy can see
//! (sight is symmetric for the purpose of the puzzle), then walks the ally to
//! each of them and keeps the cheapest destinations that fit the movement
//! budget.

use log::debug;
use sightline_core::{Board, CellId, MapEntityType, Puzzle, PuzzleError, PuzzleResult};
use sightline_system_line_of_sight::VisibilityResolver;
use sightline_system_pathfinding::PathFinder;

/// Winning destinations of a puzzle together with the cost of reaching them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Solution {
    /// Cells the ally can reach within budget while seeing the enemy, in
    /// ascending order.
    pub cells: Vec<CellId>,
    /// Movement points spent to reach any of the cells; `None` when the puzzle
    /// has no solution within budget.
    pub movement_cost: Option<u32>,
}

impl Solution {
    /// Reports whether no winning destination exists.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// Puzzle solver that reuses the scratch buffers of its subsystems.
#[derive(Debug, Default)]
pub struct Solver {
    visibility: VisibilityResolver,
    paths: PathFinder,
    visible: Vec<CellId>,
}

impl Solver {
    /// Creates a new solver with empty scratch buffers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Computes the winning destinations and their movement cost.
    ///
    /// Fails with [`PuzzleError::MissingRequiredEntity`] when the puzzle has
    /// no ally or no enemy. When several allies or enemies are present the
    /// first of each is used.
    pub fn solve(
        &mut self,
        board: &Board,
        max_movement_points: u32,
        puzzle: &Puzzle,
    ) -> Result<Solution, PuzzleError> {
        let ally = required(puzzle, MapEntityType::Ally)?;
        let enemy = required(puzzle, MapEntityType::Enemy)?;
        let budget = usize::try_from(max_movement_points).unwrap_or(usize::MAX);

        self.visibility
            .resolve_into(board, enemy, puzzle, &mut self.visible);

        let mut cells = Vec::new();
        let mut best: Option<usize> = None;

        for &cell in &self.visible {
            let Some(path) = self.paths.find_shortest_path(board, ally, cell, puzzle) else {
                continue;
            };

            let cost = path.len();
            if cost > budget {
                continue;
            }

            match best {
                Some(current) if cost > current => {}
                Some(current) if cost == current => cells.push(cell),
                _ => {
                    cells.clear();
                    cells.push(cell);
                    best = Some(cost);
                }
            }
        }

        debug!(
            "puzzle {}: {} visible cells, {} winning within {} movement points",
            puzzle.id(),
            self.visible.len(),
            cells.len(),
            max_movement_points
        );

        Ok(Solution {
            cells,
            movement_cost: best.and_then(|cost| u32::try_from(cost).ok()),
        })
    }

    /// Computes the cells the ally can reach within `max_movement_points`
    /// that are in sight of the enemy, keeping only the cheapest ones.
    pub fn find_winning_cells(
        &mut self,
        board: &Board,
        max_movement_points: u32,
        puzzle: &Puzzle,
    ) -> Result<Vec<CellId>, PuzzleError> {
        self.solve(board, max_movement_points, puzzle)
            .map(|solution| solution.cells)
    }

    /// Checks whether moving the ally to `destination` solves the puzzle.
    pub fn check_destination(
        &mut self,
        board: &Board,
        max_movement_points: u32,
        puzzle: &Puzzle,
        destination: CellId,
    ) -> Result<PuzzleResult, PuzzleError> {
        let winning = self.find_winning_cells(board, max_movement_points, puzzle)?;
        Ok(PuzzleResult {
            success: winning.binary_search(&destination).is_ok(),
            cell: destination,
        })
    }
}

fn required(puzzle: &Puzzle, kind: MapEntityType) -> Result<CellId, PuzzleError> {
    puzzle
        .first_of(kind)
        .ok_or(PuzzleError::MissingRequiredEntity(kind))
}

/// Computes the winning cells of `puzzle` using a fresh solver.
pub fn find_winning_cells(
    board: &Board,
    max_movement_points: u32,
    puzzle: &Puzzle,
) -> Result<Vec<CellId>, PuzzleError> {
    Solver::new().find_winning_cells(board, max_movement_points, puzzle)
}
