#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Pure system that resolves which cells are visible from a reference cell.
//!
//! Rays are cast from the reference to every board cell, farthest first.
//! Walls interrupt sight, and any unit standing on a ray hides everything
//! behind it while remaining visible itself. Results of rays already cast are
//! memoized for off-diagonal points, while the two principal diagonals through
//! the reference are always recomputed exactly.

mod raster;

use std::cmp::Reverse;

use log::trace;
use sightline_core::{Board, CellId, GridPoint, Map, MapPoint, Puzzle};

pub use raster::{points_between, trace_ray};

/// Line-of-sight resolver that reuses scratch buffers between queries.
#[derive(Debug, Default)]
pub struct VisibilityResolver {
    candidates: Vec<Candidate>,
    resolved: Vec<Option<bool>>,
    occupied: Vec<bool>,
    ray: Vec<GridPoint>,
}

impl VisibilityResolver {
    /// Creates a new resolver with empty scratch buffers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Computes the cells visible from `reference`, in ascending order.
    ///
    /// The reference cell is always part of the result. An invalid reference
    /// sees nothing.
    #[must_use]
    pub fn resolve(&mut self, board: &Board, reference: CellId, puzzle: &Puzzle) -> Vec<CellId> {
        let mut visible = Vec::new();
        self.resolve_into(board, reference, puzzle, &mut visible);
        visible
    }

    /// Computes the cells visible from `reference` into `out`.
    ///
    /// The output buffer is cleared before populating it.
    pub fn resolve_into(
        &mut self,
        board: &Board,
        reference: CellId,
        puzzle: &Puzzle,
        out: &mut Vec<CellId>,
    ) {
        out.clear();

        let Some(origin) = board.point(reference) else {
            return;
        };

        self.prepare(board, origin, puzzle);

        for index in 0..self.candidates.len() {
            let candidate = self.candidates[index].point;
            let slot = candidate.cell().index();

            if self.resolved[slot].is_some() && !origin.is_aligned_with(candidate.grid()) {
                continue;
            }

            trace_ray(board, reference, candidate.cell(), &mut self.ray);
            if self.ray.is_empty() {
                continue;
            }

            self.resolved[slot] = Some(self.walk_ray(board, origin, puzzle.map()));
        }

        out.extend(
            board
                .cells()
                .filter(|cell| *cell == reference || self.resolved[cell.index()] == Some(true)),
        );

        trace!(
            "cell {reference} sees {} of {} cells",
            out.len(),
            board.cell_count()
        );
    }

    fn prepare(&mut self, board: &Board, origin: MapPoint, puzzle: &Puzzle) {
        let cell_count = board.cell_count();

        self.resolved.clear();
        self.resolved.resize(cell_count, None);

        self.occupied.clear();
        self.occupied.resize(cell_count, false);
        for entity in puzzle.entities() {
            if let Some(slot) = self.occupied.get_mut(entity.cell().index()) {
                *slot = true;
            }
        }

        self.candidates.clear();
        self.candidates.reserve(cell_count);
        self.candidates.extend(
            board
                .cells()
                .filter_map(|cell| board.point(cell))
                .map(|point| Candidate {
                    point,
                    distance: origin.distance(point),
                }),
        );
        // Stable: equidistant cells keep ascending identifier order.
        self.candidates
            .sort_by_key(|candidate| Reverse(candidate.distance));
    }

    fn walk_ray(&self, board: &Board, origin: MapPoint, map: &Map) -> bool {
        let mut visible = true;

        for (index, step) in self.ray.iter().enumerate() {
            let Some(current) = board.locate(*step) else {
                continue;
            };

            let behind_unit = index > 0
                && board
                    .locate(self.ray[index - 1])
                    .is_some_and(|previous| self.occupied[previous.cell().index()]);

            if behind_unit {
                visible = false;
            } else if origin.is_aligned_with(current.grid()) {
                visible &= !map.blocks_sight(current.cell());
            } else {
                visible &= match self.resolved[current.cell().index()] {
                    Some(cached) => cached,
                    None => !map.blocks_sight(current.cell()),
                };
            }

            // Sight never recovers once lost.
            if !visible {
                break;
            }
        }

        visible
    }
}

#[derive(Clone, Copy, Debug)]
struct Candidate {
    point: MapPoint,
    distance: u32,
}

/// Computes the cells visible from `reference` using a fresh resolver.
#[must_use]
pub fn resolve_line_of_sight(board: &Board, reference: CellId, puzzle: &Puzzle) -> Vec<CellId> {
    VisibilityResolver::new().resolve(board, reference, puzzle)
}
