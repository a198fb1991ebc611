//! Diamond board geometry: the bijection between linear cell identifiers and
//! diamond coordinates.
//!
//! Cells are numbered row-major over `width` columns and `2 * height` rows.
//! Odd rows are shifted half a cell to the right, which turns the layout into
//! a diamond when expressed in `(x, y)`: moving along a row keeps `x - y`
//! constant, while `x + y` is constant along the zig-zag columns.

use serde::{Deserialize, Serialize};

use crate::{CellId, GridPoint, Map, MapPoint, PuzzleError};

/// Number of cells in each row of the default battlefield.
pub const DEFAULT_BOARD_WIDTH: u32 = 14;
/// Half the number of rows of the default battlefield.
pub const DEFAULT_BOARD_HEIGHT: u32 = 20;

/// Size of a diamond board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoardDimensions {
    /// Number of cells laid out along each row.
    pub width: u32,
    /// Half the number of rows; the board holds `width * 2 * height` cells.
    pub height: u32,
}

impl BoardDimensions {
    /// Creates a new dimension descriptor.
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl Default for BoardDimensions {
    fn default() -> Self {
        Self::new(DEFAULT_BOARD_WIDTH, DEFAULT_BOARD_HEIGHT)
    }
}

/// Coordinate system of a diamond board.
///
/// Conversions never fail loudly: invalid identifiers and coordinates outside
/// the diamond resolve to `None`, leaving the validity decision to callers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Board {
    dimensions: BoardDimensions,
}

impl Board {
    /// Creates a board with the provided dimensions.
    #[must_use]
    pub const fn new(dimensions: BoardDimensions) -> Self {
        Self { dimensions }
    }

    /// Dimensions the board was configured with.
    #[must_use]
    pub const fn dimensions(&self) -> BoardDimensions {
        self.dimensions
    }

    /// Total number of cells on the board.
    #[must_use]
    pub const fn cell_count(&self) -> usize {
        self.dimensions.width as usize * 2 * self.dimensions.height as usize
    }

    /// Reports whether a raw identifier names a cell of this board.
    #[must_use]
    pub fn is_valid_cell_id(&self, raw: i64) -> bool {
        usize::try_from(raw).is_ok_and(|index| index < self.cell_count())
    }

    /// Reports whether `cell` names a cell of this board.
    #[must_use]
    pub fn is_valid(&self, cell: CellId) -> bool {
        self.is_valid_cell_id(i64::from(cell.get()))
    }

    /// Iterates over every cell identifier in ascending order.
    pub fn cells(&self) -> impl Iterator<Item = CellId> {
        let count = u32::try_from(self.cell_count()).unwrap_or(u32::MAX);
        (0..count).map(CellId::new)
    }

    /// Resolves a cell identifier into its diamond coordinates.
    #[must_use]
    pub fn point(&self, cell: CellId) -> Option<MapPoint> {
        if !self.is_valid(cell) {
            return None;
        }

        let width = i64::from(self.dimensions.width);
        let id = i64::from(cell.get());
        let row = id / width;
        let row_half = (row + 1) / 2;
        let column = id - row * width;

        let x = i32::try_from(row_half + column).ok()?;
        let y = i32::try_from(column - (row - row_half)).ok()?;
        Some(MapPoint::new(x, y, cell))
    }

    /// Reports whether a coordinate lies inside the diamond.
    #[must_use]
    pub fn contains(&self, point: GridPoint) -> bool {
        let x = i64::from(point.x());
        let y = i64::from(point.y());
        let sum = x + y;
        let difference = x - y;

        sum >= 0
            && difference >= 0
            && difference < 2 * i64::from(self.dimensions.height)
            && sum < 2 * i64::from(self.dimensions.width)
    }

    /// Resolves diamond coordinates into the identifier of the cell there.
    #[must_use]
    pub fn cell_at(&self, x: i32, y: i32) -> Option<CellId> {
        if !self.contains(GridPoint::new(x, y)) {
            return None;
        }

        let difference = i64::from(x) - i64::from(y);
        let id = difference * i64::from(self.dimensions.width) + i64::from(y) + difference / 2;
        u32::try_from(id).ok().map(CellId::new)
    }

    /// Resolves an arbitrary grid point into a map point, if it is on the board.
    #[must_use]
    pub fn locate(&self, point: GridPoint) -> Option<MapPoint> {
        self.cell_at(point.x(), point.y())
            .map(|cell| MapPoint::new(point.x(), point.y(), cell))
    }

    /// Enumerates the four orthogonal neighbours of `point` that lie on the
    /// board, in the order up, right, down, left.
    pub fn neighbors(&self, point: MapPoint) -> impl Iterator<Item = MapPoint> + '_ {
        let (x, y) = (point.x(), point.y());
        let candidates = [
            y.checked_sub(1).map(|y| GridPoint::new(x, y)),
            x.checked_add(1).map(|x| GridPoint::new(x, y)),
            y.checked_add(1).map(|y| GridPoint::new(x, y)),
            x.checked_sub(1).map(|x| GridPoint::new(x, y)),
        ];

        candidates
            .into_iter()
            .flatten()
            .filter_map(move |candidate| self.locate(candidate))
    }

    /// Verifies that `map` stores exactly one cell per board square.
    pub fn check_map(&self, map: &Map) -> Result<(), PuzzleError> {
        let expected = self.cell_count();
        let found = map.cells().len();
        if found != expected {
            return Err(PuzzleError::MapSizeMismatch {
                map: map.id(),
                expected,
                found,
            });
        }

        Ok(())
    }
}
