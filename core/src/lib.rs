#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Core contracts shared across the Sightline puzzle engine.
//!
//! This crate defines the vocabulary every other crate speaks: terrain
//! [`Cell`] values stored on a [`Map`], the units ([`MapEntity`]) placed on
//! that map by a [`Puzzle`], and the diamond [`Board`] geometry that converts
//! linear cell identifiers to coordinates and back. Systems consume these
//! immutable records and never mutate them; adapters construct them from
//! external data.

mod board;

use std::{collections::HashSet, fmt, str::FromStr, sync::Arc};

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use board::{Board, BoardDimensions, DEFAULT_BOARD_HEIGHT, DEFAULT_BOARD_WIDTH};

/// Canonical linear identifier of a single board square.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CellId(u32);

impl CellId {
    /// Creates a new cell identifier with the provided numeric value.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Retrieves the numeric representation of the identifier.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }

    /// Position of the cell inside row-major cell buffers.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for CellId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier assigned to a map.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MapId(u32);

impl MapId {
    /// Creates a new map identifier with the provided numeric value.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Retrieves the numeric representation of the identifier.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for MapId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier assigned to a puzzle.
///
/// Puzzle identifiers are positional: they come from the caller (usually the
/// index of the encoded puzzle within its catalogue) and never from the
/// encoded string itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PuzzleId(u32);

impl PuzzleId {
    /// Creates a new puzzle identifier with the provided numeric value.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Retrieves the numeric representation of the identifier.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for PuzzleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Terrain classification of a single board square.
///
/// Serialized as its numeric discriminant, matching the map documents.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum Cell {
    /// Square that is not part of the playable area.
    Invisible = 0,
    /// Walkable, transparent ground.
    Floor = 1,
    /// Gap that cannot be walked on but does not block sight.
    Hole = 2,
    /// Obstruction that blocks both movement and sight.
    Wall = 3,
}

impl Cell {
    /// Reports whether units may walk on the square.
    #[must_use]
    pub const fn is_walkable(self) -> bool {
        matches!(self, Self::Floor)
    }

    /// Reports whether the square interrupts line of sight.
    #[must_use]
    pub const fn blocks_sight(self) -> bool {
        matches!(self, Self::Wall)
    }
}

impl TryFrom<u8> for Cell {
    type Error = PuzzleError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Invisible),
            1 => Ok(Self::Floor),
            2 => Ok(Self::Hole),
            3 => Ok(Self::Wall),
            other => Err(PuzzleError::UnknownTerrain(other)),
        }
    }
}

impl From<Cell> for u8 {
    fn from(cell: Cell) -> Self {
        cell as u8
    }
}

/// Terrain layout of a battlefield.
///
/// Cells are stored in row-major order of their [`CellId`]; the board
/// dimensions that give the layout meaning are checked by
/// [`Board::check_map`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Map {
    id: MapId,
    name: String,
    cells: Vec<Cell>,
}

impl Map {
    /// Creates a new map from its identifier, display name and terrain.
    #[must_use]
    pub fn new(id: MapId, name: impl Into<String>, cells: Vec<Cell>) -> Self {
        Self {
            id,
            name: name.into(),
            cells,
        }
    }

    /// Identifier of the map.
    #[must_use]
    pub const fn id(&self) -> MapId {
        self.id
    }

    /// Human readable name of the map.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Terrain of every cell in identifier order.
    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Terrain stored for the provided cell, if it exists.
    #[must_use]
    pub fn cell(&self, cell: CellId) -> Option<Cell> {
        self.cells.get(cell.index()).copied()
    }

    /// Reports whether the provided cell is walkable ground.
    #[must_use]
    pub fn is_walkable(&self, cell: CellId) -> bool {
        self.cell(cell).is_some_and(Cell::is_walkable)
    }

    /// Reports whether the provided cell interrupts line of sight.
    #[must_use]
    pub fn blocks_sight(&self, cell: CellId) -> bool {
        self.cell(cell).is_some_and(Cell::blocks_sight)
    }
}

/// Arbitrary position expressed in diamond coordinates.
///
/// Unlike [`MapPoint`], a grid point may lie outside the board; it is the
/// currency of ray stepping before points are resolved against a [`Board`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GridPoint {
    x: i32,
    y: i32,
}

impl GridPoint {
    /// Creates a new grid point.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Horizontal diamond coordinate.
    #[must_use]
    pub const fn x(&self) -> i32 {
        self.x
    }

    /// Vertical diamond coordinate.
    #[must_use]
    pub const fn y(&self) -> i32 {
        self.y
    }

    /// Computes the Manhattan distance between two grid points.
    #[must_use]
    pub fn distance(self, other: GridPoint) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }
}

/// Board square resolved to both of its representations.
///
/// Only a [`Board`] constructs map points, so `x`, `y` and `cell` always agree
/// with the board's coordinate bijection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MapPoint {
    x: i32,
    y: i32,
    cell: CellId,
}

impl MapPoint {
    pub(crate) const fn new(x: i32, y: i32, cell: CellId) -> Self {
        Self { x, y, cell }
    }

    /// Horizontal diamond coordinate.
    #[must_use]
    pub const fn x(&self) -> i32 {
        self.x
    }

    /// Vertical diamond coordinate.
    #[must_use]
    pub const fn y(&self) -> i32 {
        self.y
    }

    /// Canonical identifier of the square.
    #[must_use]
    pub const fn cell(&self) -> CellId {
        self.cell
    }

    /// Coordinates of the square without its identifier.
    #[must_use]
    pub const fn grid(&self) -> GridPoint {
        GridPoint::new(self.x, self.y)
    }

    /// Computes the Manhattan distance between two map points.
    #[must_use]
    pub fn distance(self, other: MapPoint) -> u32 {
        self.grid().distance(other.grid())
    }

    /// Reports whether `other` lies on one of the two principal diagonals
    /// (constant `x + y` or constant `x - y`) passing through this point.
    #[must_use]
    pub fn is_aligned_with(self, other: GridPoint) -> bool {
        self.x + self.y == other.x() + other.y() || self.x - self.y == other.x() - other.y()
    }
}

/// Kinds of units that can be placed on a map.
///
/// The declaration order is the canonical grouping order of the puzzle
/// encoding.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MapEntityType {
    /// Unit controlled by the player.
    Ally,
    /// Unit the ally must gain line of sight on.
    Enemy,
    /// Inert unit that blocks movement and sight.
    Obstacle,
}

impl MapEntityType {
    /// Every entity type in canonical order.
    pub const ALL: [MapEntityType; 3] = [Self::Ally, Self::Enemy, Self::Obstacle];

    /// Short token identifying the type inside encoded puzzles.
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::Ally => "a",
            Self::Enemy => "e",
            Self::Obstacle => "o",
        }
    }

    /// Resolves a short token back into its entity type.
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.token() == token)
    }
}

impl fmt::Display for MapEntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Ally => "ally",
            Self::Enemy => "enemy",
            Self::Obstacle => "obstacle",
        };
        f.write_str(label)
    }
}

impl FromStr for MapEntityType {
    type Err = PuzzleError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::from_token(value.trim())
            .ok_or_else(|| PuzzleError::UnknownEntityToken(value.to_owned()))
    }
}

/// Unit placed on a specific cell of a map.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MapEntity {
    cell: CellId,
    kind: MapEntityType,
}

impl MapEntity {
    /// Creates a new entity of the provided kind standing on `cell`.
    #[must_use]
    pub const fn new(cell: CellId, kind: MapEntityType) -> Self {
        Self { cell, kind }
    }

    /// Cell occupied by the entity.
    #[must_use]
    pub const fn cell(&self) -> CellId {
        self.cell
    }

    /// Kind of the entity.
    #[must_use]
    pub const fn kind(&self) -> MapEntityType {
        self.kind
    }
}

/// Parses `<token>:<cell>` pairs such as `a:10`.
impl FromStr for MapEntity {
    type Err = PuzzleError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let (token, cell) = value
            .split_once(':')
            .ok_or_else(|| PuzzleError::MalformedSegment(value.to_owned()))?;
        let kind = token.parse::<MapEntityType>()?;
        let cell = cell
            .trim()
            .parse::<u32>()
            .map_err(|_| PuzzleError::InvalidCellToken(cell.to_owned()))?;
        Ok(Self::new(CellId::new(cell), kind))
    }
}

/// Placement of units on a map that the player must solve.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Puzzle {
    id: PuzzleId,
    map: Arc<Map>,
    entities: Vec<MapEntity>,
}

impl Puzzle {
    /// Creates a puzzle from its raw parts without validating them.
    ///
    /// Use [`Puzzle::validate`] to reject malformed placements before solving.
    #[must_use]
    pub fn new(id: PuzzleId, map: Arc<Map>, entities: Vec<MapEntity>) -> Self {
        Self { id, map, entities }
    }

    /// Identifier of the puzzle.
    #[must_use]
    pub const fn id(&self) -> PuzzleId {
        self.id
    }

    /// Map the puzzle is played on.
    #[must_use]
    pub fn map(&self) -> &Map {
        &self.map
    }

    /// Shared handle to the map the puzzle is played on.
    #[must_use]
    pub fn shared_map(&self) -> &Arc<Map> {
        &self.map
    }

    /// Entities in the order they were supplied.
    #[must_use]
    pub fn entities(&self) -> &[MapEntity] {
        &self.entities
    }

    /// Cell of the first entity of the provided kind, if any.
    #[must_use]
    pub fn first_of(&self, kind: MapEntityType) -> Option<CellId> {
        self.entities
            .iter()
            .find(|entity| entity.kind() == kind)
            .map(MapEntity::cell)
    }

    /// Reports whether any entity stands on the provided cell.
    #[must_use]
    pub fn is_occupied(&self, cell: CellId) -> bool {
        self.entities.iter().any(|entity| entity.cell() == cell)
    }

    /// Reports whether a unit may step onto the provided cell.
    #[must_use]
    pub fn is_accessible(&self, cell: CellId) -> bool {
        self.map.is_walkable(cell) && !self.is_occupied(cell)
    }

    /// Checks every structural invariant of the puzzle against `board`.
    ///
    /// A valid puzzle sits on a map sized for the board, holds exactly one
    /// ally and one enemy, and places every entity on a distinct floor cell.
    pub fn validate(&self, board: &Board) -> Result<(), PuzzleError> {
        board.check_map(&self.map)?;

        let mut seen = HashSet::with_capacity(self.entities.len());
        for entity in &self.entities {
            let cell = entity.cell();
            if !board.is_valid(cell) {
                return Err(PuzzleError::InvalidEntityCell(cell));
            }
            if !seen.insert(cell) {
                return Err(PuzzleError::OverlappingEntities(cell));
            }
            match self.map.cell(cell) {
                Some(Cell::Floor) => {}
                Some(terrain) => {
                    return Err(PuzzleError::EntityOnImpassableCell { cell, terrain });
                }
                None => return Err(PuzzleError::InvalidEntityCell(cell)),
            }
        }

        for kind in [MapEntityType::Ally, MapEntityType::Enemy] {
            match self.entities.iter().filter(|e| e.kind() == kind).count() {
                0 => return Err(PuzzleError::MissingRequiredEntity(kind)),
                1 => {}
                _ => return Err(PuzzleError::DuplicateRequiredEntity(kind)),
            }
        }

        Ok(())
    }
}

/// Outcome of checking whether a chosen destination wins the puzzle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PuzzleResult {
    /// Whether the destination is one of the winning cells.
    pub success: bool,
    /// Destination that was checked.
    pub cell: CellId,
}

/// Collaborator that resolves maps by identifier.
pub trait MapLookup {
    /// Every map known to the collaborator.
    fn maps(&self) -> &[Arc<Map>];

    /// Retrieves the map with the provided identifier.
    fn map(&self, id: MapId) -> Result<Arc<Map>, PuzzleError> {
        self.maps()
            .iter()
            .find(|map| map.id() == id)
            .cloned()
            .ok_or(PuzzleError::MapNotFound(id))
    }
}

impl MapLookup for [Arc<Map>] {
    fn maps(&self) -> &[Arc<Map>] {
        self
    }
}

impl MapLookup for Vec<Arc<Map>> {
    fn maps(&self) -> &[Arc<Map>] {
        self
    }
}

/// Errors raised while loading, decoding or solving puzzles.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PuzzleError {
    /// No map with the requested identifier exists.
    #[error("map {0} not found")]
    MapNotFound(MapId),
    /// No puzzle with the requested identifier exists.
    #[error("puzzle {0} not found")]
    PuzzleNotFound(PuzzleId),
    /// The version segment was missing or named an unsupported version.
    #[error("unsupported puzzle encoding version '{0}'")]
    UnsupportedEncodingVersion(String),
    /// The decoded puzzle never referenced a map.
    #[error("encoded puzzle does not reference a map")]
    MissingMapReference,
    /// An entity token did not name a known entity type.
    #[error("unknown entity token '{0}'")]
    UnknownEntityToken(String),
    /// The puzzle lacks an entity the solver requires.
    #[error("puzzle has no {0}")]
    MissingRequiredEntity(MapEntityType),
    /// The puzzle holds more than one entity of a kind that must be unique.
    #[error("puzzle has more than one {0}")]
    DuplicateRequiredEntity(MapEntityType),
    /// A segment of an encoded puzzle could not be interpreted.
    #[error("malformed puzzle segment '{0}'")]
    MalformedSegment(String),
    /// A cell identifier could not be parsed.
    #[error("invalid cell identifier '{0}'")]
    InvalidCellToken(String),
    /// A terrain discriminant did not name a known cell kind.
    #[error("unknown terrain discriminant {0}")]
    UnknownTerrain(u8),
    /// A map does not contain exactly one cell per board square.
    #[error("map {map} has {found} cells, expected {expected}")]
    MapSizeMismatch {
        /// Identifier of the offending map.
        map: MapId,
        /// Cell count required by the board.
        expected: usize,
        /// Cell count stored on the map.
        found: usize,
    },
    /// An entity references a cell outside the board.
    #[error("entity placed on invalid cell {0}")]
    InvalidEntityCell(CellId),
    /// Two entities share the same cell.
    #[error("more than one entity placed on cell {0}")]
    OverlappingEntities(CellId),
    /// An entity stands on terrain other than floor.
    #[error("entity placed on {terrain:?} cell {cell}")]
    EntityOnImpassableCell {
        /// Cell the entity stands on.
        cell: CellId,
        /// Terrain found at that cell.
        terrain: Cell,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{de::DeserializeOwned, Serialize};

    fn floor_map(board: &Board) -> Arc<Map> {
        Arc::new(Map::new(
            MapId::new(0),
            "floor",
            vec![Cell::Floor; board.cell_count()],
        ))
    }

    fn entity(cell: u32, kind: MapEntityType) -> MapEntity {
        MapEntity::new(CellId::new(cell), kind)
    }

    fn assert_round_trip<T>(value: &T)
    where
        T: Serialize + DeserializeOwned + PartialEq + std::fmt::Debug,
    {
        let bytes = bincode::serialize(value).expect("serialize");
        let restored: T = bincode::deserialize(&bytes).expect("deserialize");
        assert_eq!(&restored, value);
    }

    #[test]
    fn cell_round_trips_through_bincode() {
        for cell in [Cell::Invisible, Cell::Floor, Cell::Hole, Cell::Wall] {
            assert_round_trip(&cell);
        }
    }

    #[test]
    fn map_round_trips_through_bincode() {
        let map = Map::new(MapId::new(3), "ridge", vec![Cell::Floor, Cell::Wall]);
        assert_round_trip(&map);
    }

    #[test]
    fn map_entity_round_trips_through_bincode() {
        assert_round_trip(&entity(42, MapEntityType::Obstacle));
    }

    #[test]
    fn unknown_terrain_discriminant_is_rejected() {
        let bytes = bincode::serialize(&9_u8).expect("serialize");
        assert!(bincode::deserialize::<Cell>(&bytes).is_err());
        assert_eq!(Cell::try_from(9), Err(PuzzleError::UnknownTerrain(9)));
    }

    #[test]
    fn only_floor_is_walkable_and_only_wall_blocks_sight() {
        assert!(Cell::Floor.is_walkable());
        assert!(!Cell::Hole.is_walkable());
        assert!(!Cell::Wall.is_walkable());
        assert!(!Cell::Invisible.is_walkable());
        assert!(Cell::Wall.blocks_sight());
        assert!(!Cell::Hole.blocks_sight());
        assert!(!Cell::Invisible.blocks_sight());
    }

    #[test]
    fn entity_tokens_round_trip() {
        for kind in MapEntityType::ALL {
            assert_eq!(MapEntityType::from_token(kind.token()), Some(kind));
        }
        assert_eq!(
            "x".parse::<MapEntityType>(),
            Err(PuzzleError::UnknownEntityToken("x".to_owned()))
        );
    }

    #[test]
    fn map_entity_parses_token_and_cell() {
        assert_eq!(
            "e:50".parse::<MapEntity>(),
            Ok(entity(50, MapEntityType::Enemy))
        );
        assert_eq!(
            "a:ten".parse::<MapEntity>(),
            Err(PuzzleError::InvalidCellToken("ten".to_owned()))
        );
        assert_eq!(
            "a10".parse::<MapEntity>(),
            Err(PuzzleError::MalformedSegment("a10".to_owned()))
        );
    }

    #[test]
    fn valid_puzzle_passes_validation() {
        let board = Board::default();
        let puzzle = Puzzle::new(
            PuzzleId::new(0),
            floor_map(&board),
            vec![
                entity(10, MapEntityType::Ally),
                entity(50, MapEntityType::Enemy),
                entity(11, MapEntityType::Obstacle),
            ],
        );

        assert_eq!(puzzle.validate(&board), Ok(()));
        assert_eq!(puzzle.first_of(MapEntityType::Enemy), Some(CellId::new(50)));
        assert!(puzzle.is_occupied(CellId::new(11)));
        assert!(!puzzle.is_accessible(CellId::new(11)));
        assert!(puzzle.is_accessible(CellId::new(12)));
    }

    #[test]
    fn validation_requires_one_ally_and_one_enemy() {
        let board = Board::default();
        let map = floor_map(&board);

        let no_enemy = Puzzle::new(
            PuzzleId::new(0),
            Arc::clone(&map),
            vec![entity(10, MapEntityType::Ally)],
        );
        assert_eq!(
            no_enemy.validate(&board),
            Err(PuzzleError::MissingRequiredEntity(MapEntityType::Enemy))
        );

        let two_allies = Puzzle::new(
            PuzzleId::new(0),
            map,
            vec![
                entity(10, MapEntityType::Ally),
                entity(11, MapEntityType::Ally),
                entity(50, MapEntityType::Enemy),
            ],
        );
        assert_eq!(
            two_allies.validate(&board),
            Err(PuzzleError::DuplicateRequiredEntity(MapEntityType::Ally))
        );
    }

    #[test]
    fn validation_rejects_misplaced_entities() {
        let board = Board::default();
        let mut cells = vec![Cell::Floor; board.cell_count()];
        cells[20] = Cell::Hole;
        let map = Arc::new(Map::new(MapId::new(1), "holes", cells));

        let overlapping = Puzzle::new(
            PuzzleId::new(0),
            Arc::clone(&map),
            vec![
                entity(10, MapEntityType::Ally),
                entity(10, MapEntityType::Enemy),
            ],
        );
        assert_eq!(
            overlapping.validate(&board),
            Err(PuzzleError::OverlappingEntities(CellId::new(10)))
        );

        let on_hole = Puzzle::new(
            PuzzleId::new(0),
            Arc::clone(&map),
            vec![
                entity(20, MapEntityType::Ally),
                entity(30, MapEntityType::Enemy),
            ],
        );
        assert_eq!(
            on_hole.validate(&board),
            Err(PuzzleError::EntityOnImpassableCell {
                cell: CellId::new(20),
                terrain: Cell::Hole,
            })
        );

        let off_board = Puzzle::new(
            PuzzleId::new(0),
            map,
            vec![
                entity(10, MapEntityType::Ally),
                entity(560, MapEntityType::Enemy),
            ],
        );
        assert_eq!(
            off_board.validate(&board),
            Err(PuzzleError::InvalidEntityCell(CellId::new(560)))
        );
    }

    #[test]
    fn validation_rejects_maps_of_the_wrong_size() {
        let board = Board::default();
        let map = Arc::new(Map::new(MapId::new(7), "tiny", vec![Cell::Floor; 12]));
        let puzzle = Puzzle::new(PuzzleId::new(0), map, Vec::new());

        assert_eq!(
            puzzle.validate(&board),
            Err(PuzzleError::MapSizeMismatch {
                map: MapId::new(7),
                expected: 560,
                found: 12,
            })
        );
    }

    #[test]
    fn map_lookup_reports_missing_maps() {
        let board = Board::default();
        let maps = vec![floor_map(&board)];

        assert_eq!(maps.map(MapId::new(0)).map(|map| map.id()), Ok(MapId::new(0)));
        assert_eq!(
            maps.map(MapId::new(9)),
            Err(PuzzleError::MapNotFound(MapId::new(9)))
        );
    }
}
