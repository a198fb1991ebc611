#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Map and puzzle catalogues loaded from JSON documents.
//!
//! Maps are stored as an array of `{ "id", "name", "cells" }` records. Puzzles
//! are stored as an array of encoded puzzle strings whose position is the
//! puzzle identifier; a removed puzzle leaves an empty string behind so that
//! the identifiers of the following puzzles never shift.

use std::{
    collections::HashSet,
    fs::File,
    io::{self, BufReader, Read},
    path::{Path, PathBuf},
    sync::Arc,
};

use log::debug;
use sightline_core::{Board, Map, MapId, MapLookup, Puzzle, PuzzleError, PuzzleId};
use thiserror::Error;

/// Errors raised while loading catalogues.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalogue file could not be opened.
    #[error("failed to read catalogue at {}", path.display())]
    Io {
        /// Location of the catalogue.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },
    /// The catalogue document is not valid JSON of the expected shape.
    #[error("failed to parse catalogue document")]
    Json(#[from] serde_json::Error),
    /// A map does not fit the configured board.
    #[error("map {id} is invalid")]
    InvalidMap {
        /// Identifier of the offending map.
        id: MapId,
        /// Reason the map was rejected.
        #[source]
        source: PuzzleError,
    },
    /// Two maps share the same identifier.
    #[error("map {0} is defined more than once")]
    DuplicateMap(MapId),
    /// A puzzle could not be decoded or is malformed.
    #[error("puzzle {id} is invalid")]
    InvalidPuzzle {
        /// Identifier of the offending puzzle.
        id: PuzzleId,
        /// Reason the puzzle was rejected.
        #[source]
        source: PuzzleError,
    },
}

/// In-memory collection of maps that resolves map references.
#[derive(Clone, Debug, Default)]
pub struct MapCatalog {
    maps: Vec<Arc<Map>>,
}

impl MapCatalog {
    /// Builds a catalogue from maps, checking each one against `board`.
    pub fn new(board: &Board, maps: Vec<Map>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(maps.len());
        for map in &maps {
            board
                .check_map(map)
                .map_err(|source| CatalogError::InvalidMap {
                    id: map.id(),
                    source,
                })?;
            if !seen.insert(map.id()) {
                return Err(CatalogError::DuplicateMap(map.id()));
            }
        }

        debug!("loaded {} maps", maps.len());
        Ok(Self {
            maps: maps.into_iter().map(Arc::new).collect(),
        })
    }

    /// Parses a JSON array of maps.
    pub fn from_reader<R: Read>(board: &Board, reader: R) -> Result<Self, CatalogError> {
        let maps: Vec<Map> = serde_json::from_reader(reader)?;
        Self::new(board, maps)
    }

    /// Loads a JSON array of maps from disk.
    pub fn load(board: &Board, path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        Self::from_reader(board, open(path.as_ref())?)
    }

    /// Number of maps in the catalogue.
    #[must_use]
    pub fn len(&self) -> usize {
        self.maps.len()
    }

    /// Reports whether the catalogue holds no map.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.maps.is_empty()
    }
}

impl MapLookup for MapCatalog {
    fn maps(&self) -> &[Arc<Map>] {
        &self.maps
    }
}

/// Ordered collection of decoded, validated puzzles.
#[derive(Clone, Debug, Default)]
pub struct PuzzleCatalog {
    puzzles: Vec<Puzzle>,
}

impl PuzzleCatalog {
    /// Decodes and validates every non-empty encoded puzzle.
    ///
    /// The position of each string is its puzzle identifier; empty strings
    /// are skipped without shifting later identifiers.
    pub fn from_encoded<S, L>(board: &Board, encoded: &[S], maps: &L) -> Result<Self, CatalogError>
    where
        S: AsRef<str>,
        L: MapLookup + ?Sized,
    {
        let mut puzzles = Vec::with_capacity(encoded.len());

        for (raw_id, entry) in (0_u32..).zip(encoded) {
            let entry: &str = entry.as_ref();
            if entry.trim().is_empty() {
                continue;
            }

            let id = PuzzleId::new(raw_id);
            let puzzle = sightline_codec::decode(entry, id, maps)
                .and_then(|puzzle| puzzle.validate(board).map(|()| puzzle))
                .map_err(|source| CatalogError::InvalidPuzzle { id, source })?;
            puzzles.push(puzzle);
        }

        debug!(
            "loaded {} puzzles from {} entries",
            puzzles.len(),
            encoded.len()
        );
        Ok(Self { puzzles })
    }

    /// Parses a JSON array of encoded puzzles.
    pub fn from_reader<R, L>(board: &Board, reader: R, maps: &L) -> Result<Self, CatalogError>
    where
        R: Read,
        L: MapLookup + ?Sized,
    {
        let encoded: Vec<String> = serde_json::from_reader(reader)?;
        Self::from_encoded(board, &encoded, maps)
    }

    /// Loads a JSON array of encoded puzzles from disk.
    pub fn load<L>(board: &Board, path: impl AsRef<Path>, maps: &L) -> Result<Self, CatalogError>
    where
        L: MapLookup + ?Sized,
    {
        Self::from_reader(board, open(path.as_ref())?, maps)
    }

    /// Puzzles in identifier order.
    #[must_use]
    pub fn puzzles(&self) -> &[Puzzle] {
        &self.puzzles
    }

    /// Retrieves the puzzle with the provided identifier.
    pub fn puzzle(&self, id: PuzzleId) -> Result<&Puzzle, PuzzleError> {
        self.puzzles
            .binary_search_by_key(&id, Puzzle::id)
            .map(|index| &self.puzzles[index])
            .map_err(|_| PuzzleError::PuzzleNotFound(id))
    }
}

fn open(path: &Path) -> Result<BufReader<File>, CatalogError> {
    File::open(path)
        .map(BufReader::new)
        .map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })
}
