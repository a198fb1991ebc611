#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Compact, versioned text encoding of puzzles.
//!
//! A puzzle is written as comma separated `key=value` segments:
//! `v=1,m=3,a=10,e=50,o=11|12`. The version always comes first, `m` names the
//! map and each entity group lists its cells separated by `|`. The puzzle
//! identifier is positional and therefore not part of the string.

use std::fmt::Write as _;

use log::trace;
use sightline_core::{CellId, MapEntity, MapEntityType, MapId, MapLookup, Puzzle, PuzzleError, PuzzleId};

/// Only encoding version understood by this crate.
pub const ENCODING_VERSION: u32 = 1;

const SEGMENT_DELIMITER: char = ',';
const KEY_DELIMITER: char = '=';
const CELL_DELIMITER: char = '|';
const VERSION_KEY: &str = "v";
const MAP_KEY: &str = "m";

/// Encodes the puzzle into its single-line text form.
///
/// Entities are grouped by type in ally, enemy, obstacle order; empty groups
/// are omitted and cells keep their order within a group.
#[must_use]
pub fn encode(puzzle: &Puzzle) -> String {
    let mut encoded = format!(
        "{VERSION_KEY}{KEY_DELIMITER}{ENCODING_VERSION}{SEGMENT_DELIMITER}{MAP_KEY}{KEY_DELIMITER}{}",
        puzzle.map().id()
    );

    for kind in MapEntityType::ALL {
        let mut cells = puzzle
            .entities()
            .iter()
            .filter(|entity| entity.kind() == kind)
            .map(MapEntity::cell)
            .peekable();

        if cells.peek().is_none() {
            continue;
        }

        encoded.push(SEGMENT_DELIMITER);
        encoded.push_str(kind.token());
        encoded.push(KEY_DELIMITER);
        for (index, cell) in cells.enumerate() {
            if index > 0 {
                encoded.push(CELL_DELIMITER);
            }
            // Writing into a String cannot fail.
            let _ = write!(encoded, "{cell}");
        }
    }

    encoded
}

/// Decodes a puzzle, resolving its map through `maps`.
///
/// `id` is assigned by the caller. Segments with unknown keys are ignored so
/// that newer writers can add optional data without breaking this reader.
/// The entities are not validated; see [`Puzzle::validate`].
pub fn decode<L>(encoded: &str, id: PuzzleId, maps: &L) -> Result<Puzzle, PuzzleError>
where
    L: MapLookup + ?Sized,
{
    let mut segments = encoded.trim().split(SEGMENT_DELIMITER);
    let version = segments.next().unwrap_or_default();
    parse_version(version)?;

    let mut map = None;
    let mut entities = Vec::new();

    for segment in segments {
        let Some((key, value)) = segment.split_once(KEY_DELIMITER) else {
            trace!("ignoring puzzle segment without a key: '{segment}'");
            continue;
        };

        if key == MAP_KEY {
            let map_id = value
                .parse::<u32>()
                .map_err(|_| PuzzleError::MalformedSegment(segment.to_owned()))?;
            map = Some(maps.map(MapId::new(map_id))?);
        } else if let Some(kind) = MapEntityType::from_token(key) {
            for cell in value.split(CELL_DELIMITER) {
                entities.push(MapEntity::new(parse_cell(cell)?, kind));
            }
        } else {
            trace!("ignoring unknown puzzle segment '{segment}'");
        }
    }

    let map = map.ok_or(PuzzleError::MissingMapReference)?;
    Ok(Puzzle::new(id, map, entities))
}

fn parse_version(segment: &str) -> Result<(), PuzzleError> {
    let unsupported = || PuzzleError::UnsupportedEncodingVersion(segment.to_owned());

    let (key, value) = segment.split_once(KEY_DELIMITER).ok_or_else(unsupported)?;
    if key != VERSION_KEY {
        return Err(unsupported());
    }

    match value.parse::<u32>() {
        Ok(ENCODING_VERSION) => Ok(()),
        _ => Err(unsupported()),
    }
}

fn parse_cell(value: &str) -> Result<CellId, PuzzleError> {
    value
        .parse::<u32>()
        .map(CellId::new)
        .map_err(|_| PuzzleError::InvalidCellToken(value.to_owned()))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use sightline_core::{Cell, Map};

    use super::*;

    fn maps() -> Vec<Arc<Map>> {
        vec![
            Arc::new(Map::new(MapId::new(1), "first", vec![Cell::Floor; 560])),
            Arc::new(Map::new(MapId::new(3), "third", vec![Cell::Floor; 560])),
        ]
    }

    fn entity(cell: u32, kind: MapEntityType) -> MapEntity {
        MapEntity::new(CellId::new(cell), kind)
    }

    fn sample_entities() -> Vec<MapEntity> {
        vec![
            entity(10, MapEntityType::Ally),
            entity(50, MapEntityType::Enemy),
            entity(11, MapEntityType::Obstacle),
            entity(12, MapEntityType::Obstacle),
        ]
    }

    #[test]
    fn encodes_grouped_entities() {
        let maps = maps();
        let puzzle = Puzzle::new(PuzzleId::new(0), Arc::clone(&maps[1]), sample_entities());

        assert_eq!(encode(&puzzle), "v=1,m=3,a=10,e=50,o=11|12");
    }

    #[test]
    fn encoding_groups_by_type_and_keeps_order_within_groups() {
        let maps = maps();
        let puzzle = Puzzle::new(
            PuzzleId::new(0),
            Arc::clone(&maps[0]),
            vec![
                entity(30, MapEntityType::Obstacle),
                entity(50, MapEntityType::Enemy),
                entity(20, MapEntityType::Obstacle),
                entity(10, MapEntityType::Ally),
            ],
        );

        assert_eq!(encode(&puzzle), "v=1,m=1,a=10,e=50,o=30|20");
    }

    #[test]
    fn empty_groups_are_omitted() {
        let maps = maps();
        let puzzle = Puzzle::new(
            PuzzleId::new(0),
            Arc::clone(&maps[0]),
            vec![entity(7, MapEntityType::Enemy)],
        );

        assert_eq!(encode(&puzzle), "v=1,m=1,e=7");
    }

    #[test]
    fn decodes_encoded_puzzle() {
        let maps = maps();
        let puzzle = decode("v=1,m=3,a=10,e=50,o=11|12", PuzzleId::new(4), &maps)
            .expect("puzzle decodes");

        assert_eq!(puzzle.id(), PuzzleId::new(4));
        assert_eq!(puzzle.map().id(), MapId::new(3));
        assert_eq!(puzzle.entities(), sample_entities().as_slice());
        assert_eq!(encode(&puzzle), "v=1,m=3,a=10,e=50,o=11|12");
    }

    #[test]
    fn unknown_keys_and_keyless_segments_are_ignored() {
        let maps = maps();
        let puzzle = decode("v=1,x=5,m=1,hint,a=10,e=50", PuzzleId::new(0), &maps)
            .expect("puzzle decodes");

        assert_eq!(puzzle.entities().len(), 2);
    }

    #[test]
    fn unsupported_versions_are_rejected() {
        let maps = maps();

        for encoded in ["v=2,m=3", "m=3,v=1", "v=one,m=3", ""] {
            let version = encoded.split(',').next().unwrap_or_default();
            assert_eq!(
                decode(encoded, PuzzleId::new(0), &maps),
                Err(PuzzleError::UnsupportedEncodingVersion(version.to_owned())),
                "{encoded}"
            );
        }
    }

    #[test]
    fn missing_map_reference_is_rejected() {
        assert_eq!(
            decode("v=1,a=10,e=50", PuzzleId::new(0), &maps()),
            Err(PuzzleError::MissingMapReference)
        );
    }

    #[test]
    fn unknown_maps_are_rejected() {
        assert_eq!(
            decode("v=1,m=8,a=10", PuzzleId::new(0), &maps()),
            Err(PuzzleError::MapNotFound(MapId::new(8)))
        );
    }

    #[test]
    fn malformed_values_are_rejected() {
        let maps = maps();
        assert_eq!(
            decode("v=1,m=three", PuzzleId::new(0), &maps),
            Err(PuzzleError::MalformedSegment("m=three".to_owned()))
        );
        assert_eq!(
            decode("v=1,m=3,o=11||12", PuzzleId::new(0), &maps),
            Err(PuzzleError::InvalidCellToken(String::new()))
        );
    }
}
