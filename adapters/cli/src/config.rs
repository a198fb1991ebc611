//! Versioned TOML configuration of the command-line adapter.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use sightline_core::BoardDimensions;

const SUPPORTED_CONFIG_VERSION: u32 = 1;
const DEFAULT_MAX_MOVEMENT_POINTS: u32 = 3;

/// Settings resolved from the configuration file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Config {
    pub(crate) board: BoardDimensions,
    pub(crate) maps: PathBuf,
    pub(crate) puzzles: PathBuf,
    pub(crate) max_movement_points: u32,
}

impl Config {
    /// Reads the configuration, resolving data paths against its directory.
    pub(crate) fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read configuration at {}", path.display()))?;
        let base_path = path.parent().unwrap_or_else(|| Path::new(""));
        parse_config(&contents, base_path)
            .with_context(|| format!("invalid configuration at {}", path.display()))
    }
}

#[derive(Debug, Deserialize)]
struct RawConfig {
    version: u32,
    #[serde(default)]
    board: BoardDimensions,
    data: DataSection,
    #[serde(default)]
    solver: SolverSection,
}

#[derive(Debug, Deserialize)]
struct DataSection {
    maps: PathBuf,
    puzzles: PathBuf,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
struct SolverSection {
    max_movement_points: u32,
}

impl Default for SolverSection {
    fn default() -> Self {
        Self {
            max_movement_points: DEFAULT_MAX_MOVEMENT_POINTS,
        }
    }
}

fn parse_config(contents: &str, base_path: &Path) -> Result<Config> {
    let raw: RawConfig =
        toml::from_str(contents).context("failed to parse configuration toml contents")?;
    if raw.version != SUPPORTED_CONFIG_VERSION {
        bail!(
            "unsupported configuration version {}; expected {}",
            raw.version,
            SUPPORTED_CONFIG_VERSION
        );
    }

    let BoardDimensions { width, height } = raw.board;
    let cells = width.checked_mul(2).and_then(|rows| rows.checked_mul(height));
    if width == 0 || height == 0 || cells.is_none() {
        bail!("board of {width}x{height} cells is not supported");
    }

    Ok(Config {
        board: raw.board,
        maps: base_path.join(raw.data.maps),
        puzzles: base_path.join(raw.data.puzzles),
        max_movement_points: raw.solver.max_movement_points,
    })
}
