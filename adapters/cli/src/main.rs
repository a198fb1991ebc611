#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Command-line adapter that solves and inspects Sightline puzzles.

mod config;

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use log::{debug, LevelFilter};
use sightline_catalog::{MapCatalog, PuzzleCatalog};
use sightline_core::{Board, CellId, MapEntity, MapId, MapLookup, Puzzle, PuzzleId};
use sightline_system_line_of_sight::VisibilityResolver;
use sightline_system_pathfinding::PathFinder;
use sightline_system_solver::Solver;

use crate::config::Config;

#[derive(Debug, Parser)]
#[command(name = "sightline", version)]
#[command(about = "Find where an ally must move to see its enemy", long_about = None)]
struct Cli {
    /// Path to the TOML configuration file.
    #[arg(long, global = true, default_value = "sightline.toml")]
    config: PathBuf,

    /// Raises the log level; repeat for more detail.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List every puzzle of the catalogue
    List,

    /// Print the cheapest destinations from which the ally sees the enemy
    Solve {
        /// Puzzle identifier
        #[arg(long)]
        puzzle: u32,

        /// Movement points available to the ally
        #[arg(long)]
        budget: Option<u32>,
    },

    /// Report whether moving the ally to a cell solves the puzzle
    Check {
        /// Puzzle identifier
        #[arg(long)]
        puzzle: u32,

        /// Destination chosen for the ally
        #[arg(long)]
        cell: u32,

        /// Movement points available to the ally
        #[arg(long)]
        budget: Option<u32>,
    },

    /// Print the cells in line of sight of a cell
    Sight {
        /// Puzzle identifier
        #[arg(long)]
        puzzle: u32,

        /// Cell looking out over the board
        #[arg(long)]
        cell: u32,
    },

    /// Print the shortest walkable path between two cells
    Path {
        /// Puzzle identifier
        #[arg(long)]
        puzzle: u32,

        /// Starting cell
        #[arg(long)]
        from: u32,

        /// Destination cell
        #[arg(long)]
        to: u32,
    },

    /// Encode a puzzle built from the command line
    Encode {
        /// Map the puzzle is played on
        #[arg(long)]
        map: u32,

        /// Units written as `<a|e|o>:<cell>`
        #[arg(long = "entity", required = true)]
        entities: Vec<MapEntity>,
    },

    /// Decode and validate an encoded puzzle
    Decode {
        /// Encoded puzzle such as `v=1,m=0,a=10,e=50`
        encoded: String,

        /// Identifier assigned to the decoded puzzle
        #[arg(long, default_value_t = 0)]
        id: u32,
    },
}

/// Entry point for the Sightline command-line interface.
fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = Config::load(&cli.config)?;
    let board = Board::new(config.board);
    let maps = MapCatalog::load(&board, &config.maps)
        .with_context(|| format!("failed to load maps from {}", config.maps.display()))?;
    debug!("using {}x{} board", config.board.width, config.board.height);

    match cli.command {
        Command::List => {
            let puzzles = load_puzzles(&board, &config, &maps)?;
            for puzzle in puzzles.puzzles() {
                let map = puzzle.map();
                println!(
                    "{}\tmap {} ({})\t{}",
                    puzzle.id(),
                    map.id(),
                    map.name(),
                    sightline_codec::encode(puzzle)
                );
            }
        }
        Command::Solve { puzzle, budget } => {
            let puzzles = load_puzzles(&board, &config, &maps)?;
            let puzzle = puzzles.puzzle(PuzzleId::new(puzzle))?;
            let budget = budget.unwrap_or(config.max_movement_points);
            let solution = Solver::new().solve(&board, budget, puzzle)?;
            match solution.movement_cost {
                Some(cost) => println!(
                    "puzzle {}: {} (movement cost {cost})",
                    puzzle.id(),
                    join(&solution.cells)
                ),
                None => println!(
                    "puzzle {}: no winning cell within {budget} movement points",
                    puzzle.id()
                ),
            }
        }
        Command::Check {
            puzzle,
            cell,
            budget,
        } => {
            let puzzles = load_puzzles(&board, &config, &maps)?;
            let puzzle = puzzles.puzzle(PuzzleId::new(puzzle))?;
            let budget = budget.unwrap_or(config.max_movement_points);
            let result =
                Solver::new().check_destination(&board, budget, puzzle, CellId::new(cell))?;
            let verdict = if result.success { "wins" } else { "does not win" };
            println!("cell {} {verdict} puzzle {}", result.cell, puzzle.id());
        }
        Command::Sight { puzzle, cell } => {
            let puzzles = load_puzzles(&board, &config, &maps)?;
            let puzzle = puzzles.puzzle(PuzzleId::new(puzzle))?;
            let cell = board_cell(&board, cell)?;
            let visible = VisibilityResolver::new().resolve(&board, cell, puzzle);
            println!("{}", join(&visible));
        }
        Command::Path { puzzle, from, to } => {
            let puzzles = load_puzzles(&board, &config, &maps)?;
            let puzzle = puzzles.puzzle(PuzzleId::new(puzzle))?;
            let from = board_cell(&board, from)?;
            let to = board_cell(&board, to)?;
            match PathFinder::new().find_shortest_path(&board, from, to, puzzle) {
                Some(path) => println!("{}", join(&path)),
                None => println!("cell {to} is unreachable from cell {from}"),
            }
        }
        Command::Encode { map, entities } => {
            let map = maps.map(MapId::new(map))?;
            let puzzle = Puzzle::new(PuzzleId::new(0), map, entities);
            puzzle
                .validate(&board)
                .context("the described puzzle is invalid")?;
            println!("{}", sightline_codec::encode(&puzzle));
        }
        Command::Decode { encoded, id } => {
            let puzzle = sightline_codec::decode(&encoded, PuzzleId::new(id), &maps)
                .context("failed to decode puzzle")?;
            puzzle
                .validate(&board)
                .context("the decoded puzzle is invalid")?;
            describe(&board, &puzzle);
        }
    }

    Ok(())
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn load_puzzles(board: &Board, config: &Config, maps: &MapCatalog) -> Result<PuzzleCatalog> {
    PuzzleCatalog::load(board, &config.puzzles, maps)
        .with_context(|| format!("failed to load puzzles from {}", config.puzzles.display()))
}

fn board_cell(board: &Board, raw: u32) -> Result<CellId> {
    let cell = CellId::new(raw);
    if !board.is_valid(cell) {
        bail!(
            "cell {raw} is outside the board of {} cells",
            board.cell_count()
        );
    }
    Ok(cell)
}

fn describe(board: &Board, puzzle: &Puzzle) {
    let map = puzzle.map();
    println!("puzzle {} on map {} ({})", puzzle.id(), map.id(), map.name());
    for entity in puzzle.entities() {
        match board.point(entity.cell()) {
            Some(point) => println!(
                "{}\t{}\t({}, {})",
                entity.kind(),
                entity.cell(),
                point.x(),
                point.y()
            ),
            None => println!("{}\t{}", entity.kind(), entity.cell()),
        }
    }
}

fn join(cells: &[CellId]) -> String {
    cells
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
