use std::sync::Arc;

use sightline_core::{
    Board, Cell, CellId, Map, MapEntity, MapEntityType, MapId, Puzzle, PuzzleError, PuzzleId,
    PuzzleResult,
};
use sightline_system_solver::{find_winning_cells, Solution, Solver};

fn at(board: &Board, x: i32, y: i32) -> CellId {
    board.cell_at(x, y).expect("coordinates are on the board")
}

fn puzzle(cells: Vec<Cell>, entities: Vec<MapEntity>) -> Puzzle {
    let map = Arc::new(Map::new(MapId::new(1), "arena", cells));
    Puzzle::new(PuzzleId::new(9), map, entities)
}

fn cells(ids: &[u32]) -> Vec<CellId> {
    ids.iter().copied().map(CellId::new).collect()
}

/// Ally west of the enemy with a three-cell wall between them.
fn walled_puzzle(board: &Board) -> Puzzle {
    let mut terrain = vec![Cell::Floor; board.cell_count()];
    for y in -4..=-2 {
        terrain[at(board, 15, y).index()] = Cell::Wall;
    }

    puzzle(
        terrain,
        vec![
            MapEntity::new(at(board, 12, -3), MapEntityType::Ally),
            MapEntity::new(at(board, 17, -3), MapEntityType::Enemy),
        ],
    )
}

#[test]
fn ally_already_in_sight_stays_put() {
    let board = Board::default();
    let open = puzzle(
        vec![Cell::Floor; board.cell_count()],
        vec![
            MapEntity::new(at(&board, 12, -3), MapEntityType::Ally),
            MapEntity::new(at(&board, 17, -3), MapEntityType::Enemy),
        ],
    );

    let solution = Solver::new().solve(&board, 3, &open).expect("puzzle is solvable");
    assert_eq!(
        solution,
        Solution {
            cells: vec![at(&board, 12, -3)],
            movement_cost: Some(0),
        }
    );
}

#[test]
fn walled_puzzle_is_solved_around_both_ends_of_the_wall() {
    let board = Board::default();
    let walled = walled_puzzle(&board);
    let mut solver = Solver::new();

    let solution = solver.solve(&board, 6, &walled).expect("puzzle is solvable");
    assert_eq!(solution.movement_cost, Some(5));
    assert_eq!(
        solution.cells,
        cells(&[147, 175, 203, 231, 282, 283, 284, 285])
    );

    let exact_budget = solver
        .find_winning_cells(&board, 5, &walled)
        .expect("puzzle is solvable");
    assert_eq!(exact_budget, solution.cells);
}

#[test]
fn budget_below_the_cheapest_destination_yields_nothing() {
    let board = Board::default();
    let solution = Solver::new()
        .solve(&board, 4, &walled_puzzle(&board))
        .expect("puzzle is well formed");

    assert!(solution.is_empty());
    assert_eq!(solution.movement_cost, None);
}

#[test]
fn equally_cheap_destinations_are_all_returned() {
    let board = Board::default();
    let blocked_line = puzzle(
        vec![Cell::Floor; board.cell_count()],
        vec![
            MapEntity::new(at(&board, 13, -3), MapEntityType::Ally),
            MapEntity::new(at(&board, 17, -3), MapEntityType::Enemy),
            MapEntity::new(at(&board, 14, -3), MapEntityType::Obstacle),
        ],
    );

    let winning = find_winning_cells(&board, 3, &blocked_line).expect("puzzle is solvable");
    assert_eq!(winning, vec![at(&board, 13, -2), at(&board, 13, -4)]);
    assert_eq!(winning, cells(&[215, 242]));
}

#[test]
fn fenced_ally_out_of_sight_has_no_winning_cell() {
    let board = Board::default();
    let mut entities = vec![
        MapEntity::new(at(&board, 11, -3), MapEntityType::Ally),
        MapEntity::new(at(&board, 17, -3), MapEntityType::Enemy),
    ];
    entities.extend(
        [(11, -4), (12, -3), (11, -2), (10, -3)]
            .into_iter()
            .map(|(x, y)| MapEntity::new(at(&board, x, y), MapEntityType::Obstacle)),
    );
    let fenced = puzzle(vec![Cell::Floor; board.cell_count()], entities);

    let winning = find_winning_cells(&board, 10, &fenced).expect("puzzle is well formed");
    assert!(winning.is_empty());
}

#[test]
fn destination_checks_agree_with_winning_cells() {
    let board = Board::default();
    let walled = walled_puzzle(&board);
    let mut solver = Solver::new();

    assert_eq!(
        solver.check_destination(&board, 6, &walled, CellId::new(203)),
        Ok(PuzzleResult {
            success: true,
            cell: CellId::new(203),
        })
    );
    assert_eq!(
        solver.check_destination(&board, 6, &walled, CellId::new(204)),
        Ok(PuzzleResult {
            success: false,
            cell: CellId::new(204),
        })
    );
    assert_eq!(
        solver.check_destination(&board, 4, &walled, CellId::new(203)),
        Ok(PuzzleResult {
            success: false,
            cell: CellId::new(203),
        })
    );
}

#[test]
fn missing_units_are_reported() {
    let board = Board::default();
    let no_enemy = puzzle(
        vec![Cell::Floor; board.cell_count()],
        vec![MapEntity::new(at(&board, 12, -3), MapEntityType::Ally)],
    );
    let no_ally = puzzle(
        vec![Cell::Floor; board.cell_count()],
        vec![MapEntity::new(at(&board, 17, -3), MapEntityType::Enemy)],
    );

    assert_eq!(
        find_winning_cells(&board, 3, &no_enemy),
        Err(PuzzleError::MissingRequiredEntity(MapEntityType::Enemy))
    );
    assert_eq!(
        find_winning_cells(&board, 3, &no_ally),
        Err(PuzzleError::MissingRequiredEntity(MapEntityType::Ally))
    );
}
