//! Ray stepping across diamond coordinates.

use sightline_core::{Board, CellId, GridPoint};

/// Accumulators closer than this are treated as equal, producing a single
/// diagonal step instead of two orthogonal ones.
const TIE_TOLERANCE: f64 = 1e-4;

/// Grid points crossed by the straight ray joining two cells.
///
/// The start point is excluded and the end point closes the sequence. The
/// result is empty when both cells are identical or either is not on the
/// board. Points may fall outside the board near its edges.
#[must_use]
pub fn points_between(board: &Board, start: CellId, end: CellId) -> Vec<GridPoint> {
    let mut points = Vec::new();
    trace_ray(board, start, end, &mut points);
    points
}

/// Writes the points crossed by the ray from `start` to `end` into `out`.
///
/// The output buffer is cleared before being populated; see
/// [`points_between`] for the shape of the sequence.
pub fn trace_ray(board: &Board, start: CellId, end: CellId, out: &mut Vec<GridPoint>) {
    out.clear();

    if start == end {
        return;
    }

    let (Some(from), Some(to)) = (board.point(start), board.point(end)) else {
        return;
    };

    let dx = f64::from(to.x() - from.x());
    let dy = f64::from(to.y() - from.y());
    let length = (dx * dx + dy * dy).sqrt();
    let direction_x = dx / length;
    let direction_y = dy / length;

    // A zero component yields an infinite step, so that axis never advances.
    let step_x = (1.0 / direction_x).abs();
    let step_y = (1.0 / direction_y).abs();
    let sign_x = if direction_x < 0.0 { -1 } else { 1 };
    let sign_y = if direction_y < 0.0 { -1 } else { 1 };

    let mut t_max_x = 0.5 * step_x;
    let mut t_max_y = 0.5 * step_y;
    let (mut x, mut y) = (from.x(), from.y());

    // Every iteration moves at least one unit closer to the end point.
    for _ in 0..from.distance(to) {
        if x == to.x() && y == to.y() {
            break;
        }

        if (t_max_x - t_max_y).abs() < TIE_TOLERANCE {
            t_max_x += step_x;
            t_max_y += step_y;
            x += sign_x;
            y += sign_y;
        } else if t_max_x < t_max_y {
            t_max_x += step_x;
            x += sign_x;
        } else {
            t_max_y += step_y;
            y += sign_y;
        }

        out.push(GridPoint::new(x, y));
    }
}
