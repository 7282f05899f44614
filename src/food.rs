use rand::Rng;

use crate::grid::{Cell, Grid};
use crate::snake::Snake;

/// Picks a uniformly random cell not occupied by the snake.
///
/// Free cells are enumerated up front rather than rejection-sampled, so the
/// draw stays uniform and terminates even on a nearly full board. Returns
/// `None` when the snake covers every cell.
#[must_use]
pub fn spawn_cell<R: Rng + ?Sized>(rng: &mut R, grid: Grid, snake: &Snake) -> Option<Cell> {
    let mut candidates = Vec::with_capacity(grid.total_cells().saturating_sub(snake.len()));

    for y in 0..i32::from(grid.size()) {
        for x in 0..i32::from(grid.size()) {
            let cell = Cell::new(x, y);
            if !snake.occupies(cell) {
                candidates.push(cell);
            }
        }
    }

    if candidates.is_empty() {
        return None;
    }

    let index = rng.gen_range(0..candidates.len());
    Some(candidates[index])
}
