use super::grid::Grid;
use super::snake::Snake;
use crate::consts;
use rand::Rng;
use ratatui::layout::Position;
use tracing::debug;

/// Choose a cell for the food that the snake does not occupy.
///
/// Cells are drawn uniformly at random up to
/// [`MAX_FOOD_ATTEMPTS`][consts::MAX_FOOD_ATTEMPTS] times; if every draw
/// lands on the snake, the first free cell in row-major order is used
/// instead.  Returns `None` if the snake covers the whole grid.
pub(super) fn place_food<R: Rng>(mut rng: R, grid: Grid, snake: &Snake) -> Option<Position> {
    if snake.len() >= grid.cell_count() {
        return None;
    }
    for _ in 0..consts::MAX_FOOD_ATTEMPTS {
        let pos = Position {
            x: rng.random_range(0..grid.width),
            y: rng.random_range(0..grid.height),
        };
        if !snake.contains(pos) {
            return Some(pos);
        }
    }
    debug!(
        snake_len = snake.len(),
        "random food placement kept hitting the snake; scanning for a free cell"
    );
    grid.positions().find(|&p| !snake.contains(p))
}
