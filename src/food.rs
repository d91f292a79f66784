use rand::Rng;
use thiserror::Error;

use crate::grid::Grid;
use crate::snake::{Cell, Snake};

/// Random draws attempted before falling back to a scan of free cells.
const SAMPLE_ATTEMPTS: u32 = 128;

/// No free cell is left for food; the snake covers the whole grid.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Error)]
#[error("no free cell left on the {size}x{size} grid")]
pub struct GridFullError {
    pub size: u16,
}

/// Picks a uniformly random free cell for the next food.
///
/// Draws uniformly from the full grid and rejects occupied cells. The
/// rejection loop is bounded: after a fixed number of misses the free
/// cells are enumerated and one is picked directly, so a nearly-full grid
/// can never spin indefinitely.
pub fn place<R: Rng + ?Sized>(rng: &mut R, grid: Grid, snake: &Snake) -> Result<Cell, GridFullError> {
    if snake.len() >= grid.total_cells() {
        return Err(GridFullError { size: grid.size() });
    }

    let side = i32::from(grid.size());
    for _ in 0..SAMPLE_ATTEMPTS {
        let candidate = Cell {
            x: rng.gen_range(0..side),
            y: rng.gen_range(0..side),
        };
        if !snake.occupies(candidate) {
            return Ok(candidate);
        }
    }

    let free: Vec<Cell> = (0..side)
        .flat_map(|y| (0..side).map(move |x| Cell { x, y }))
        .filter(|cell| !snake.occupies(*cell))
        .collect();

    // Non-empty: the occupancy check above already ruled out a full grid.
    let index = rng.gen_range(0..free.len());
    Ok(free[index])
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use crate::grid::Grid;
    use crate::input::Direction;
    use crate::snake::{Cell, Snake};

    use super::{place, GridFullError};

    #[test]
    fn food_never_lands_on_the_snake() {
        let mut rng = StdRng::seed_from_u64(7);
        let grid = Grid::new(8);
        let snake = Snake::from_segments(vec![
            Cell { x: 0, y: 0 },
            Cell { x: 1, y: 0 },
            Cell { x: 2, y: 0 },
        ]);

        for _ in 0..100 {
            let food = place(&mut rng, grid, &snake).expect("grid has free cells");
            assert!(!snake.occupies(food));
            assert!(grid.contains(food));
        }
    }

    #[test]
    fn single_free_cell_is_always_found() {
        let mut rng = StdRng::seed_from_u64(11);
        let grid = Grid::new(2);
        // Three of four cells occupied; only (1, 1) remains.
        let snake = Snake::from_segments(vec![
            Cell { x: 0, y: 0 },
            Cell { x: 1, y: 0 },
            Cell { x: 0, y: 1 },
        ]);

        for _ in 0..50 {
            let food = place(&mut rng, grid, &snake).expect("one free cell remains");
            assert_eq!(food, Cell { x: 1, y: 1 });
        }
    }

    #[test]
    fn full_grid_reports_grid_full() {
        let mut rng = StdRng::seed_from_u64(3);
        let grid = Grid::new(2);
        let snake = Snake::from_segments(vec![
            Cell { x: 0, y: 0 },
            Cell { x: 1, y: 0 },
            Cell { x: 1, y: 1 },
            Cell { x: 0, y: 1 },
        ]);

        assert_eq!(
            place(&mut rng, grid, &snake),
            Err(GridFullError { size: 2 })
        );
    }

    #[test]
    fn placement_is_deterministic_for_a_seed() {
        let grid = Grid::new(10);
        let snake = Snake::with_length(Cell { x: 5, y: 5 }, Direction::Right, 4);

        let a = place(&mut StdRng::seed_from_u64(42), grid, &snake);
        let b = place(&mut StdRng::seed_from_u64(42), grid, &snake);

        assert_eq!(a, b);
    }
}
