use crate::grid::Grid;
use crate::snake::{Cell, Snake};

/// Terminal collision kinds for a proposed head position.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Collision {
    Wall,
    SelfHit,
}

/// Checks a proposed head position against the wall and the current body.
///
/// An out-of-bounds head always reports [`Collision::Wall`], regardless of
/// body contents. The self check runs against the full pre-advance body,
/// including the tail cell that would vacate this step: moving onto the
/// current tail counts as a self collision.
#[must_use]
pub fn check(next_head: Cell, snake: &Snake, grid: Grid) -> Option<Collision> {
    if !grid.contains(next_head) {
        return Some(Collision::Wall);
    }

    if snake.occupies(next_head) {
        return Some(Collision::SelfHit);
    }

    None
}
