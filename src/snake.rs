use std::collections::VecDeque;

use crate::input::Direction;

/// Grid position in logical cell coordinates.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    /// Returns the neighboring cell one step in `direction`.
    #[must_use]
    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Snake body segments, head first.
///
/// The body is mutated only through [`Snake::advance`], and only after the
/// proposed head has passed collision checks, so the no-duplicate-cells
/// invariant holds for every reachable state.
#[derive(Debug, Clone)]
pub struct Snake {
    body: VecDeque<Cell>,
}

impl Snake {
    /// Builds a straight body of `length` cells with the head at `head`,
    /// extending opposite to `direction` so the first move is always safe.
    #[must_use]
    pub fn with_length(head: Cell, direction: Direction, length: u16) -> Self {
        assert!(length > 0, "snake length must be at least 1");

        let (dx, dy) = direction.delta();
        let body = (0..i32::from(length))
            .map(|i| Cell {
                x: head.x - dx * i,
                y: head.y - dy * i,
            })
            .collect();

        Self { body }
    }

    /// Creates a snake from explicit segments (front is head).
    #[must_use]
    pub fn from_segments(segments: Vec<Cell>) -> Self {
        assert!(!segments.is_empty(), "snake body must not be empty");
        Self {
            body: VecDeque::from(segments),
        }
    }

    /// Returns the head position after one step in `direction`, without
    /// mutating anything.
    #[must_use]
    pub fn next_head(&self, direction: Direction) -> Cell {
        self.head().step(direction)
    }

    /// Moves the head to `next_head`; the tail stays in place when `grew`
    /// is true, so the body gains one segment.
    pub fn advance(&mut self, next_head: Cell, grew: bool) {
        self.body.push_front(next_head);
        if !grew {
            let _ = self.body.pop_back();
        }
    }

    /// Returns the current head position.
    #[must_use]
    pub fn head(&self) -> Cell {
        *self
            .body
            .front()
            .expect("snake body must always contain at least one segment")
    }

    /// Returns true if any segment occupies `cell`.
    #[must_use]
    pub fn occupies(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }

    /// Returns current segment count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Returns true when there are no segments. Unreachable through the
    /// public constructors; kept for the conventional `len`/`is_empty` pair.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Iterates over body segments from head to tail.
    pub fn segments(&self) -> impl Iterator<Item = &Cell> {
        self.body.iter()
    }
}
