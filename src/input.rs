use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};

/// Canonical movement directions on the grid.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns the unit cell delta `(dx, dy)` for this direction.
    #[must_use]
    pub fn delta(self) -> (i32, i32) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }

    /// Returns true when `other` points exactly the opposite way,
    /// i.e. the two deltas sum to zero on both axes.
    #[must_use]
    pub fn is_opposite(self, other: Self) -> bool {
        let (ax, ay) = self.delta();
        let (bx, by) = other.delta();
        ax + bx == 0 && ay + by == 0
    }
}

/// Abstract commands the frontend feeds into the game controller.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Command {
    Direction(Direction),
    /// Start when idle or ended, toggle pause otherwise.
    StartOrPause,
    Restart,
    Quit,
}

/// Maps a pressed key to a command. Unbound keys return `None`.
#[must_use]
pub fn map_key(code: KeyCode) -> Option<Command> {
    match code {
        KeyCode::Up | KeyCode::Char('w' | 'W') => Some(Command::Direction(Direction::Up)),
        KeyCode::Down | KeyCode::Char('s' | 'S') => Some(Command::Direction(Direction::Down)),
        KeyCode::Left | KeyCode::Char('a' | 'A') => Some(Command::Direction(Direction::Left)),
        KeyCode::Right | KeyCode::Char('d' | 'D') => Some(Command::Direction(Direction::Right)),
        KeyCode::Char(' ') | KeyCode::Enter | KeyCode::Char('p' | 'P') => {
            Some(Command::StartOrPause)
        }
        KeyCode::Char('r' | 'R') => Some(Command::Restart),
        KeyCode::Char('q' | 'Q') | KeyCode::Esc => Some(Command::Quit),
        _ => None,
    }
}

/// Polls the terminal for at most `timeout` and returns the next command.
///
/// Key release and repeat events are ignored so held keys do not flood the
/// controller with duplicate direction requests.
pub fn poll_command(timeout: Duration) -> io::Result<Option<Command>> {
    if !event::poll(timeout)? {
        return Ok(None);
    }

    match event::read()? {
        Event::Key(key) if key.kind == KeyEventKind::Press => Ok(map_key(key.code)),
        _ => Ok(None),
    }
}
