use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::clock::StepClock;
use crate::collision::{self, Collision};
use crate::config::GameConfig;
use crate::food;
use crate::grid::Grid;
use crate::input::Direction;
use crate::snake::{Cell, Snake};

/// Current state-machine position of a session.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameStatus {
    Idle,
    Running,
    Paused,
    GameOver,
    Won,
}

impl GameStatus {
    /// Returns true for the terminal states (`GameOver`, `Won`).
    #[must_use]
    pub fn is_ended(self) -> bool {
        matches!(self, Self::GameOver | Self::Won)
    }
}

/// Events surfaced to the frontend, drained once per frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    ScoreChanged { score: u32 },
    GameOver { final_score: u32, collision: Collision },
    Won { final_score: u32 },
    StatusChanged { status: GameStatus },
}

/// Owns one game session and the state machine driving it.
///
/// The controller is advanced exclusively through [`GameController::tick`]
/// with wall-clock millisecond deltas; commands arrive through
/// [`GameController::start`], [`GameController::pause`],
/// [`GameController::restart`], and
/// [`GameController::request_direction`]. It never touches the terminal,
/// persisted storage, or any clock of its own, so several controllers can
/// run side by side (the integration tests do exactly that).
#[derive(Debug)]
pub struct GameController {
    pub snake: Snake,
    pub food: Cell,
    pub score: u32,
    pub speed: f64,
    pub status: GameStatus,
    /// What ended the last session, for the game-over overlay.
    pub death_cause: Option<Collision>,
    config: GameConfig,
    grid: Grid,
    current_direction: Direction,
    pending_direction: Direction,
    clock: StepClock,
    rng: StdRng,
    events: Vec<GameEvent>,
}

impl GameController {
    /// Creates an idle controller with an OS-seeded random source.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Self::with_seed(config, rand::random())
    }

    /// Creates an idle controller with a fixed seed for reproducible runs.
    ///
    /// # Panics
    ///
    /// Panics when the configuration cannot host a session: zero-length
    /// snake, grid side shorter than the snake, no free cell left for
    /// food, or a non-positive initial speed.
    #[must_use]
    pub fn with_seed(config: GameConfig, seed: u64) -> Self {
        assert!(
            config.initial_snake_length > 0,
            "initial snake length must be at least 1"
        );
        assert!(
            config.grid_size >= config.initial_snake_length,
            "grid side ({}) must be at least the initial snake length ({})",
            config.grid_size,
            config.initial_snake_length
        );
        let grid = Grid::new(config.grid_size);
        assert!(
            grid.total_cells() > usize::from(config.initial_snake_length),
            "grid must keep a free cell for food"
        );
        assert!(
            config.initial_speed > 0.0,
            "initial speed must be positive"
        );
        assert!(
            config.speed_increment >= 0.0,
            "speed increment must not be negative"
        );

        let mut rng = StdRng::seed_from_u64(seed);
        let snake = Self::spawn_snake(config);
        let food = food::place(&mut rng, grid, &snake)
            .expect("construction checks guarantee a free cell for food");

        Self {
            snake,
            food,
            score: 0,
            speed: config.initial_speed,
            status: GameStatus::Idle,
            death_cause: None,
            config,
            grid,
            current_direction: Direction::Right,
            pending_direction: Direction::Right,
            clock: StepClock::new(),
            rng,
            events: Vec::new(),
        }
    }

    /// Returns the play field.
    #[must_use]
    pub fn grid(&self) -> Grid {
        self.grid
    }

    /// Returns the session configuration.
    #[must_use]
    pub fn config(&self) -> GameConfig {
        self.config
    }

    /// Returns the direction applied at the most recent step.
    #[must_use]
    pub fn current_direction(&self) -> Direction {
        self.current_direction
    }

    /// Takes all events emitted since the previous drain.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Starts a fresh session, or resumes when paused. Running: no-op.
    pub fn start(&mut self) {
        match self.status {
            GameStatus::Running => {}
            GameStatus::Paused => {
                self.clock.reset();
                self.set_status(GameStatus::Running);
            }
            GameStatus::Idle | GameStatus::GameOver | GameStatus::Won => {
                self.reset_session();
                self.set_status(GameStatus::Running);
            }
        }
    }

    /// Toggles between `Running` and `Paused`; no-op in other states.
    ///
    /// Resuming clears the clock accumulator so a long pause never turns
    /// into a burst of catch-up steps.
    pub fn pause(&mut self) {
        match self.status {
            GameStatus::Running => self.set_status(GameStatus::Paused),
            GameStatus::Paused => {
                self.clock.reset();
                self.set_status(GameStatus::Running);
            }
            _ => {}
        }
    }

    /// Resets to a fresh idle session from any state.
    pub fn restart(&mut self) {
        self.reset_session();
        self.set_status(GameStatus::Idle);
    }

    /// Records a direction request from the input collaborator.
    ///
    /// A request opposite to the direction of the most recent step is a
    /// documented no-op, judged at request time rather than at step time.
    /// In `Idle` a direction request also starts the game.
    pub fn request_direction(&mut self, direction: Direction) {
        if self.status == GameStatus::Idle {
            self.start();
        }

        if direction.is_opposite(self.current_direction) {
            return;
        }
        self.pending_direction = direction;
    }

    /// Feeds an elapsed wall-clock delta and advances zero or more steps.
    ///
    /// No-op outside `Running` (not an error); a scheduled tick arriving
    /// right after a pause therefore drops cleanly without touching state.
    ///
    /// # Panics
    ///
    /// Panics on a negative `delta_ms`, which is always a caller bug.
    pub fn tick(&mut self, delta_ms: f64) {
        assert!(
            delta_ms >= 0.0,
            "negative tick delta ({delta_ms} ms) is a caller bug"
        );
        if self.status != GameStatus::Running {
            return;
        }

        self.clock.accumulate(delta_ms);
        let steps = self.clock.steps_ready(self.speed);
        for _ in 0..steps {
            self.step();
            if self.status != GameStatus::Running {
                break;
            }
        }
    }

    /// Advances the snake by exactly one cell.
    fn step(&mut self) {
        self.current_direction = self.pending_direction;
        let proposed = self.snake.next_head(self.current_direction);

        if let Some(collision) = collision::check(proposed, &self.snake, self.grid) {
            self.death_cause = Some(collision);
            self.events.push(GameEvent::GameOver {
                final_score: self.score,
                collision,
            });
            self.set_status(GameStatus::GameOver);
            return;
        }

        let grew = proposed == self.food;
        self.snake.advance(proposed, grew);

        if grew {
            self.score += self.config.points_per_food;
            self.speed += self.config.speed_increment;
            self.events.push(GameEvent::ScoreChanged { score: self.score });

            match food::place(&mut self.rng, self.grid, &self.snake) {
                Ok(cell) => self.food = cell,
                Err(_) => {
                    // Snake fills the grid: the session is won, not stuck.
                    self.events.push(GameEvent::Won {
                        final_score: self.score,
                    });
                    self.set_status(GameStatus::Won);
                }
            }
        }
    }

    fn reset_session(&mut self) {
        self.snake = Self::spawn_snake(self.config);
        self.food = food::place(&mut self.rng, self.grid, &self.snake)
            .expect("construction checks guarantee a free cell for food");
        self.score = 0;
        self.speed = self.config.initial_speed;
        self.current_direction = Direction::Right;
        self.pending_direction = Direction::Right;
        self.death_cause = None;
        self.clock.reset();
    }

    fn set_status(&mut self, status: GameStatus) {
        if self.status != status {
            self.status = status;
            self.events.push(GameEvent::StatusChanged { status });
        }
    }

    /// Spawns the starting snake facing right, around a third of the way
    /// across, shifted right when needed so the whole body fits the grid.
    fn spawn_snake(config: GameConfig) -> Snake {
        let length = i32::from(config.initial_snake_length);
        let start = Cell {
            x: i32::from(config.grid_size / 3).max(length - 1),
            y: i32::from(config.grid_size / 2),
        };
        Snake::with_length(start, Direction::Right, config.initial_snake_length)
    }

    #[cfg(test)]
    fn force_direction(&mut self, direction: Direction) {
        self.current_direction = direction;
        self.pending_direction = direction;
    }
}

#[cfg(test)]
mod tests {
    use crate::collision::Collision;
    use crate::config::GameConfig;
    use crate::input::Direction;
    use crate::snake::{Cell, Snake};

    use super::{GameController, GameEvent, GameStatus};

    const STEP_MS: f64 = 125.0; // one step at the default 8 cells/sec

    fn running_game(seed: u64) -> GameController {
        let mut game = GameController::with_seed(GameConfig::default(), seed);
        game.start();
        game
    }

    #[test]
    fn controller_starts_idle_with_defaults() {
        let game = GameController::with_seed(GameConfig::default(), 1);

        assert_eq!(game.status, GameStatus::Idle);
        assert_eq!(game.score, 0);
        assert_eq!(game.speed, 8.0);
        assert_eq!(game.snake.len(), 4);
        assert!(!game.snake.occupies(game.food));
    }

    #[test]
    fn spawned_snake_fits_small_grids() {
        let game = GameController::with_seed(GameConfig::with_grid_size(5), 1);

        assert_eq!(game.snake.len(), 4);
        for segment in game.snake.segments() {
            assert!(game.grid().contains(*segment));
        }
    }

    #[test]
    fn eating_food_grows_scores_and_speeds_up() {
        let mut game = running_game(1);
        game.snake = Snake::with_length(Cell { x: 3, y: 3 }, Direction::Right, 4);
        game.food = Cell { x: 4, y: 3 };
        game.drain_events();

        game.tick(STEP_MS);

        assert_eq!(game.status, GameStatus::Running);
        assert_eq!(game.snake.head(), Cell { x: 4, y: 3 });
        assert_eq!(game.snake.len(), 5);
        assert_eq!(game.score, 10);
        assert!((game.speed - 8.15).abs() < 1e-9);
        assert!(!game.snake.occupies(game.food));
        assert!(game
            .drain_events()
            .contains(&GameEvent::ScoreChanged { score: 10 }));
    }

    #[test]
    fn wall_collision_ends_the_game_without_mutating_the_snake() {
        let mut game = running_game(2);
        game.snake = Snake::from_segments(vec![Cell { x: 0, y: 0 }, Cell { x: 1, y: 0 }]);
        game.force_direction(Direction::Left);
        game.drain_events();

        game.tick(STEP_MS);

        assert_eq!(game.status, GameStatus::GameOver);
        assert_eq!(game.death_cause, Some(Collision::Wall));
        assert_eq!(game.snake.head(), Cell { x: 0, y: 0 });
        assert_eq!(game.snake.len(), 2);

        let events = game.drain_events();
        assert!(events.contains(&GameEvent::GameOver {
            final_score: 0,
            collision: Collision::Wall,
        }));
        assert!(events.contains(&GameEvent::StatusChanged {
            status: GameStatus::GameOver,
        }));
    }

    #[test]
    fn self_collision_ends_the_game() {
        let mut game = running_game(3);
        game.snake = Snake::from_segments(vec![
            Cell { x: 2, y: 2 },
            Cell { x: 2, y: 3 },
            Cell { x: 3, y: 3 },
            Cell { x: 4, y: 3 },
            Cell { x: 4, y: 2 },
        ]);
        game.force_direction(Direction::Right);
        game.food = Cell { x: 9, y: 9 };

        // One step right to (3,2), then down into the segment at (3,3).
        game.tick(STEP_MS);
        assert_eq!(game.status, GameStatus::Running);
        game.request_direction(Direction::Down);
        game.tick(STEP_MS);

        assert_eq!(game.status, GameStatus::GameOver);
        assert_eq!(game.death_cause, Some(Collision::SelfHit));
    }

    #[test]
    fn opposite_direction_request_is_a_silent_no_op() {
        let mut game = running_game(4);
        game.snake = Snake::with_length(Cell { x: 10, y: 10 }, Direction::Right, 4);
        game.food = Cell { x: 0, y: 0 };

        game.request_direction(Direction::Left);
        game.tick(STEP_MS);

        assert_eq!(game.snake.head(), Cell { x: 11, y: 10 });
    }

    #[test]
    fn rapid_requests_apply_only_the_last_non_opposite() {
        let mut game = running_game(5);
        game.snake = Snake::with_length(Cell { x: 10, y: 10 }, Direction::Right, 4);
        game.food = Cell { x: 0, y: 0 };

        // Moving right: Up is accepted, Left rejected, Down accepted last.
        game.request_direction(Direction::Up);
        game.request_direction(Direction::Left);
        game.request_direction(Direction::Down);
        game.tick(STEP_MS);

        assert_eq!(game.snake.head(), Cell { x: 10, y: 11 });
    }

    #[test]
    fn direction_request_while_idle_starts_the_game() {
        let mut game = GameController::with_seed(GameConfig::default(), 6);

        game.request_direction(Direction::Up);

        assert_eq!(game.status, GameStatus::Running);
        assert!(game
            .drain_events()
            .contains(&GameEvent::StatusChanged {
                status: GameStatus::Running,
            }));
    }

    #[test]
    fn pause_is_a_toggle_and_freezes_the_simulation() {
        let mut game = running_game(7);
        let head = game.snake.head();

        game.pause();
        assert_eq!(game.status, GameStatus::Paused);
        game.tick(1000.0);
        assert_eq!(game.snake.head(), head);

        game.pause();
        assert_eq!(game.status, GameStatus::Running);
    }

    #[test]
    fn pause_is_a_no_op_while_idle_or_ended() {
        let mut game = GameController::with_seed(GameConfig::default(), 8);

        game.pause();
        assert_eq!(game.status, GameStatus::Idle);
    }

    #[test]
    fn resume_discards_time_accumulated_before_the_pause() {
        let mut game = running_game(9);
        game.snake = Snake::with_length(Cell { x: 10, y: 10 }, Direction::Right, 4);
        game.food = Cell { x: 0, y: 0 };

        game.tick(120.0); // just under one step
        game.pause();
        game.pause();
        game.tick(120.0); // 240 ms total would have been one step

        assert_eq!(game.snake.head(), Cell { x: 10, y: 10 });
    }

    #[test]
    fn tick_is_a_no_op_outside_running() {
        let mut game = GameController::with_seed(GameConfig::default(), 10);
        let head = game.snake.head();

        game.tick(10_000.0);

        assert_eq!(game.status, GameStatus::Idle);
        assert_eq!(game.snake.head(), head);
        assert!(game.drain_events().is_empty());
    }

    #[test]
    fn start_resets_score_and_speed_after_a_session() {
        let mut game = running_game(11);
        game.snake = Snake::with_length(Cell { x: 3, y: 3 }, Direction::Right, 4);
        game.food = Cell { x: 4, y: 3 };
        game.tick(STEP_MS);
        assert_eq!(game.score, 10);
        assert!(game.speed > 8.0);

        game.start(); // no-op while running
        assert_eq!(game.score, 10);

        game.restart();
        assert_eq!(game.status, GameStatus::Idle);
        assert_eq!(game.score, 0);
        assert_eq!(game.speed, 8.0);
    }

    #[test]
    fn speed_never_decreases_within_a_session() {
        let mut game = running_game(12);
        let mut last_speed = game.speed;

        for _ in 0..5 {
            let head = game.snake.head();
            game.food = Cell {
                x: head.x + 1,
                y: head.y,
            };
            game.tick(1000.0 / game.speed + 1e-6);
            assert!(game.speed >= last_speed);
            last_speed = game.speed;
        }
    }

    #[test]
    fn filling_the_grid_wins_the_session() {
        let config = GameConfig {
            grid_size: 2,
            initial_snake_length: 2,
            ..GameConfig::default()
        };
        let mut game = GameController::with_seed(config, 13);
        game.start();
        game.snake = Snake::from_segments(vec![
            Cell { x: 0, y: 0 },
            Cell { x: 0, y: 1 },
            Cell { x: 1, y: 1 },
        ]);
        game.food = Cell { x: 1, y: 0 };
        game.drain_events();

        game.tick(STEP_MS);

        assert_eq!(game.status, GameStatus::Won);
        assert_eq!(game.snake.len(), 4);

        let events = game.drain_events();
        assert!(events.contains(&GameEvent::Won { final_score: 10 }));
        assert!(!events
            .iter()
            .any(|event| matches!(event, GameEvent::GameOver { .. })));
    }

    #[test]
    fn game_over_stops_processing_remaining_steps_in_the_tick() {
        let mut game = running_game(14);
        game.snake = Snake::from_segments(vec![Cell { x: 1, y: 0 }, Cell { x: 0, y: 0 }]);
        game.food = Cell { x: 10, y: 10 };
        game.force_direction(Direction::Up);
        game.drain_events();

        // Two steps worth of time; the first already hits the wall.
        game.tick(STEP_MS * 2.0);

        assert_eq!(game.status, GameStatus::GameOver);
        let game_overs = game
            .drain_events()
            .iter()
            .filter(|event| matches!(event, GameEvent::GameOver { .. }))
            .count();
        assert_eq!(game_overs, 1);
    }

    #[test]
    #[should_panic(expected = "negative tick delta")]
    fn negative_tick_delta_panics() {
        let mut game = running_game(15);
        game.tick(-16.0);
    }

    #[test]
    #[should_panic(expected = "grid side")]
    fn grid_smaller_than_snake_is_rejected() {
        let config = GameConfig {
            grid_size: 3,
            initial_snake_length: 4,
            ..GameConfig::default()
        };
        let _ = GameController::with_seed(config, 0);
    }
}
