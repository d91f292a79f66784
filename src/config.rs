use serde::{Deserialize, Serialize};

/// Default side length of the square grid, in cells.
pub const DEFAULT_GRID_SIZE: u16 = 20;

/// Default initial snake length, in cells.
pub const DEFAULT_SNAKE_LENGTH: u16 = 4;

/// Default initial speed, in cells per second.
pub const DEFAULT_SPEED_CELLS_PER_SEC: f64 = 8.0;

/// Speed gained per food eaten, in cells per second.
pub const DEFAULT_SPEED_INCREMENT: f64 = 0.15;

/// Points granted per food eaten.
pub const DEFAULT_POINTS_PER_FOOD: u32 = 10;

/// Session parameters, fixed at controller construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Side length of the square grid.
    pub grid_size: u16,
    /// Starting snake length; must not exceed `grid_size`.
    pub initial_snake_length: u16,
    /// Starting speed in cells per second.
    pub initial_speed: f64,
    /// Speed added per food eaten.
    pub speed_increment: f64,
    /// Score added per food eaten.
    pub points_per_food: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            initial_snake_length: DEFAULT_SNAKE_LENGTH,
            initial_speed: DEFAULT_SPEED_CELLS_PER_SEC,
            speed_increment: DEFAULT_SPEED_INCREMENT,
            points_per_food: DEFAULT_POINTS_PER_FOOD,
        }
    }
}

impl GameConfig {
    /// Returns the default configuration with a different grid size.
    #[must_use]
    pub fn with_grid_size(grid_size: u16) -> Self {
        Self {
            grid_size,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::GameConfig;

    #[test]
    fn default_matches_documented_values() {
        let config = GameConfig::default();

        assert_eq!(config.grid_size, 20);
        assert_eq!(config.initial_snake_length, 4);
        assert_eq!(config.initial_speed, 8.0);
        assert_eq!(config.speed_increment, 0.15);
        assert_eq!(config.points_per_food, 10);
    }

    #[test]
    fn config_round_trips_through_json() {
        let config = GameConfig::with_grid_size(12);

        let json = serde_json::to_string(&config).expect("config serializes");
        let parsed: GameConfig = serde_json::from_str(&json).expect("config parses");

        assert_eq!(parsed, config);
    }
}
