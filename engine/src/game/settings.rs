use std::time::Duration;

use super::types::BoardSize;

pub const DEFAULT_BOARD_WIDTH: i32 = 20;
pub const DEFAULT_BOARD_HEIGHT: i32 = 20;
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(150);

/// Points awarded per food eaten.
pub const FOOD_SCORE: u32 = 10;

#[derive(Clone, Debug)]
pub struct GameSettings {
    pub board: BoardSize,
    pub tick_interval: Duration,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            board: BoardSize::new(DEFAULT_BOARD_WIDTH, DEFAULT_BOARD_HEIGHT),
            tick_interval: DEFAULT_TICK_INTERVAL,
        }
    }
}

impl GameSettings {
    pub fn validate(&self) -> Result<(), String> {
        if self.board.width < 10 || self.board.width > 100 {
            return Err("Board width must be between 10 and 100".to_string());
        }
        if self.board.height < 10 || self.board.height > 100 {
            return Err("Board height must be between 10 and 100".to_string());
        }
        let tick_ms = self.tick_interval.as_millis();
        if !(50..=5000).contains(&tick_ms) {
            return Err("Tick interval must be between 50ms and 5000ms".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_validate() {
        assert!(GameSettings::default().validate().is_ok());
    }

    #[test]
    fn test_tiny_board_is_rejected() {
        let settings = GameSettings {
            board: BoardSize::new(5, 20),
            ..GameSettings::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_too_fast_tick_is_rejected() {
        let settings = GameSettings {
            tick_interval: Duration::from_millis(10),
            ..GameSettings::default()
        };
        assert!(settings.validate().is_err());
    }
}
