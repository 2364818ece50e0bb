use engine::config::{ConfigManager, FileContentConfigProvider, Validate};
use engine::game::{BoardSize, GameSettings};
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_CONFIG_FILE: &str = "snake_game_config.yaml";

pub fn get_config_manager(file_path: &str) -> ConfigManager<FileContentConfigProvider, Config> {
    ConfigManager::from_yaml_file(file_path)
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Config {
    pub field_width: i32,
    pub field_height: i32,
    pub tick_interval_ms: u64,
    pub high_score_file: String,
}

impl Config {
    pub fn game_settings(&self) -> GameSettings {
        GameSettings {
            board: BoardSize::new(self.field_width, self.field_height),
            tick_interval: Duration::from_millis(self.tick_interval_ms),
        }
    }
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        self.game_settings().validate()?;
        if self.high_score_file.is_empty() {
            return Err("high_score_file must not be empty".to_string());
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            field_width: 20,
            field_height: 20,
            tick_interval_ms: 150,
            high_score_file: "snake_high_score.yaml".to_string(),
        }
    }
}
