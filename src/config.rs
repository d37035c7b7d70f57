use serde::{Deserialize, Serialize};
use std::io::ErrorKind;

use crate::bot_controller::BotType;

pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}

/// Who makes the first move of a game (X always moves first, this
/// decides who plays X).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FirstMoveMode {
    Human,
    Bot,
    Random,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub bot_type: BotType,
    pub first_move: FirstMoveMode,
    /// Artificial "thinking" pause before a bot move is shown. Purely
    /// cosmetic, the search itself finishes in microseconds.
    pub bot_delay_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            bot_type: BotType::Minimax,
            first_move: FirstMoveMode::Human,
            bot_delay_ms: 400,
        }
    }
}

impl Validate for GameConfig {
    fn validate(&self) -> Result<(), String> {
        if self.bot_delay_ms > 5000 {
            return Err("bot_delay_ms must not exceed 5000".to_string());
        }
        Ok(())
    }
}

pub struct ConfigManager {
    file_path: String,
}

impl ConfigManager {
    pub fn from_yaml_file(file_path: &str) -> Self {
        Self {
            file_path: file_path.to_string(),
        }
    }

    /// Loads the config, writing the defaults to disk first if the file
    /// does not exist yet.
    pub fn get_config(&self) -> Result<GameConfig, String> {
        match std::fs::read_to_string(&self.file_path) {
            Ok(content) => {
                let config: GameConfig = serde_yaml_ng::from_str(&content)
                    .map_err(|e| format!("Failed to deserialize config: {}", e))?;
                config.validate()?;
                Ok(config)
            }
            Err(err) if err.kind() == ErrorKind::NotFound => {
                let config = GameConfig::default();
                self.save_config(&config)?;
                Ok(config)
            }
            Err(err) => Err(format!("Failed to read config file: {}", err)),
        }
    }

    pub fn save_config(&self, config: &GameConfig) -> Result<(), String> {
        let content = serde_yaml_ng::to_string(config)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;
        std::fs::write(&self.file_path, content)
            .map_err(|e| format!("Failed to write config file: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_yaml_round_trip() {
        let config = GameConfig {
            bot_type: BotType::Random,
            first_move: FirstMoveMode::Bot,
            bot_delay_ms: 100,
        };

        let yaml = serde_yaml_ng::to_string(&config).unwrap();
        let parsed: GameConfig = serde_yaml_ng::from_str(&yaml).unwrap();

        assert_eq!(parsed, config);
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(GameConfig::default().validate().is_ok());
    }

    #[test]
    fn test_excessive_delay_rejected() {
        let config = GameConfig {
            bot_delay_ms: 10_000,
            ..GameConfig::default()
        };

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_missing_file_creates_defaults() {
        let path = std::env::temp_dir().join(format!(
            "tictactoe_config_test_{}.yaml",
            std::process::id()
        ));
        let path_str = path.to_str().unwrap();
        let _ = std::fs::remove_file(&path);

        let manager = ConfigManager::from_yaml_file(path_str);
        let config = manager.get_config().unwrap();

        assert_eq!(config, GameConfig::default());
        assert!(path.exists());

        let _ = std::fs::remove_file(&path);
    }
}
