//! Sandbox config — JSON файл + `SANDBOX_*` env overrides
//!
//! Ошибка загрузки не фатальна: `load_or_default` логирует warning
//! и возвращает defaults, состояние симуляции это не затрагивает.

use std::path::Path;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::logger;
use crate::movement::{Boundary, DEFAULT_COLLISION_RADIUS};

const DEFAULT_VIEWPORT_WIDTH: f32 = 800.0;
const DEFAULT_VIEWPORT_HEIGHT: f32 = 600.0;
const DEFAULT_PLAYER_SPEED: f32 = 200.0;
const DEFAULT_NPC_COUNT: usize = 3;
const DEFAULT_SEED: u64 = 42;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config read failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("config parse failed: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Параметры sandbox (все поля опциональны в JSON)
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SandboxConfig {
    pub viewport_width: f32,
    pub viewport_height: f32,
    pub player_speed: f32,
    pub marker_radius: f32,
    pub npc_count: usize,
    pub seed: u64,
    /// Стартовая позиция игрока; None → центр viewport
    pub start_x: Option<f32>,
    pub start_y: Option<f32>,
}

impl Default for SandboxConfig {
    fn default() -> Self {
        Self {
            viewport_width: DEFAULT_VIEWPORT_WIDTH,
            viewport_height: DEFAULT_VIEWPORT_HEIGHT,
            player_speed: DEFAULT_PLAYER_SPEED,
            marker_radius: DEFAULT_COLLISION_RADIUS,
            npc_count: DEFAULT_NPC_COUNT,
            seed: DEFAULT_SEED,
            start_x: None,
            start_y: None,
        }
    }
}

impl SandboxConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Файл (если указан) → env overrides. Любая ошибка файла → defaults + warning.
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let config = match path {
            Some(path) => Self::load(path).unwrap_or_else(|err| {
                logger::log_warning(&format!("{} ({}), using defaults", err, path.display()));
                Self::default()
            }),
            None => Self::default(),
        };

        config.with_env_overrides()
    }

    pub fn with_env_overrides(self) -> Self {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Overrides из произвольного источника (env в проде, closure в тестах)
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        self.player_speed = parse_or(&lookup, "SANDBOX_SPEED", self.player_speed);
        self.seed = parse_or(&lookup, "SANDBOX_SEED", self.seed);
        self.npc_count = parse_or(&lookup, "SANDBOX_NPC_COUNT", self.npc_count);
        self
    }

    pub fn boundary(&self) -> Boundary {
        Boundary::from_extent(self.viewport_width, self.viewport_height)
    }

    pub fn start_position(&self) -> Vec2 {
        let center = self.boundary().center().unwrap_or(Vec2::ZERO);
        Vec2::new(self.start_x.unwrap_or(center.x), self.start_y.unwrap_or(center.y))
    }
}

fn parse_or<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T
where
    T: std::str::FromStr + Copy,
{
    lookup(key)
        .and_then(|v| v.trim().parse::<T>().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = SandboxConfig::from_json_str(r#"{ "player_speed": 120.0, "npc_count": 5 }"#).unwrap();

        assert_eq!(config.player_speed, 120.0);
        assert_eq!(config.npc_count, 5);
        assert_eq!(config.viewport_width, 800.0);
        assert_eq!(config.marker_radius, 32.0);
        assert_eq!(config.seed, 42);
    }

    #[test]
    fn test_invalid_json_is_parse_error() {
        let err = SandboxConfig::from_json_str("{ player_speed: ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let err = SandboxConfig::load("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));

        let config = SandboxConfig::load_or_default(Some(Path::new("/definitely/not/here.json")));
        assert_eq!(config.viewport_height, 600.0);
    }

    #[test]
    fn test_overrides() {
        let config = SandboxConfig::default().with_overrides(|key| match key {
            "SANDBOX_SPEED" => Some("75.5".to_string()),
            "SANDBOX_SEED" => Some("not-a-number".to_string()),
            _ => None,
        });

        assert_eq!(config.player_speed, 75.5);
        assert_eq!(config.seed, 42); // мусор игнорируется
        assert_eq!(config.npc_count, 3);
    }

    #[test]
    fn test_start_position_defaults_to_center() {
        let config = SandboxConfig::default();
        assert_eq!(config.start_position(), Vec2::new(400.0, 300.0));

        let config = SandboxConfig {
            start_x: Some(10.0),
            ..SandboxConfig::default()
        };
        assert_eq!(config.start_position(), Vec2::new(10.0, 300.0));
    }
}
