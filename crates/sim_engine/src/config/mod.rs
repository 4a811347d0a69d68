//! Configuration system
//!
//! Engine configuration is plain serde-derived data loaded from TOML files.
//! Missing files are an application concern; everything here has sensible
//! defaults so a config file is always optional.

pub use serde::{Deserialize, Serialize};

/// Configuration trait
pub trait Config: Serialize + for<'de> Deserialize<'de> + Default {
    /// Load configuration from file
    fn load_from_file(path: &str) -> Result<Self, ConfigError> {
        if !path.ends_with(".toml") {
            return Err(ConfigError::UnsupportedFormat(path.to_string()));
        }
        let contents = std::fs::read_to_string(path).map_err(ConfigError::Io)?;
        toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Save configuration to file
    fn save_to_file(&self, path: &str) -> Result<(), ConfigError> {
        if !path.ends_with(".toml") {
            return Err(ConfigError::UnsupportedFormat(path.to_string()));
        }
        let contents =
            toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?;
        std::fs::write(path, contents).map_err(ConfigError::Io)
    }
}

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Unsupported format
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}

/// Top-level engine configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Title reported in logs (and by any external window driver)
    pub title: String,

    /// Target steps per second, used for pacing diagnostics only
    pub target_fps: f32,

    /// Defaults applied to newly constructed rigid bodies
    pub physics: PhysicsSettings,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            title: "Sim Engine".to_string(),
            target_fps: 60.0,
            physics: PhysicsSettings::default(),
        }
    }
}

impl Config for EngineConfig {}

/// Defaults for rigid-body construction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhysicsSettings {
    /// Per-axis acceleration clamp bound
    pub max_acceleration: f32,

    /// Friction coefficient applied as a force opposing acceleration
    pub friction: f32,
}

impl Default for PhysicsSettings {
    fn default() -> Self {
        Self {
            max_acceleration: 9.8,
            friction: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_rigid_body_constants() {
        let settings = PhysicsSettings::default();
        assert_eq!(settings.max_acceleration, 9.8);
        assert_eq!(settings.friction, 0.0);
    }

    #[test]
    fn parses_partial_toml_with_defaults() {
        let config: EngineConfig = toml::from_str(
            r#"
            title = "Billiards"
            target_fps = 120.0

            [physics]
            max_acceleration = 5.0
            friction = 0.1
            "#,
        )
        .expect("valid config");

        assert_eq!(config.title, "Billiards");
        assert_eq!(config.physics.max_acceleration, 5.0);
        assert_eq!(config.physics.friction, 0.1);
    }

    #[test]
    fn rejects_unknown_format() {
        let result = EngineConfig::load_from_file("engine.yaml");
        assert!(matches!(result, Err(ConfigError::UnsupportedFormat(_))));
    }

    #[test]
    fn toml_round_trip() {
        let config = EngineConfig::default();
        let text = toml::to_string_pretty(&config).expect("serialize");
        let parsed: EngineConfig = toml::from_str(&text).expect("parse");
        assert_eq!(parsed.title, config.title);
        assert_eq!(parsed.physics.max_acceleration, config.physics.max_acceleration);
    }
}
