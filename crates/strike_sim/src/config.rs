//! Configuration system
//!
//! File-backed configuration in TOML or RON, selected by extension, plus
//! the resolver's own tuning parameters. Semantic validation is separate
//! from parsing and fails fast (spec'd values are rejected, never clamped).

pub use serde::{Deserialize, Serialize};

use crate::SimError;

/// Default impact radius in distance units
pub const DEFAULT_IMPACT_RADIUS: f32 = 2000.0;

/// Configuration trait
pub trait Config: Serialize + for<'de> Deserialize<'de> + Default {
    /// Load configuration from file
    fn load_from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(ConfigError::Io)?;

        // Try different formats
        if path.ends_with(".toml") {
            toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
        } else if path.ends_with(".ron") {
            ron::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
        } else {
            Err(ConfigError::UnsupportedFormat(path.to_string()))
        }
    }

    /// Save configuration to file
    fn save_to_file(&self, path: &str) -> Result<(), ConfigError> {
        let contents = if path.ends_with(".toml") {
            toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else if path.ends_with(".ron") {
            ron::ser::to_string_pretty(self, Default::default())
                .map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else {
            return Err(ConfigError::UnsupportedFormat(path.to_string()));
        };

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

/// Resolver tuning parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimConfig {
    /// Proximity threshold at or below which an encounter resolves
    pub impact_radius: f32,

    /// Whether projectile impacts against non-target mobiles cause mutual
    /// destruction
    pub projectile_collision_enabled: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            impact_radius: DEFAULT_IMPACT_RADIUS,
            projectile_collision_enabled: true,
        }
    }
}

impl Config for SimConfig {}

impl SimConfig {
    /// Validate semantic constraints
    ///
    /// # Errors
    ///
    /// Returns [`SimError::InvalidImpactRadius`] if the radius is zero,
    /// negative, or not finite.
    pub fn validate(&self) -> Result<(), SimError> {
        if !self.impact_radius.is_finite() || self.impact_radius <= 0.0 {
            return Err(SimError::InvalidImpactRadius(self.impact_radius));
        }
        Ok(())
    }
}
