//! Scenario configuration

use serde::{Deserialize, Serialize};
use strike_sim::prelude::*;

/// Path checked for a scenario config file at startup
pub const CONFIG_PATH: &str = "intercept.toml";

/// Scenario configuration for the intercept demo
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RangeConfig {
    /// Resolver tuning
    pub sim: SimConfig,

    /// Scenario layout and run length
    pub scenario: ScenarioConfig,
}

/// Scenario layout configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioConfig {
    /// Number of incoming missiles
    pub missile_count: u32,

    /// Number of defended bunkers
    pub bunker_count: u32,

    /// Number of loitering decoys
    pub decoy_count: u32,

    /// Kill probability assigned to every missile
    pub missile_kill_probability: f32,

    /// Missile closing speed in distance units per tick
    pub missile_speed: f32,

    /// Number of simulation ticks to run
    pub ticks: u32,

    /// RNG seed for reproducible runs
    pub seed: u64,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            missile_count: 8,
            bunker_count: 3,
            decoy_count: 4,
            missile_kill_probability: 0.7,
            missile_speed: 900.0,
            ticks: 40,
            seed: 0x5EED,
        }
    }
}

impl Config for RangeConfig {}

impl RangeConfig {
    /// Load configuration from the default path, falling back to defaults
    /// when the file is absent or unreadable
    pub fn load_or_default() -> Self {
        match Self::load_from_file(CONFIG_PATH) {
            Ok(config) => {
                log::info!("loaded scenario config from {CONFIG_PATH}");
                config
            }
            Err(err) => {
                log::debug!("using default scenario config ({err})");
                Self::default()
            }
        }
    }
}
