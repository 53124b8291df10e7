//! Fight configuration with documented constants
//!
//! All tunable numbers are collected here. Defaults reproduce the classic
//! controller demo: 100 max health, heal for 20, auto-heal under 30,
//! damage 5-14, ten log entries.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::combat::constants::{
    AUTO_HEAL_THRESHOLD, BATTLE_LOG_CAPACITY, DAMAGE_MAX, DAMAGE_MIN, HEAL_AMOUNT,
    MAX_PLAYER_HEALTH, MAX_SPEED, MIN_SPEED, SPEED_CEILING, SPEED_FLOOR,
};
use crate::core::error::{FightError, Result};
use crate::core::types::GameSpeed;

/// Inclusive range of accepted game speeds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpeedBounds {
    pub min: f64,
    pub max: f64,
}

impl SpeedBounds {
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

impl Default for SpeedBounds {
    fn default() -> Self {
        Self {
            min: MIN_SPEED,
            max: MAX_SPEED,
        }
    }
}

/// A combatant entry as supplied by the host
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatantConfig {
    pub name: String,
    pub health: u32,
}

impl CombatantConfig {
    pub fn new(name: impl Into<String>, health: u32) -> Self {
        Self {
            name: name.into(),
            health,
        }
    }
}

/// Configuration for the fight simulation and controller
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FightConfig {
    // === PLAYER ===
    /// Upper clamp for player health
    pub max_player_health: u32,

    /// Player health at start
    pub initial_player_health: u32,

    /// Health restored by one heal (button or auto-heal)
    pub heal_amount: u32,

    /// Each tick heals the player when health is strictly below this value
    pub auto_heal_threshold: u32,

    // === DAMAGE ===
    /// Smallest damage roll (inclusive)
    pub damage_min: u32,

    /// Largest damage roll (inclusive)
    pub damage_max: u32,

    // === LOOP ===
    /// Speed the loop starts with. Period is `1000 / speed` ms.
    pub initial_speed: f64,

    /// Accepted range for speed changes
    pub speed_bounds: SpeedBounds,

    // === DISPLAY ===
    /// Number of battle log entries kept; oldest evicted first
    pub log_capacity: usize,

    /// Targetable combatants, consumed read-only
    pub combatants: Vec<CombatantConfig>,
}

impl Default for FightConfig {
    fn default() -> Self {
        Self {
            max_player_health: MAX_PLAYER_HEALTH,
            initial_player_health: MAX_PLAYER_HEALTH,
            heal_amount: HEAL_AMOUNT,
            auto_heal_threshold: AUTO_HEAL_THRESHOLD,
            damage_min: DAMAGE_MIN,
            damage_max: DAMAGE_MAX,
            initial_speed: 1.0,
            speed_bounds: SpeedBounds::default(),
            log_capacity: BATTLE_LOG_CAPACITY,
            combatants: vec![
                CombatantConfig::new("Goblin", 30),
                CombatantConfig::new("Orc", 50),
                CombatantConfig::new("Dragon", 100),
            ],
        }
    }
}

impl FightConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and validate a TOML document. Missing keys take defaults.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: FightConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML config file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(
            "Loaded config from {} ({} combatants)",
            path.display(),
            config.combatants.len()
        );
        Ok(config)
    }

    /// Initial speed as a validated `GameSpeed`
    pub fn initial_game_speed(&self) -> Result<GameSpeed> {
        GameSpeed::new(self.initial_speed, self.speed_bounds)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        let bounds = self.speed_bounds;
        if !(bounds.min.is_finite() && bounds.max.is_finite()) || bounds.min <= 0.0 {
            return Err(FightError::InvalidConfig(format!(
                "speed bounds must be positive and finite, got [{}, {}]",
                bounds.min, bounds.max
            )));
        }
        if bounds.min < SPEED_FLOOR || bounds.max > SPEED_CEILING {
            return Err(FightError::InvalidConfig(format!(
                "speed bounds [{}, {}] exceed the supported range [{}, {}]",
                bounds.min, bounds.max, SPEED_FLOOR, SPEED_CEILING
            )));
        }
        if bounds.min > bounds.max {
            return Err(FightError::InvalidConfig(format!(
                "speed_bounds.min ({}) must be <= speed_bounds.max ({})",
                bounds.min, bounds.max
            )));
        }
        self.initial_game_speed()
            .map_err(|e| FightError::InvalidConfig(e.to_string()))?;

        if self.damage_min > self.damage_max {
            return Err(FightError::InvalidConfig(format!(
                "damage_min ({}) must be <= damage_max ({})",
                self.damage_min, self.damage_max
            )));
        }

        if self.max_player_health == 0 {
            return Err(FightError::InvalidConfig(
                "max_player_health must be positive".into(),
            ));
        }
        if self.initial_player_health > self.max_player_health {
            return Err(FightError::InvalidConfig(format!(
                "initial_player_health ({}) exceeds max_player_health ({})",
                self.initial_player_health, self.max_player_health
            )));
        }

        if self.log_capacity == 0 {
            return Err(FightError::InvalidConfig(
                "log_capacity must be positive".into(),
            ));
        }

        let mut seen = HashSet::new();
        for combatant in &self.combatants {
            if combatant.health == 0 {
                return Err(FightError::InvalidConfig(format!(
                    "combatant '{}' starts with zero health",
                    combatant.name
                )));
            }
            if !seen.insert(combatant.name.as_str()) {
                return Err(FightError::InvalidConfig(format!(
                    "duplicate combatant name '{}'",
                    combatant.name
                )));
            }
        }

        Ok(())
    }
}
