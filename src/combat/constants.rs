//! Combat system constants - all tunable defaults in one place
//!
//! `FightConfig` copies these as its defaults; override them there.

// Player constants
pub const MAX_PLAYER_HEALTH: u32 = 100;
pub const HEAL_AMOUNT: u32 = 20;
pub const AUTO_HEAL_THRESHOLD: u32 = 30;

// Damage roll (inclusive)
pub const DAMAGE_MIN: u32 = 5;
pub const DAMAGE_MAX: u32 = 14;

// Loop timing
pub const BASE_TICK_MS: u64 = 1000;
pub const MIN_SPEED: f64 = 0.1;
pub const MAX_SPEED: f64 = 5.0;

// Hard limits for any configured speed range: periods stay in [1 ms, 1000 s]
pub const SPEED_FLOOR: f64 = 0.001;
pub const SPEED_CEILING: f64 = 1000.0;

// Display
pub const BATTLE_LOG_CAPACITY: usize = 10;
