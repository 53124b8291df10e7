pub mod config;
pub mod error;
pub mod types;

pub use config::{CombatantConfig, FightConfig, SpeedBounds};
pub use error::{FightError, Result};
pub use types::{GameSpeed, Tick};
