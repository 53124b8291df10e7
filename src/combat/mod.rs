//! Combat primitives: combatants, damage rolls and the battle log

pub mod combatant;
pub mod constants;
pub mod damage;
pub mod log;

pub use combatant::{Combatant, Roster};
pub use damage::{DamageRoll, FixedDamage, RandomDamage};
pub use log::BattleLog;
