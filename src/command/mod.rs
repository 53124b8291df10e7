//! Command dispatch
//!
//! UI events become discrete `Command`s; the executor applies them to the
//! simulation state and tick loop:
//! UiEvent -> Controller -> Command -> CommandExecutor -> SimulationState

pub mod executor;
pub mod parser;

pub use executor::CommandExecutor;
pub use parser::{parse_line, ReplInput};

use crate::core::types::GameSpeed;

/// A discrete request consumed by the simulation
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Change speed; restarts the loop if running
    SetSpeed(GameSpeed),
    /// Heal the player by the configured amount
    Heal,
    /// Start the loop if stopped, stop it if running
    ToggleRun,
    /// Select a combatant by name
    SelectTarget(String),
    StartLoop,
    StopLoop,
    /// Single manual attack on the current target
    Attack,
    /// Re-publish the current snapshot
    Refresh,
    Shutdown,
}
