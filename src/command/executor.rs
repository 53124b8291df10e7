//! Command execution - applies a command to the state and tick loop

use crate::combat::DamageRoll;
use crate::command::Command;
use crate::core::error::Result;
use crate::simulation::state::SimulationState;
use crate::simulation::tick_loop::TickLoop;

/// Applies commands to the simulation
pub struct CommandExecutor;

impl CommandExecutor {
    /// Apply one command. Errors leave the state untouched and are meant to
    /// be logged and dropped by the caller.
    pub fn execute(
        state: &mut SimulationState,
        ticks: &mut TickLoop,
        damage: &mut impl DamageRoll,
        command: &Command,
    ) -> Result<()> {
        match command {
            Command::SetSpeed(speed) => {
                if ticks.is_running() {
                    ticks.restart(speed.tick_period())?;
                }
                state.set_game_speed(*speed);
                Ok(())
            }
            Command::Heal => {
                let amount = state.heal_amount();
                state.heal(amount);
                Ok(())
            }
            Command::ToggleRun => {
                if ticks.is_running() {
                    ticks.stop()
                } else {
                    ticks.start(state.game_speed().tick_period())
                }
            }
            Command::SelectTarget(name) => state.set_target(name),
            Command::StartLoop => ticks.start(state.game_speed().tick_period()),
            Command::StopLoop => ticks.stop(),
            Command::Attack => {
                state.attack(damage);
                Ok(())
            }
            Command::Refresh | Command::Shutdown => Ok(()),
        }
    }
}
