//! Combat tick - one fixed-interval advance of the fight
//!
//! A tick attacks the current target (if any), then auto-heals the player
//! when health has fallen under the threshold.

use serde::Serialize;

use crate::combat::DamageRoll;
use crate::simulation::state::SimulationState;

/// Events emitted by a tick, for display and tracing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum CombatEvent {
    /// The current target was hit
    Hit {
        target: String,
        damage: u32,
        remaining: u32,
    },
    /// The current target dropped to zero and was cleared
    Defeated { target: String },
    /// The player was auto-healed
    Healed { amount: u32, health: u32 },
}

/// Run one combat tick. Returns the events that occurred.
pub fn run_combat_tick(
    state: &mut SimulationState,
    damage: &mut impl DamageRoll,
) -> Vec<CombatEvent> {
    let mut events = Vec::new();

    if let Some(report) = state.attack(damage) {
        events.push(CombatEvent::Hit {
            target: report.target.clone(),
            damage: report.damage,
            remaining: report.remaining,
        });
        if report.defeated {
            events.push(CombatEvent::Defeated {
                target: report.target,
            });
        }
    }

    if state.needs_auto_heal() {
        let amount = state.heal_amount();
        let health = state.heal(amount);
        events.push(CombatEvent::Healed { amount, health });
    }

    events
}
