pub mod engine;
pub mod snapshot;
pub mod state;
pub mod tick;
pub mod tick_loop;

pub use engine::{Engine, EngineHandle};
pub use snapshot::{Snapshot, TargetView};
pub use state::{AttackReport, SimulationState};
pub use tick::{run_combat_tick, CombatEvent};
pub use tick_loop::{TickLoop, TickTimer};
