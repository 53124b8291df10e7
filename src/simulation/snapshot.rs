//! Read-only view of the simulation, published after every command and tick

use serde::Serialize;

use crate::simulation::state::SimulationState;
use crate::simulation::tick_loop::TickLoop;
use crate::ui::scores::Scorer;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TargetView {
    pub name: String,
    pub health: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub player_health: u32,
    pub max_player_health: u32,
    pub target: Option<TargetView>,
    pub battle_log: Vec<String>,
    pub top_scorers: Vec<Scorer>,
    pub running: bool,
    pub game_speed: f64,
    /// Period of the active timer in whole milliseconds, rounded down;
    /// `None` while stopped
    pub tick_period_ms: Option<u64>,
    /// Same period at microsecond resolution
    pub tick_period_us: Option<u64>,
    /// Ticks processed since the engine started
    pub ticks: u64,
}

impl Snapshot {
    pub fn capture(
        state: &SimulationState,
        ticks: &TickLoop,
        top_scorers: Vec<Scorer>,
        tick_count: u64,
    ) -> Self {
        Self {
            player_health: state.player_health(),
            max_player_health: state.max_player_health(),
            target: state.current_target().map(|c| TargetView {
                name: c.name.clone(),
                health: c.health,
            }),
            battle_log: state.battle_log().to_vec(),
            top_scorers,
            running: ticks.is_running(),
            game_speed: state.game_speed().value(),
            tick_period_ms: ticks.period().map(|p| p.as_millis() as u64),
            tick_period_us: ticks.period().map(|p| p.as_micros() as u64),
            ticks: tick_count,
        }
    }

    pub fn to_json(&self) -> crate::core::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::{FightConfig, SpeedBounds};
    use crate::core::types::GameSpeed;

    #[test]
    fn test_capture_idle_state() {
        let mut state = SimulationState::from_config(&FightConfig::default()).unwrap();
        state.set_target("Dragon").unwrap();
        let snapshot = Snapshot::capture(&state, &TickLoop::new(), Vec::new(), 0);

        assert_eq!(snapshot.player_health, 100);
        assert_eq!(
            snapshot.target,
            Some(TargetView {
                name: "Dragon".into(),
                health: 100
            })
        );
        assert!(!snapshot.running);
        assert_eq!(snapshot.tick_period_ms, None);
        assert_eq!(snapshot.tick_period_us, None);
        assert_eq!(snapshot.battle_log, vec!["Target set to Dragon"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_period_reported_at_both_resolutions() {
        let mut state = SimulationState::from_config(&FightConfig::default()).unwrap();
        let speed = GameSpeed::new(3.0, SpeedBounds::default()).unwrap();
        state.set_game_speed(speed);
        let mut ticks = TickLoop::new();
        ticks.start(speed.tick_period()).unwrap();

        let snapshot = Snapshot::capture(&state, &ticks, Vec::new(), 0);
        assert_eq!(snapshot.tick_period_ms, Some(333));
        assert_eq!(snapshot.tick_period_us, Some(333_333));
    }

    #[test]
    fn test_json_contains_fields() {
        let state = SimulationState::from_config(&FightConfig::default()).unwrap();
        let json = Snapshot::capture(&state, &TickLoop::new(), Vec::new(), 3)
            .to_json()
            .unwrap();
        assert!(json.contains("\"player_health\": 100"));
        assert!(json.contains("\"target\": null"));
        assert!(json.contains("\"ticks\": 3"));
    }
}
