//! Controller state: turns widget events into commands and mirrors snapshots
//!
//! The controller owns no simulation state. It knows the roster it was given
//! at initialization, the speed bounds, and what the last snapshot said.

use crate::combat::Roster;
use crate::command::Command;
use crate::core::config::SpeedBounds;
use crate::core::types::GameSpeed;
use crate::simulation::snapshot::Snapshot;
use crate::ui::display::{render_panel, RefreshSink};

/// A user interaction with one of the controller widgets
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// Raw contents of the speed field
    SpeedChanged(String),
    HealClicked,
    StartStopClicked,
    /// Identifier chosen in the target selector
    TargetSelected(String),
}

#[derive(Debug, Clone)]
pub struct Controller {
    roster: Roster,
    speed_bounds: SpeedBounds,
    /// Last accepted speed, shown in the speed field
    speed: GameSpeed,
    is_running: bool,
    last_snapshot: Option<Snapshot>,
}

impl Controller {
    pub fn new(roster: Roster, speed_bounds: SpeedBounds, speed: GameSpeed) -> Self {
        Self {
            roster,
            speed_bounds,
            speed,
            is_running: false,
            last_snapshot: None,
        }
    }

    /// Translate a widget event into a command. `None` means the event was
    /// invalid and is ignored.
    pub fn handle(&mut self, event: UiEvent) -> Option<Command> {
        match event {
            UiEvent::SpeedChanged(raw) => match GameSpeed::parse(&raw, self.speed_bounds) {
                Ok(speed) => {
                    self.speed = speed;
                    Some(Command::SetSpeed(speed))
                }
                Err(e) => {
                    tracing::warn!("Ignoring speed input: {}", e);
                    None
                }
            },
            UiEvent::HealClicked => Some(Command::Heal),
            UiEvent::StartStopClicked => {
                self.is_running = !self.is_running;
                Some(Command::ToggleRun)
            }
            UiEvent::TargetSelected(name) => match self.roster.find(&name) {
                Some(combatant) => Some(Command::SelectTarget(combatant.name.clone())),
                None => {
                    tracing::debug!("Unknown target '{}' selected", name);
                    None
                }
            },
        }
    }

    pub fn is_running(&self) -> bool {
        self.is_running
    }

    pub fn speed(&self) -> GameSpeed {
        self.speed
    }

    pub fn start_stop_label(&self) -> &'static str {
        if self.is_running {
            "Stop"
        } else {
            "Start"
        }
    }

    pub fn target_options(&self) -> Vec<&str> {
        self.roster.names().collect()
    }

    /// Render the last snapshot; empty until the first refresh
    pub fn render(&self) -> String {
        match &self.last_snapshot {
            Some(snapshot) => {
                render_panel(snapshot, self.start_stop_label(), &self.target_options())
            }
            None => String::new(),
        }
    }
}

impl RefreshSink for Controller {
    fn refresh(&mut self, snapshot: &Snapshot) {
        self.is_running = snapshot.running;
        match GameSpeed::try_from(snapshot.game_speed) {
            Ok(speed) => self.speed = speed,
            Err(e) => tracing::warn!("Snapshot carries unusable speed: {}", e),
        }
        self.last_snapshot = Some(snapshot.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::Combatant;
    use crate::core::config::FightConfig;
    use crate::simulation::{SimulationState, TickLoop};

    fn controller() -> Controller {
        let roster = Roster::new(vec![
            Combatant::new("Goblin", 30),
            Combatant::new("Orc", 50),
        ]);
        Controller::new(roster, SpeedBounds::default(), GameSpeed::NORMAL)
    }

    #[test]
    fn test_valid_speed_emits_command() {
        let mut ctl = controller();
        let cmd = ctl.handle(UiEvent::SpeedChanged("2".into()));
        let expected = GameSpeed::new(2.0, SpeedBounds::default()).unwrap();
        assert_eq!(cmd, Some(Command::SetSpeed(expected)));
        assert_eq!(ctl.speed(), expected);
    }

    #[test]
    fn test_invalid_speed_keeps_prior() {
        let mut ctl = controller();
        for raw in ["abc", "0", "-2", "NaN", "12", ""] {
            assert_eq!(ctl.handle(UiEvent::SpeedChanged(raw.into())), None);
        }
        assert_eq!(ctl.speed(), GameSpeed::NORMAL);
    }

    #[test]
    fn test_start_stop_label_toggles() {
        let mut ctl = controller();
        assert_eq!(ctl.start_stop_label(), "Start");
        assert_eq!(ctl.handle(UiEvent::StartStopClicked), Some(Command::ToggleRun));
        assert!(ctl.is_running());
        assert_eq!(ctl.start_stop_label(), "Stop");
        ctl.handle(UiEvent::StartStopClicked);
        assert_eq!(ctl.start_stop_label(), "Start");
    }

    #[test]
    fn test_unknown_target_ignored() {
        let mut ctl = controller();
        assert_eq!(ctl.handle(UiEvent::TargetSelected("Dragon".into())), None);
        assert_eq!(
            ctl.handle(UiEvent::TargetSelected("Orc".into())),
            Some(Command::SelectTarget("Orc".into()))
        );
    }

    #[test]
    fn test_heal_click() {
        assert_eq!(controller().handle(UiEvent::HealClicked), Some(Command::Heal));
    }

    #[test]
    fn test_refresh_adopts_engine_speed() {
        let mut ctl = controller();
        ctl.handle(UiEvent::SpeedChanged("2".into()));

        let mut state = SimulationState::from_config(&FightConfig::default()).unwrap();
        let engine_speed = GameSpeed::new(3.0, SpeedBounds::default()).unwrap();
        state.set_game_speed(engine_speed);
        ctl.refresh(&Snapshot::capture(&state, &TickLoop::new(), Vec::new(), 0));

        assert_eq!(ctl.speed(), engine_speed);
        assert!(ctl.render().contains("Game Speed: 3.0"));
    }

    #[test]
    fn test_render_empty_before_refresh() {
        assert!(controller().render().is_empty());
    }
}
