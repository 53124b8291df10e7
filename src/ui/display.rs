//! Display refresh: sinks that receive snapshots, and the text panel

use std::fmt::Write;
use tokio::sync::watch;

use crate::simulation::snapshot::Snapshot;

/// Receives a snapshot after every command and tick
pub trait RefreshSink {
    fn refresh(&mut self, snapshot: &Snapshot);
}

impl RefreshSink for watch::Sender<Snapshot> {
    fn refresh(&mut self, snapshot: &Snapshot) {
        // Keeps the value even when nobody is subscribed
        self.send_replace(snapshot.clone());
    }
}

/// Adapts a closure into a sink
pub struct FnSink<F>(pub F);

impl<F: FnMut(&Snapshot)> RefreshSink for FnSink<F> {
    fn refresh(&mut self, snapshot: &Snapshot) {
        (self.0)(snapshot)
    }
}

/// `Health: N`
pub fn health_line(snapshot: &Snapshot) -> String {
    format!("Health: {}", snapshot.player_health)
}

/// `Target: NAME (Health: N)` or `No target selected.`
pub fn target_line(snapshot: &Snapshot) -> String {
    match &snapshot.target {
        Some(target) => format!("Target: {} (Health: {})", target.name, target.health),
        None => "No target selected.".to_string(),
    }
}

/// Render the full controller panel as plain text
pub fn render_panel(snapshot: &Snapshot, start_stop_label: &str, targets: &[&str]) -> String {
    let mut out = String::new();
    // Writing to a String cannot fail
    let _ = writeln!(out, "=== FIGHT CONTROLLER ===");
    let _ = writeln!(out, "Game Speed: {:.1}", snapshot.game_speed);
    let _ = writeln!(out, "{}", health_line(snapshot));
    let _ = writeln!(out, "{}", target_line(snapshot));
    let _ = writeln!(out, "Select Target: {}", targets.join(" | "));
    let _ = writeln!(out, "[{}]", start_stop_label);

    let _ = writeln!(out, "Combat Log:");
    for entry in &snapshot.battle_log {
        let _ = writeln!(out, "  {}", entry);
    }

    let _ = writeln!(out, "Top Scorers:");
    for scorer in &snapshot.top_scorers {
        let _ = writeln!(out, "  {}: {}", scorer.name, scorer.score);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::snapshot::TargetView;
    use crate::ui::scores::Scorer;

    fn snapshot() -> Snapshot {
        Snapshot {
            player_health: 80,
            max_player_health: 100,
            target: Some(TargetView {
                name: "Orc".into(),
                health: 12,
            }),
            battle_log: vec!["Target set to Orc".into()],
            top_scorers: vec![Scorer::new("Ayla", 7)],
            running: true,
            game_speed: 2.0,
            tick_period_ms: Some(500),
            tick_period_us: Some(500_000),
            ticks: 4,
        }
    }

    #[test]
    fn test_target_lines() {
        let mut snap = snapshot();
        assert_eq!(target_line(&snap), "Target: Orc (Health: 12)");
        snap.target = None;
        assert_eq!(target_line(&snap), "No target selected.");
    }

    #[test]
    fn test_panel_contents() {
        let panel = render_panel(&snapshot(), "Stop", &["Goblin", "Orc"]);
        assert!(panel.contains("Health: 80"));
        assert!(panel.contains("Game Speed: 2.0"));
        assert!(panel.contains("[Stop]"));
        assert!(panel.contains("  Target set to Orc"));
        assert!(panel.contains("  Ayla: 7"));
        assert!(panel.contains("Goblin | Orc"));
    }

    #[test]
    fn test_watch_sink_replaces_value() {
        let (tx, rx) = watch::channel(snapshot());
        let mut sink = tx;
        let mut next = snapshot();
        next.player_health = 55;
        sink.refresh(&next);
        assert_eq!(rx.borrow().player_health, 55);
    }

    #[test]
    fn test_fn_sink_called() {
        let mut seen = Vec::new();
        {
            let mut sink = FnSink(|s: &Snapshot| seen.push(s.player_health));
            sink.refresh(&snapshot());
        }
        assert_eq!(seen, vec![80]);
    }
}
