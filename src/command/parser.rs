//! REPL line parsing
//!
//! Lines are split with shell quoting rules and parsed by clap, so
//! `target "Cave Troll"` selects a name containing a space.

use clap::{Parser, Subcommand};

use crate::ui::UiEvent;

/// What a REPL line asks for
#[derive(Debug, Clone, PartialEq)]
pub enum ReplInput {
    /// A controller widget event
    Ui(UiEvent),
    /// Manual single attack
    Attack,
    Status { json: bool },
    Quit,
}

#[derive(Parser)]
#[command(name = "fight", about = "Fight controller commands", disable_version_flag = true)]
struct ReplLine {
    #[command(subcommand)]
    command: ReplCommand,
}

#[derive(Subcommand)]
enum ReplCommand {
    /// Change game speed (0.1 - 5)
    Speed {
        #[arg(allow_hyphen_values = true)]
        value: String,
    },
    /// Heal the player
    Heal,
    /// Start or stop the game loop
    #[command(visible_aliases = ["start", "stop"])]
    Toggle,
    /// Select a target by name
    Target { name: String },
    /// Attack the current target once
    Attack,
    /// Show the controller panel
    Status {
        #[arg(long)]
        json: bool,
    },
    /// Exit
    #[command(visible_aliases = ["exit", "q"])]
    Quit,
}

/// Parse one REPL line. Errors carry clap's rendered message (including help).
pub fn parse_line(line: &str) -> Result<ReplInput, String> {
    let mut args = shlex::split(line).ok_or("error: Invalid quoting")?;
    args.insert(0, "fight".to_string());
    let parsed = ReplLine::try_parse_from(args).map_err(|e| e.to_string())?;

    Ok(match parsed.command {
        ReplCommand::Speed { value } => ReplInput::Ui(UiEvent::SpeedChanged(value)),
        ReplCommand::Heal => ReplInput::Ui(UiEvent::HealClicked),
        ReplCommand::Toggle => ReplInput::Ui(UiEvent::StartStopClicked),
        ReplCommand::Target { name } => ReplInput::Ui(UiEvent::TargetSelected(name)),
        ReplCommand::Attack => ReplInput::Attack,
        ReplCommand::Status { json } => ReplInput::Status { json },
        ReplCommand::Quit => ReplInput::Quit,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_speed_keeps_raw_text() {
        assert_eq!(
            parse_line("speed 2.5").unwrap(),
            ReplInput::Ui(UiEvent::SpeedChanged("2.5".into()))
        );
        // Validation happens in the controller, not here
        assert_eq!(
            parse_line("speed fast").unwrap(),
            ReplInput::Ui(UiEvent::SpeedChanged("fast".into()))
        );
        assert_eq!(
            parse_line("speed -1").unwrap(),
            ReplInput::Ui(UiEvent::SpeedChanged("-1".into()))
        );
    }

    #[test]
    fn test_parse_quoted_target() {
        assert_eq!(
            parse_line("target \"Cave Troll\"").unwrap(),
            ReplInput::Ui(UiEvent::TargetSelected("Cave Troll".into()))
        );
    }

    #[test]
    fn test_parse_aliases() {
        assert_eq!(
            parse_line("start").unwrap(),
            ReplInput::Ui(UiEvent::StartStopClicked)
        );
        assert_eq!(parse_line("q").unwrap(), ReplInput::Quit);
        assert_eq!(
            parse_line("status --json").unwrap(),
            ReplInput::Status { json: true }
        );
    }

    #[test]
    fn test_parse_errors() {
        assert!(parse_line("target \"unclosed").is_err());
        assert!(parse_line("dance").is_err());
        assert!(parse_line("target").is_err());
    }
}
