//! Fight Controller - Entry Point
//!
//! Sets up logging and the async runtime, spawns the engine, then reads
//! controller commands from stdin until `quit`.

use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;
use tokio::runtime::Runtime;

use fight_controller::combat::{RandomDamage, Roster};
use fight_controller::command::{parse_line, Command, ReplInput};
use fight_controller::core::{FightConfig, GameSpeed, Result};
use fight_controller::simulation::{Engine, EngineHandle, SimulationState};
use fight_controller::ui::{Controller, RefreshSink};

/// Interactive fight controller
#[derive(Parser, Debug)]
#[command(name = "fight-controller")]
#[command(about = "Drive a combat tick loop from a terminal controller")]
struct Args {
    /// TOML config file (defaults are used when omitted)
    #[arg(long, short = 'c')]
    config: Option<PathBuf>,

    /// Random seed for reproducible damage rolls
    #[arg(long)]
    seed: Option<u64>,

    /// Starting game speed, overrides the config
    #[arg(long)]
    speed: Option<f64>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fight_controller=info".into()),
        )
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => FightConfig::load(path)?,
        None => FightConfig::default(),
    };
    if let Some(speed) = args.speed {
        config.initial_speed = speed;
        config.validate()?;
    }

    let seed = args.seed.unwrap_or_else(rand::random);
    tracing::info!("Fight Controller starting (seed {})", seed);

    let rt = Runtime::new()?;
    let state = SimulationState::from_config(&config)?;
    let damage = RandomDamage::with_range(seed, config.damage_min, config.damage_max);
    let handle = {
        // Spawning needs the runtime context
        let _guard = rt.enter();
        Engine::new(state, damage).spawn()
    };

    let mut controller = Controller::new(
        Roster::from_config(&config.combatants),
        config.speed_bounds,
        config.initial_game_speed()?,
    );
    controller.refresh(&handle.snapshot());

    print_help();
    print!("{}", controller.render());

    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut input = String::new();
        if io::stdin().read_line(&mut input)? == 0 {
            break;
        }
        let input = input.trim();
        if input.is_empty() {
            continue;
        }

        let parsed = match parse_line(input) {
            Ok(parsed) => parsed,
            Err(err) => {
                println!("{}", err);
                continue;
            }
        };

        let command = match parsed {
            ReplInput::Quit => break,
            ReplInput::Ui(event) => match controller.handle(event) {
                Some(command) => command,
                None => {
                    println!("Ignored.");
                    continue;
                }
            },
            ReplInput::Attack => Command::Attack,
            ReplInput::Status { json } => {
                let snapshot = rt.block_on(handle.execute(Command::Refresh))?;
                controller.refresh(&snapshot);
                if json {
                    println!("{}", snapshot.to_json()?);
                } else {
                    print!("{}", controller.render());
                }
                continue;
            }
        };

        let snapshot = rt.block_on(handle.execute(command))?;
        controller.refresh(&snapshot);
        print!("{}", controller.render());
    }

    shutdown(&rt, handle, controller.speed())
}

fn shutdown(rt: &Runtime, handle: EngineHandle, speed: GameSpeed) -> Result<()> {
    let state = rt.block_on(handle.shutdown())?;
    tracing::info!(
        "Fight Controller exiting (health {}, speed {})",
        state.player_health(),
        speed
    );
    Ok(())
}

fn print_help() {
    println!("\n=== FIGHT CONTROLLER ===");
    println!("Commands:");
    println!("  speed <value>    - Set game speed (0.1 - 5)");
    println!("  heal             - Heal the player");
    println!("  toggle / start   - Start or stop the game loop");
    println!("  target <name>    - Select a target");
    println!("  attack           - Attack the current target once");
    println!("  status [--json]  - Show the controller panel");
    println!("  quit / q         - Exit");
    println!();
}
