//! Engine - the single owner of the simulation
//!
//! Runs as one tokio task. Commands arrive over a channel and ticks come from
//! the tick loop; `select!` handles one at a time to completion, so every
//! mutation of the state happens on a single logical flow.

use tokio::sync::{mpsc, oneshot, watch};
use tokio::task::JoinHandle;

use crate::combat::DamageRoll;
use crate::command::{Command, CommandExecutor};
use crate::core::error::{FightError, Result};
use crate::core::types::Tick;
use crate::simulation::snapshot::Snapshot;
use crate::simulation::state::SimulationState;
use crate::simulation::tick::run_combat_tick;
use crate::simulation::tick_loop::TickLoop;
use crate::ui::display::RefreshSink;
use crate::ui::scores::{NoScores, ScoreSource};

const COMMAND_BUFFER: usize = 64;

/// A command plus an optional reply slot for the resulting snapshot
struct Request {
    command: Command,
    reply: Option<oneshot::Sender<Snapshot>>,
}

pub struct Engine {
    state: SimulationState,
    ticks: TickLoop,
    damage: Box<dyn DamageRoll + Send>,
    sinks: Vec<Box<dyn RefreshSink + Send>>,
    scores: Box<dyn ScoreSource + Send>,
    tick_count: Tick,
}

impl Engine {
    pub fn new(state: SimulationState, damage: impl DamageRoll + Send + 'static) -> Self {
        Self {
            state,
            ticks: TickLoop::new(),
            damage: Box::new(damage),
            sinks: Vec::new(),
            scores: Box::new(NoScores),
            tick_count: 0,
        }
    }

    /// Add a display sink refreshed after every command and tick
    pub fn with_sink(mut self, sink: impl RefreshSink + Send + 'static) -> Self {
        self.sinks.push(Box::new(sink));
        self
    }

    pub fn with_scores(mut self, scores: impl ScoreSource + Send + 'static) -> Self {
        self.scores = Box::new(scores);
        self
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(
            &self.state,
            &self.ticks,
            self.scores.top_scorers(),
            self.tick_count,
        )
    }

    /// Spawn the engine onto the current tokio runtime
    pub fn spawn(self) -> EngineHandle {
        let (commands, receiver) = mpsc::channel(COMMAND_BUFFER);
        let (snapshot_tx, snapshots) = watch::channel(self.snapshot());
        let engine = self.with_sink(snapshot_tx);
        let task = tokio::spawn(engine.run(receiver));
        EngineHandle {
            commands,
            snapshots,
            task,
        }
    }

    async fn run(mut self, mut requests: mpsc::Receiver<Request>) -> SimulationState {
        tracing::debug!("Engine started");
        loop {
            tokio::select! {
                request = requests.recv() => {
                    let Some(Request { command, reply }) = request else {
                        break;
                    };
                    let shutdown = command == Command::Shutdown;
                    let snapshot = self.dispatch(&command);
                    if let Some(reply) = reply {
                        // The requester may have given up waiting
                        let _ = reply.send(snapshot);
                    }
                    if shutdown {
                        break;
                    }
                }
                _ = self.ticks.next_tick() => {
                    self.on_tick();
                }
            }
        }

        if self.ticks.is_running() {
            let _ = self.ticks.stop();
        }
        tracing::debug!("Engine stopped after {} ticks", self.tick_count);
        self.state
    }

    fn dispatch(&mut self, command: &Command) -> Snapshot {
        if let Err(e) = CommandExecutor::execute(
            &mut self.state,
            &mut self.ticks,
            &mut self.damage,
            command,
        ) {
            if e.is_recoverable() {
                tracing::debug!("Ignoring {:?}: {}", command, e);
            } else {
                tracing::warn!("Command {:?} failed: {}", command, e);
            }
        }
        self.refresh()
    }

    fn on_tick(&mut self) {
        self.tick_count += 1;
        let events = run_combat_tick(&mut self.state, &mut self.damage);
        tracing::trace!("Tick {}: {:?}", self.tick_count, events);
        self.refresh();
    }

    fn refresh(&mut self) -> Snapshot {
        let snapshot = self.snapshot();
        for sink in &mut self.sinks {
            sink.refresh(&snapshot);
        }
        snapshot
    }
}

/// Client side of a spawned engine
pub struct EngineHandle {
    commands: mpsc::Sender<Request>,
    snapshots: watch::Receiver<Snapshot>,
    task: JoinHandle<SimulationState>,
}

impl EngineHandle {
    /// Send a command and wait for the snapshot taken right after it
    pub async fn execute(&self, command: Command) -> Result<Snapshot> {
        let (reply, response) = oneshot::channel();
        self.commands
            .send(Request {
                command,
                reply: Some(reply),
            })
            .await
            .map_err(|_| FightError::EngineStopped)?;
        response.await.map_err(|_| FightError::EngineStopped)
    }

    /// Send a command without waiting for it to be applied
    pub async fn send(&self, command: Command) -> Result<()> {
        self.commands
            .send(Request {
                command,
                reply: None,
            })
            .await
            .map_err(|_| FightError::EngineStopped)
    }

    /// Latest published snapshot
    pub fn snapshot(&self) -> Snapshot {
        self.snapshots.borrow().clone()
    }

    /// Receiver notified on every refresh
    pub fn subscribe(&self) -> watch::Receiver<Snapshot> {
        self.snapshots.clone()
    }

    /// Stop the engine and take back the final state
    pub async fn shutdown(self) -> Result<SimulationState> {
        // Already gone is fine; the join below reports the outcome
        let _ = self.send(Command::Shutdown).await;
        self.task.await.map_err(|_| FightError::EngineStopped)
    }
}
