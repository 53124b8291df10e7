//! Tick loop state machine
//!
//! `Stopped --start--> Running --stop--> Stopped`. The running state owns the
//! one and only timer, so two concurrent timers cannot exist.

use std::time::Duration;
use tokio::time::{self, Instant, Interval, MissedTickBehavior};

use crate::core::error::{FightError, Result};

/// Active periodic timer
#[derive(Debug)]
pub struct TickTimer {
    interval: Interval,
    period: Duration,
}

impl TickTimer {
    /// First tick fires one full period from now
    fn new(period: Duration) -> Self {
        let mut interval = time::interval_at(Instant::now() + period, period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        Self { interval, period }
    }

    pub fn period(&self) -> Duration {
        self.period
    }
}

#[derive(Debug, Default)]
pub enum TickLoop {
    #[default]
    Stopped,
    Running(TickTimer),
}

impl TickLoop {
    pub fn new() -> Self {
        Self::Stopped
    }

    pub fn is_running(&self) -> bool {
        matches!(self, TickLoop::Running(_))
    }

    /// Period of the active timer, if running
    pub fn period(&self) -> Option<Duration> {
        match self {
            TickLoop::Running(timer) => Some(timer.period()),
            TickLoop::Stopped => None,
        }
    }

    /// Start ticking every `period`. Must be called within a tokio runtime.
    pub fn start(&mut self, period: Duration) -> Result<()> {
        if self.is_running() {
            return Err(FightError::AlreadyRunning);
        }
        check_period(period)?;
        tracing::info!("Tick loop started ({} ms)", period.as_millis());
        *self = TickLoop::Running(TickTimer::new(period));
        Ok(())
    }

    /// Cancel the active timer
    pub fn stop(&mut self) -> Result<()> {
        match std::mem::take(self) {
            TickLoop::Running(_) => {
                tracing::info!("Tick loop stopped");
                Ok(())
            }
            TickLoop::Stopped => Err(FightError::NotRunning),
        }
    }

    /// Stop then start with a new period. Pending ticks of the old timer are
    /// discarded rather than rescheduled. A rejected period leaves the old
    /// timer running.
    pub fn restart(&mut self, period: Duration) -> Result<()> {
        check_period(period)?;
        self.stop()?;
        self.start(period)
    }

    /// Resolves at the next tick. Never resolves while stopped.
    pub async fn next_tick(&mut self) {
        match self {
            TickLoop::Running(timer) => {
                timer.interval.tick().await;
            }
            TickLoop::Stopped => std::future::pending::<()>().await,
        }
    }
}

fn check_period(period: Duration) -> Result<()> {
    if period.is_zero() {
        return Err(FightError::InvalidSpeed("tick period must be non-zero".into()));
    }
    Ok(())
}
