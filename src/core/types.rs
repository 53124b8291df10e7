//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

use crate::combat::constants::{BASE_TICK_MS, SPEED_CEILING, SPEED_FLOOR};
use crate::core::config::SpeedBounds;
use crate::core::error::{FightError, Result};

/// Tick counter (one tick = one combat-advance step)
pub type Tick = u64;

/// Game speed multiplier. A speed of 1.0 ticks once per second.
///
/// Only constructible through validation, so a `GameSpeed` always lies in
/// `[SPEED_FLOOR, SPEED_CEILING]` and its tick period is a non-zero duration.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct GameSpeed(f64);

impl GameSpeed {
    /// Normal speed
    pub const NORMAL: GameSpeed = GameSpeed(1.0);

    /// Validate a speed against the allowed bounds
    pub fn new(value: f64, bounds: SpeedBounds) -> Result<Self> {
        let speed = Self::try_from(value)?;
        if !bounds.contains(value) {
            return Err(FightError::InvalidSpeed(format!(
                "{} is outside [{}, {}]",
                value, bounds.min, bounds.max
            )));
        }
        Ok(speed)
    }

    /// Parse raw user input (e.g. the contents of a speed field)
    pub fn parse(input: &str, bounds: SpeedBounds) -> Result<Self> {
        let trimmed = input.trim();
        let value: f64 = trimmed
            .parse()
            .map_err(|_| FightError::InvalidSpeed(format!("'{}' is not a number", trimmed)))?;
        Self::new(value, bounds)
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    /// Interval between ticks: `BASE_TICK_MS / speed`, rounded to the
    /// nearest microsecond
    pub fn tick_period(&self) -> Duration {
        let micros = (BASE_TICK_MS as f64 * 1000.0 / self.0).round();
        Duration::from_micros(micros as u64)
    }
}

impl Default for GameSpeed {
    fn default() -> Self {
        Self::NORMAL
    }
}

impl TryFrom<f64> for GameSpeed {
    type Error = FightError;

    /// Checks the hard speed limits only; `GameSpeed::new` adds the
    /// configured bounds on top.
    fn try_from(value: f64) -> Result<Self> {
        if !value.is_finite() || value <= 0.0 {
            return Err(FightError::InvalidSpeed(format!(
                "{} is not a positive number",
                value
            )));
        }
        if !(SPEED_FLOOR..=SPEED_CEILING).contains(&value) {
            return Err(FightError::InvalidSpeed(format!(
                "{} is outside the supported range [{}, {}]",
                value, SPEED_FLOOR, SPEED_CEILING
            )));
        }
        Ok(Self(value))
    }
}

impl From<GameSpeed> for f64 {
    fn from(speed: GameSpeed) -> f64 {
        speed.0
    }
}

impl fmt::Display for GameSpeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normal_speed_ticks_every_second() {
        assert_eq!(GameSpeed::NORMAL.tick_period(), Duration::from_millis(1000));
    }

    #[test]
    fn test_double_speed_halves_period() {
        let speed = GameSpeed::new(2.0, SpeedBounds::default()).unwrap();
        assert_eq!(speed.tick_period(), Duration::from_millis(500));
    }

    #[test]
    fn test_rejects_non_positive() {
        let bounds = SpeedBounds::default();
        assert!(GameSpeed::new(0.0, bounds).is_err());
        assert!(GameSpeed::new(-1.0, bounds).is_err());
        assert!(GameSpeed::new(f64::NAN, bounds).is_err());
        assert!(GameSpeed::new(f64::INFINITY, bounds).is_err());
    }

    #[test]
    fn test_rejects_out_of_bounds() {
        let bounds = SpeedBounds::default();
        assert!(GameSpeed::new(0.05, bounds).is_err());
        assert!(GameSpeed::new(5.5, bounds).is_err());
        assert!(GameSpeed::new(0.1, bounds).is_ok());
        assert!(GameSpeed::new(5.0, bounds).is_ok());
    }

    #[test]
    fn test_extreme_speeds_rejected_even_with_wide_bounds() {
        let wide = SpeedBounds {
            min: 1e-300,
            max: 1e12,
        };
        assert!(GameSpeed::new(1e-300, wide).is_err());
        assert!(GameSpeed::new(1e10, wide).is_err());
        assert!(GameSpeed::try_from(1e-300).is_err());
    }

    #[test]
    fn test_speed_limits_give_representable_periods() {
        let floor = GameSpeed::try_from(SPEED_FLOOR).unwrap();
        let ceiling = GameSpeed::try_from(SPEED_CEILING).unwrap();
        assert_eq!(floor.tick_period(), Duration::from_secs(1000));
        assert_eq!(ceiling.tick_period(), Duration::from_millis(1));
    }

    #[test]
    fn test_period_rounds_to_microseconds() {
        let speed = GameSpeed::new(3.0, SpeedBounds::default()).unwrap();
        assert_eq!(speed.tick_period(), Duration::from_micros(333_333));
    }

    #[test]
    fn test_deserialize_checks_speed_limits() {
        let speed: GameSpeed = serde_json::from_str("2.0").unwrap();
        assert_eq!(speed.value(), 2.0);
        assert!(serde_json::from_str::<GameSpeed>("1e-300").is_err());
    }

    #[test]
    fn test_parse_input() {
        let bounds = SpeedBounds::default();
        assert_eq!(GameSpeed::parse(" 2.5 ", bounds).unwrap().value(), 2.5);
        assert!(matches!(
            GameSpeed::parse("fast", bounds),
            Err(FightError::InvalidSpeed(_))
        ));
        assert!(GameSpeed::parse("", bounds).is_err());
    }
}
