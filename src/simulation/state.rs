//! Simulation state: player health, current target, battle log, game speed
//!
//! One instance is owned by the engine and handed by `&mut` to whatever
//! applies a command or runs a tick.

use crate::combat::{BattleLog, Combatant, DamageRoll, Roster};
use crate::core::config::FightConfig;
use crate::core::error::{FightError, Result};
use crate::core::types::GameSpeed;

/// Outcome of a single attack on the current target
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttackReport {
    pub target: String,
    pub damage: u32,
    pub remaining: u32,
    pub defeated: bool,
}

#[derive(Debug, Clone)]
pub struct SimulationState {
    player_health: u32,
    max_player_health: u32,
    heal_amount: u32,
    auto_heal_threshold: u32,
    /// Live copies of the roster; the roster itself is never mutated
    combatants: Vec<Combatant>,
    /// Index into `combatants`
    current_target: Option<usize>,
    game_speed: GameSpeed,
    battle_log: BattleLog,
}

impl SimulationState {
    /// Build a state from a validated config
    pub fn from_config(config: &FightConfig) -> Result<Self> {
        config.validate()?;
        let roster = Roster::from_config(&config.combatants);
        Ok(Self {
            player_health: config.initial_player_health,
            max_player_health: config.max_player_health,
            heal_amount: config.heal_amount,
            auto_heal_threshold: config.auto_heal_threshold,
            combatants: roster.iter().cloned().collect(),
            current_target: None,
            game_speed: config.initial_game_speed()?,
            battle_log: BattleLog::with_capacity(config.log_capacity),
        })
    }

    pub fn player_health(&self) -> u32 {
        self.player_health
    }

    pub fn max_player_health(&self) -> u32 {
        self.max_player_health
    }

    /// Set player health directly (clamped to the max)
    pub fn set_player_health(&mut self, health: u32) {
        self.player_health = health.min(self.max_player_health);
    }

    pub fn heal_amount(&self) -> u32 {
        self.heal_amount
    }

    pub fn needs_auto_heal(&self) -> bool {
        self.player_health < self.auto_heal_threshold
    }

    pub fn current_target(&self) -> Option<&Combatant> {
        self.current_target.map(|idx| &self.combatants[idx])
    }

    pub fn combatant(&self, name: &str) -> Option<&Combatant> {
        self.combatants.iter().find(|c| c.name == name)
    }

    pub fn game_speed(&self) -> GameSpeed {
        self.game_speed
    }

    pub fn set_game_speed(&mut self, speed: GameSpeed) {
        tracing::info!("Game speed set to: {}", speed);
        self.game_speed = speed;
    }

    pub fn battle_log(&self) -> &BattleLog {
        &self.battle_log
    }

    /// Attack the current target with one damage roll.
    ///
    /// Without a target nothing changes and `None` is returned.
    pub fn attack(&mut self, damage: &mut impl DamageRoll) -> Option<AttackReport> {
        let Some(idx) = self.current_target else {
            tracing::debug!("No target selected!");
            return None;
        };

        let dealt = damage.roll();
        let target = &mut self.combatants[idx];
        tracing::info!("Attacking {} for {} damage!", target.name, dealt);
        let defeated = target.take_damage(dealt);
        let report = AttackReport {
            target: target.name.clone(),
            damage: dealt,
            remaining: target.health,
            defeated,
        };

        if defeated {
            tracing::info!("{} was defeated", report.target);
            self.battle_log.push(format!("{} was defeated!", report.target));
            self.current_target = None;
        }

        Some(report)
    }

    /// Heal the player, clamped to the max. Returns the new health.
    pub fn heal(&mut self, amount: u32) -> u32 {
        self.player_health = self
            .player_health
            .saturating_add(amount)
            .min(self.max_player_health);
        tracing::info!("Player healed! Health: {}", self.player_health);
        self.player_health
    }

    /// Select a living combatant as the current target
    pub fn set_target(&mut self, name: &str) -> Result<()> {
        let idx = self
            .combatants
            .iter()
            .position(|c| c.name == name)
            .ok_or_else(|| FightError::UnknownTarget(name.to_string()))?;

        if self.combatants[idx].is_defeated() {
            return Err(FightError::TargetDefeated(name.to_string()));
        }

        self.current_target = Some(idx);
        tracing::info!("Target set to {}", name);
        self.battle_log.push(format!("Target set to {}", name));
        Ok(())
    }
}
