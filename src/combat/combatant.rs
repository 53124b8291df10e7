//! Combatants and the host-supplied roster

use serde::{Deserialize, Serialize};

use crate::core::config::CombatantConfig;

/// An entity with a name and health that can be targeted and defeated
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Combatant {
    pub name: String,
    pub health: u32,
}

impl Combatant {
    pub fn new(name: impl Into<String>, health: u32) -> Self {
        Self {
            name: name.into(),
            health,
        }
    }

    pub fn is_defeated(&self) -> bool {
        self.health == 0
    }

    /// Subtract damage (saturating at zero). Returns true if this hit defeated it.
    pub fn take_damage(&mut self, damage: u32) -> bool {
        let was_alive = !self.is_defeated();
        self.health = self.health.saturating_sub(damage);
        was_alive && self.is_defeated()
    }
}

impl From<&CombatantConfig> for Combatant {
    fn from(config: &CombatantConfig) -> Self {
        Self::new(config.name.clone(), config.health)
    }
}

/// Read-only list of targetable combatants, as given at initialization
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    entries: Vec<Combatant>,
}

impl Roster {
    pub fn new(entries: Vec<Combatant>) -> Self {
        Self { entries }
    }

    pub fn from_config(configs: &[CombatantConfig]) -> Self {
        Self::new(configs.iter().map(Combatant::from).collect())
    }

    /// Resolve a selection identifier (exact name match)
    pub fn find(&self, name: &str) -> Option<&Combatant> {
        self.entries.iter().find(|c| c.name == name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|c| c.name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Combatant> {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_take_damage_saturates() {
        let mut goblin = Combatant::new("Goblin", 8);
        assert!(goblin.take_damage(14));
        assert_eq!(goblin.health, 0);
        assert!(goblin.is_defeated());
    }

    #[test]
    fn test_defeat_reported_once() {
        let mut goblin = Combatant::new("Goblin", 5);
        assert!(goblin.take_damage(5));
        assert!(!goblin.take_damage(5));
    }

    #[test]
    fn test_roster_lookup() {
        let roster = Roster::from_config(&[
            CombatantConfig::new("Goblin", 30),
            CombatantConfig::new("Orc", 50),
        ]);
        assert_eq!(roster.find("Orc").map(|c| c.health), Some(50));
        assert!(roster.find("orc").is_none());
        assert_eq!(roster.names().collect::<Vec<_>>(), vec!["Goblin", "Orc"]);
    }
}
