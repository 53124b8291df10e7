//! Bounded battle log

use serde::Serialize;
use std::collections::VecDeque;

use crate::combat::constants::BATTLE_LOG_CAPACITY;

/// Ordered text log that evicts its oldest entry once full
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BattleLog {
    entries: VecDeque<String>,
    capacity: usize,
}

impl Default for BattleLog {
    fn default() -> Self {
        Self::with_capacity(BATTLE_LOG_CAPACITY)
    }
}

impl BattleLog {
    /// A capacity of zero is treated as one
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, message: impl Into<String>) {
        if self.entries.len() >= self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(message.into());
    }

    pub fn last(&self) -> Option<&str> {
        self.entries.back().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.entries.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
