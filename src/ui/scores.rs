//! Top-scorer display hook
//!
//! Scores are produced elsewhere; this module only defines how a ranked
//! name -> score list reaches the display.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scorer {
    pub name: String,
    pub score: u64,
}

impl Scorer {
    pub fn new(name: impl Into<String>, score: u64) -> Self {
        Self {
            name: name.into(),
            score,
        }
    }
}

/// Supplies the ranked scorer list shown on each refresh
pub trait ScoreSource {
    /// Entries in display order
    fn top_scorers(&self) -> Vec<Scorer>;
}

/// No scoring system attached; the list stays empty
#[derive(Debug, Clone, Copy, Default)]
pub struct NoScores;

impl ScoreSource for NoScores {
    fn top_scorers(&self) -> Vec<Scorer> {
        Vec::new()
    }
}

/// A fixed list supplied by the host, shown as given
#[derive(Debug, Clone, Default)]
pub struct StaticScores(pub Vec<Scorer>);

impl ScoreSource for StaticScores {
    fn top_scorers(&self) -> Vec<Scorer> {
        self.0.clone()
    }
}
