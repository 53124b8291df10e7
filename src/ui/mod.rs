//! UI module - controller state and text display

pub mod display;
pub mod scores;
pub mod state;

pub use display::{render_panel, FnSink, RefreshSink};
pub use scores::{NoScores, ScoreSource, Scorer, StaticScores};
pub use state::{Controller, UiEvent};
