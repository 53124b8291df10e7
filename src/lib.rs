//! Fight Controller - combat tick loop driven by a command-based controller

pub mod combat;
pub mod command;
pub mod core;
pub mod simulation;
pub mod ui;
