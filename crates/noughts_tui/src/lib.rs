//! Terminal front-end for the noughts engine.
//!
//! Renders the board with ratatui, turns key presses into moves, and runs the
//! deferred work the engine asks for (the computer's reply and the board reset
//! after a finished round) on tokio timers.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod app;
pub mod cli;
pub mod config;
pub mod input;
mod runner;
pub mod ui;

pub use app::{App, Deferred, EventLog};
pub use cli::Cli;
pub use config::{ConfigError, TuiConfig};
pub use runner::run;
