//! pomogo - A Pomodoro session timer for the terminal
//!
//! This crate provides a topic-labeled 25-minute countdown with an
//! append-only, JSON-persisted history of completed sessions.

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod social;
pub mod timer;
pub mod tui;

pub use cli::args::{Cli, Commands, OutputFormat};
pub use error::PomogoError;
pub use timer::{Engine, HistoryStore, JsonHistoryStore, Session};
