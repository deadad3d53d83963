//! Configuration management for pomogo.
//!
//! This module handles loading configuration from `~/.pomogo/`.

mod paths;
mod settings;

pub use paths::Paths;
pub use settings::{Config, GeneralConfig, Theme, TimerConfig};
