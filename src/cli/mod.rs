//! Command-line interface for pomogo.

pub mod args;
pub mod commands;
