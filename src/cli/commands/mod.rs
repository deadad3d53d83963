//! Command implementations for pomogo.
//!
//! Each function executes one subcommand and returns its output as a
//! string; `main` decides whether to print it.

mod history;
mod social;
mod timer;

pub use history::{clear, export, history};
pub use social::social;
pub use timer::timer;
