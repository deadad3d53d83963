//! The session timer core.
//!
//! A single countdown state machine plus a persistence port:
//! - Start/pause/stop a topic-labeled countdown
//! - Natural completion appends an immutable session record
//! - Append-only history persisted as one JSON document

pub mod engine;
pub mod session;
pub mod store;

pub use engine::{Engine, TimerState, DEFAULT_COUNTDOWN_SECONDS};
pub use session::{format_duration, format_duration_mmss, Session};
pub use store::{serialize_history, HistoryStore, JsonHistoryStore};
