//! Engine-side fixture for the line-based bot/engine protocol
//!
//! This crate provides:
//! - `HelloEngine`, a `LineProtocol` that runs a one-round game against bot 0
//! - Explicit session state (winner, round number)
//! - Engine configuration for the settings sent on `start`

pub mod config;
pub mod engine;
pub mod session;

pub use config::EngineConfig;
pub use engine::{EngineCommand, HelloEngine};
pub use session::{BotId, SessionPhase, SessionState};
