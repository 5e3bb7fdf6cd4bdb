//! Bot-side fixture for the line-based bot/engine protocol
//!
//! Answers `hello` with `hello back`; every other line is logged and ignored.

pub mod bot;

pub use bot::{BotCommand, BotConfig, HelloBot};
