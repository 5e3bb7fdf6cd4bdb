//! # lineproto-core
//!
//! Core types for the line-based bot/engine text protocol.
//!
//! This crate provides the types shared by every protocol implementation:
//! - Parsed commands (name + positional arguments)
//! - Handler replies (zero or more output lines)
//! - Error kinds, split into recoverable and fatal

pub mod command;
pub mod error;
pub mod reply;

pub use command::Command;
pub use error::{LineProtoError, Result};
pub use reply::Reply;
