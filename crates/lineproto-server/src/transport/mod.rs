//! Transports for the line protocol

pub mod stdio;
