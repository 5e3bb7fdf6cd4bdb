//! Parsed input lines

use crate::error::{LineProtoError, Result};
use std::fmt;
use std::str::FromStr;

/// One input line split into a command name and positional arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    name: String,
    args: Vec<String>,
}

impl Command {
    /// Split a line on whitespace. Fails only when the line has no tokens.
    pub fn parse(line: &str) -> Result<Self> {
        let mut tokens = line.split_whitespace();
        let name = tokens.next().ok_or(LineProtoError::EmptyLine)?;

        Ok(Self {
            name: name.to_string(),
            args: tokens.map(str::to_string).collect(),
        })
    }

    /// Command name (first token)
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Remaining tokens, in order
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Positional argument, if present
    pub fn arg(&self, index: usize) -> Option<&str> {
        self.args.get(index).map(String::as_str)
    }

    /// Parse a positional argument as an integer
    pub fn int_arg(&self, index: usize) -> Result<i64> {
        let raw = self.arg(index).ok_or_else(|| {
            LineProtoError::invalid_arguments(&self.name, format!("missing argument {}", index))
        })?;

        raw.parse().map_err(|_| {
            LineProtoError::invalid_arguments(&self.name, format!("'{}' is not an integer", raw))
        })
    }

    /// Error for a name no handler is bound to
    pub fn unrecognized(&self) -> LineProtoError {
        LineProtoError::UnrecognizedCommand(self.name.clone())
    }
}

impl FromStr for Command {
    type Err = LineProtoError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}
