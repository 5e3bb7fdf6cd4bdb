//! Line protocol trait

use lineproto_core::{Command, Reply, Result};

/// Trait for implementing one side of the line protocol
///
/// Implement this trait to expose a bot or an engine over a line stream.
/// The implementor owns all session state; handlers get it through `&mut self`.
pub trait LineProtocol: Send + 'static {
    /// Short name used in diagnostics
    fn name(&self) -> &'static str;

    /// Handle one parsed command and return the lines to write.
    ///
    /// Recoverable errors (unknown command, bad arguments) are logged by the
    /// caller and the session continues.
    fn handle(&mut self, command: Command) -> Result<Reply>;

    /// Called once when the input stream is closed
    fn shutdown(&mut self) {}
}
