//! # lineproto-server
//!
//! Read-dispatch-reply loop for the line-based bot/engine protocol.
//!
//! This crate provides:
//! - `LineProtocol` trait for implementing a bot or an engine
//! - Command dispatch from trimmed lines to handlers
//! - stdio transport (and a generic reader/writer variant for tests)
//! - In-process scenario runner

pub mod dispatch;
pub mod protocol;
pub mod scenario;
pub mod transport;

pub use dispatch::dispatch;
pub use protocol::LineProtocol;
pub use scenario::{Scenario, ScenarioReport, ScenarioStatus, SubjectKind};

use lineproto_core::Result;
use tokio::io::{AsyncBufRead, AsyncWrite};

/// Line protocol server owning one protocol session
pub struct LineServer<P: LineProtocol> {
    protocol: P,
}

impl<P: LineProtocol> LineServer<P> {
    /// Create a new server around the given protocol
    pub fn new(protocol: P) -> Self {
        Self { protocol }
    }

    /// Run the server on stdio transport
    pub async fn run_stdio(mut self) -> Result<()> {
        transport::stdio::run(&mut self.protocol).await
    }

    /// Run the server on arbitrary streams until the reader is exhausted
    pub async fn run<R, W>(&mut self, reader: R, writer: W) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        transport::stdio::serve(&mut self.protocol, reader, writer).await
    }

    /// Take the protocol back, with its session state
    pub fn into_protocol(self) -> P {
        self.protocol
    }
}
