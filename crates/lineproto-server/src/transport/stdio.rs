//! stdio transport for the line protocol

use crate::dispatch::dispatch;
use crate::protocol::LineProtocol;
use lineproto_core::{LineProtoError, Reply, Result};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tracing::{debug, info, warn};

/// Run a protocol on the process's stdin/stdout until stdin is closed
pub async fn run<P: LineProtocol>(protocol: &mut P) -> Result<()> {
    let reader = BufReader::new(tokio::io::stdin());
    let writer = tokio::io::stdout();

    info!("{} starting on stdio", protocol.name());

    serve(protocol, reader, writer).await
}

/// Read lines from `reader`, dispatch them and write replies to `writer`.
///
/// Returns `Ok(())` on end-of-stream. Only stream failures end the loop early;
/// per-line errors are logged and skipped.
pub async fn serve<P, R, W>(protocol: &mut P, mut reader: R, mut writer: W) -> Result<()>
where
    P: LineProtocol,
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut buf = Vec::new();

    loop {
        buf.clear();
        let bytes_read = reader
            .read_until(b'\n', &mut buf)
            .await
            .map_err(|e| LineProtoError::IoError(format!("Failed to read input: {}", e)))?;

        if bytes_read == 0 {
            info!("{} input closed (EOF)", protocol.name());
            break;
        }

        let line = String::from_utf8_lossy(&buf);

        match dispatch(protocol, line.trim()) {
            Ok(reply) => write_reply(&mut writer, reply).await?,
            Err(e) if e.is_recoverable() => warn!("{}", e),
            Err(e) => return Err(e),
        }
    }

    protocol.shutdown();

    Ok(())
}

async fn write_reply<W: AsyncWrite + Unpin>(writer: &mut W, reply: Reply) -> Result<()> {
    for line in reply {
        debug!("Sending: {}", line);

        writer
            .write_all(line.as_bytes())
            .await
            .map_err(|e| LineProtoError::IoError(format!("Failed to write output: {}", e)))?;
        writer
            .write_all(b"\n")
            .await
            .map_err(|e| LineProtoError::IoError(format!("Failed to write newline: {}", e)))?;
        writer
            .flush()
            .await
            .map_err(|e| LineProtoError::IoError(format!("Failed to flush output: {}", e)))?;
    }

    Ok(())
}
