//! Line -> command -> handler dispatch

use crate::protocol::LineProtocol;
use lineproto_core::{Command, Reply, Result};
use tracing::info;

/// Parse a trimmed line and hand it to the protocol's handler
///
/// Every line is echoed to the diagnostic stream at info level.
pub fn dispatch<P: LineProtocol>(protocol: &mut P, line: &str) -> Result<Reply> {
    info!("{} received: {}", protocol.name(), line);

    let command = Command::parse(line)?;
    protocol.handle(command)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lineproto_core::LineProtoError;
    use std::io;
    use std::sync::{Arc, Mutex};
    use tracing::Level;
    use tracing_subscriber::FmtSubscriber;

    #[derive(Clone, Default)]
    struct CapturedLog(Arc<Mutex<Vec<u8>>>);

    impl io::Write for CapturedLog {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    struct Echo {
        seen: Vec<String>,
    }

    impl LineProtocol for Echo {
        fn name(&self) -> &'static str {
            "echo"
        }

        fn handle(&mut self, command: Command) -> Result<Reply> {
            self.seen.push(command.to_string());
            match command.name() {
                "echo" => Ok(command.args().iter().cloned().collect()),
                _ => Err(command.unrecognized()),
            }
        }
    }

    #[test]
    fn test_dispatch_forwards_args() {
        let mut proto = Echo { seen: Vec::new() };
        let reply = dispatch(&mut proto, "echo a b").unwrap();
        assert_eq!(reply.lines(), ["a", "b"]);
        assert_eq!(proto.seen, ["echo a b"]);
    }

    #[test]
    fn test_empty_line_never_reaches_handler() {
        let mut proto = Echo { seen: Vec::new() };
        assert!(matches!(
            dispatch(&mut proto, ""),
            Err(LineProtoError::EmptyLine)
        ));
        assert!(proto.seen.is_empty());
    }

    #[test]
    fn test_unknown_command() {
        let mut proto = Echo { seen: Vec::new() };
        match dispatch(&mut proto, "shout x") {
            Err(LineProtoError::UnrecognizedCommand(name)) => assert_eq!(name, "shout"),
            other => panic!("Expected unrecognized command, got {:?}", other),
        }
    }

    #[test]
    fn test_received_line_logged_at_info() {
        let log = CapturedLog::default();
        let writer = log.clone();
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::INFO)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();

        let mut proto = Echo { seen: Vec::new() };
        tracing::subscriber::with_default(subscriber, || {
            dispatch(&mut proto, "echo hi").unwrap();
            let _ = dispatch(&mut proto, "shout");
        });

        let text = String::from_utf8(log.0.lock().unwrap().clone()).unwrap();
        assert!(text.contains("INFO"));
        assert!(text.contains("echo received: echo hi"));
        assert!(text.contains("echo received: shout"));
    }
}
