//! Bot side of the line protocol

use lineproto_core::{Command, Reply, Result};
use lineproto_server::LineProtocol;
use tracing::debug;

/// Configuration for the hello bot
#[derive(Debug, Clone)]
pub struct BotConfig {
    /// Command name the bot answers (default: hello)
    pub greeting: String,
    /// Line sent back for the greeting (default: hello back)
    pub reply: String,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            greeting: "hello".into(),
            reply: "hello back".into(),
        }
    }
}

/// Commands the bot understands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BotCommand {
    /// Greeting; trailing arguments (e.g. a time bank) are ignored
    Hello,
}

impl BotCommand {
    fn parse(command: &Command, config: &BotConfig) -> Result<Self> {
        if command.name() == config.greeting {
            Ok(BotCommand::Hello)
        } else {
            Err(command.unrecognized())
        }
    }
}

/// Bot that answers a greeting and nothing else
#[derive(Debug, Default)]
pub struct HelloBot {
    config: BotConfig,
}

impl HelloBot {
    pub fn new() -> Self {
        Self::with_config(BotConfig::default())
    }

    pub fn with_config(config: BotConfig) -> Self {
        Self { config }
    }
}

impl LineProtocol for HelloBot {
    fn name(&self) -> &'static str {
        "bot"
    }

    fn handle(&mut self, command: Command) -> Result<Reply> {
        match BotCommand::parse(&command, &self.config)? {
            BotCommand::Hello => {
                debug!("Greeting received with args {:?}", command.args());
                Ok(Reply::line(self.config.reply.clone()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lineproto_core::LineProtoError;
    use lineproto_server::{LineServer, Scenario, SubjectKind, dispatch};

    #[test]
    fn test_hello() {
        let mut bot = HelloBot::new();
        let reply = dispatch(&mut bot, "hello").unwrap();
        assert_eq!(reply.lines(), ["hello back"]);
    }

    #[test]
    fn test_hello_with_timebank() {
        let mut bot = HelloBot::new();
        let reply = dispatch(&mut bot, "hello 1000").unwrap();
        assert_eq!(reply.lines(), ["hello back"]);
    }

    #[test]
    fn test_unknown_command() {
        let mut bot = HelloBot::new();
        assert!(matches!(
            dispatch(&mut bot, "settings timebank 1000"),
            Err(LineProtoError::UnrecognizedCommand(_))
        ));
        assert!(matches!(
            dispatch(&mut bot, "Hello"),
            Err(LineProtoError::UnrecognizedCommand(_))
        ));
    }

    #[test]
    fn test_custom_config() {
        let mut bot = HelloBot::with_config(BotConfig {
            greeting: "ping".into(),
            reply: "pong".into(),
        });
        assert_eq!(dispatch(&mut bot, "ping").unwrap().lines(), ["pong"]);
        assert!(dispatch(&mut bot, "hello").is_err());
    }

    #[tokio::test]
    async fn test_session_over_streams() {
        let input = b"settings timebank 1000\n\nhello\nbot 0 ask hello\nhello 980\n";
        let mut out = Vec::new();
        let mut server = LineServer::new(HelloBot::new());

        server.run(&input[..], &mut out).await.unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "hello back\nhello back\n");
    }

    #[tokio::test]
    async fn test_no_input_no_output() {
        let mut out = Vec::new();
        let mut server = LineServer::new(HelloBot::new());

        server.run(&b""[..], &mut out).await.unwrap();

        assert!(out.is_empty());
    }

    #[test]
    fn test_input_scenario() {
        let scenario = Scenario::new([
            "settings player_names player0",
            "settings timebank 2000",
            "hello",
        ]);
        let report = scenario.run(&mut HelloBot::new(), SubjectKind::Bot);

        assert!(report.is_ok());
        assert!(report.subject.log.ends_with("hello\nOutput from subject: \"hello back\"\n"));
        assert_eq!(report.subject.errors.lines().count(), 2);
    }

    #[test]
    fn test_action_line_is_not_a_greeting() {
        let scenario = Scenario::new(["settings timebank 2000", "action hello 2000"]);
        let report = scenario.run(&mut HelloBot::new(), SubjectKind::Bot);

        assert!(!report.is_ok());
        assert_eq!(
            report.subject.log,
            "settings timebank 2000\naction hello 2000\n"
        );
        assert_eq!(
            report.error.unwrap().message,
            "No response to 'action hello 2000'"
        );
    }
}
