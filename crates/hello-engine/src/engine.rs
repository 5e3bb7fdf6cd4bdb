//! Engine side of the line protocol

use crate::config::EngineConfig;
use crate::session::{BotId, SessionPhase, SessionState};
use lineproto_core::{Command, Reply, Result};
use lineproto_server::LineProtocol;
use tracing::{debug, info, warn};

/// Commands the engine understands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineCommand {
    /// Harness handshake, answered with `ok`
    Initialize,
    /// Begin a round
    Start,
    /// Report winner and round number
    Details,
    /// Report the played game
    Game,
    /// Bot ids of this match, e.g. `bot_ids 0,1`
    BotIds(Vec<String>),
    /// Engine configuration blob
    Configuration(Vec<String>),
    /// A bot's answer to an ask
    Bot { id: BotId, args: Vec<String> },
}

impl TryFrom<Command> for EngineCommand {
    type Error = lineproto_core::LineProtoError;

    fn try_from(command: Command) -> Result<Self> {
        let parsed = match command.name() {
            "initialize" => EngineCommand::Initialize,
            "start" => EngineCommand::Start,
            "details" => EngineCommand::Details,
            "game" => EngineCommand::Game,
            "bot_ids" => EngineCommand::BotIds(command.args().to_vec()),
            "configuration" => EngineCommand::Configuration(command.args().to_vec()),
            "bot" => EngineCommand::Bot {
                id: command.int_arg(0)?,
                args: command.args()[1..].to_vec(),
            },
            _ => return Err(command.unrecognized()),
        };

        Ok(parsed)
    }
}

/// Engine that declares bot 0 the winner as soon as it answers
#[derive(Debug, Default)]
pub struct HelloEngine {
    config: EngineConfig,
    session: SessionState,
}

impl HelloEngine {
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            config,
            session: SessionState::new(),
        }
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    fn initialize(&self) -> Reply {
        Reply::line("ok")
    }

    fn start(&mut self) -> Reply {
        let round = self.session.start_round();
        info!("Round {} started", round);
        self.config.start_lines().into_iter().collect()
    }

    fn handle_bot(&mut self, id: BotId, args: &[String]) -> Reply {
        debug!("Bot {} answered {:?}", id, args);

        if self.session.phase() == SessionPhase::AwaitingStart {
            warn!("Answer from bot {} before any round started", id);
        }

        if id == 0 {
            self.session.set_winner(id);
            return self.end();
        }

        Reply::none()
    }

    fn end(&self) -> Reply {
        info!(
            "Game ended, winner {:?} in round {}",
            self.session.winner(),
            self.session.round()
        );
        Reply::line("end")
    }

    fn details(&self) -> Reply {
        Reply::line(format!(
            "winner {} round {}",
            self.session
                .winner()
                .map(|w| w.to_string())
                .unwrap_or_default(),
            self.session.round()
        ))
    }

    fn game(&self) -> Result<Reply> {
        let winner = serde_json::to_string(&self.session.winner())?;
        Ok(Reply::line(format!("{{\"winner\": {}}}", winner)))
    }
}

impl LineProtocol for HelloEngine {
    fn name(&self) -> &'static str {
        "engine"
    }

    fn handle(&mut self, command: Command) -> Result<Reply> {
        match EngineCommand::try_from(command)? {
            EngineCommand::Initialize => Ok(self.initialize()),
            EngineCommand::Start => Ok(self.start()),
            EngineCommand::Details => Ok(self.details()),
            EngineCommand::Game => self.game(),
            EngineCommand::BotIds(ids) => {
                debug!("Bot ids: {:?}", ids);
                Ok(Reply::none())
            }
            EngineCommand::Configuration(config) => {
                debug!("Configuration: {}", config.join(" "));
                Ok(Reply::none())
            }
            EngineCommand::Bot { id, args } => Ok(self.handle_bot(id, &args)),
        }
    }

    fn shutdown(&mut self) {
        if self.session.phase() != SessionPhase::Ended {
            info!("Input closed before a winner was decided");
        }
    }
}
