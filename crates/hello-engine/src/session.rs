//! Per-process session state

/// Bot identifier as sent by the harness (`bot <id>`)
pub type BotId = i64;

/// Where the session is in the usual initialize/start/bot/details order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// No `start` seen yet
    AwaitingStart,
    /// At least one round started, no winner yet
    RoundInProgress,
    /// A winner has been decided
    Ended,
}

/// Mutable state for one engine run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    winner: Option<BotId>,
    round: u32,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn winner(&self) -> Option<BotId> {
        self.winner
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    /// Advance to the next round, returning its number
    pub fn start_round(&mut self) -> u32 {
        self.round += 1;
        self.round
    }

    pub fn set_winner(&mut self, bot: BotId) {
        self.winner = Some(bot);
    }

    pub fn phase(&self) -> SessionPhase {
        match (self.winner, self.round) {
            (Some(_), _) => SessionPhase::Ended,
            (None, 0) => SessionPhase::AwaitingStart,
            (None, _) => SessionPhase::RoundInProgress,
        }
    }
}
