//! Engine configuration

/// Settings broadcast by the engine when a round starts
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Time bank sent to all bots, in milliseconds (default: 1000)
    pub timebank_ms: u64,
    /// Initial field contents (default: 0,0,0,1)
    pub field: String,
    /// Name of the player bot 0 plays as (default: player1)
    pub player_name: String,
    /// Starting points (default: 0)
    pub starting_points: i64,
    /// What bot 0 is asked for (default: hello)
    pub ask: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            timebank_ms: 1000,
            field: "0,0,0,1".into(),
            player_name: "player1".into(),
            starting_points: 0,
            ask: "hello".into(),
        }
    }
}

impl EngineConfig {
    /// Lines written to the harness on `start`
    pub fn start_lines(&self) -> [String; 4] {
        [
            format!("bot all send settings timebank {}", self.timebank_ms),
            format!("bot 0 send update game field {}", self.field),
            format!(
                "bot 0 send update {} points {}",
                self.player_name, self.starting_points
            ),
            format!("bot 0 ask {}", self.ask),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_start_lines() {
        assert_eq!(
            EngineConfig::default().start_lines(),
            [
                "bot all send settings timebank 1000",
                "bot 0 send update game field 0,0,0,1",
                "bot 0 send update player1 points 0",
                "bot 0 ask hello",
            ]
        );
    }
}
