//! In-process scenario runner
//!
//! Feeds a fixed list of lines to a protocol and records what happened, so a
//! bot or engine can be checked for basic responsiveness without a harness.
//!
//! Scenario format: a JSON array of lines.
//! - `action ...`: an ask. A trailing time on a three-token action
//!   (`action move 2000`) is dropped; bots get the scenario time bank appended
//!   instead. The subject must reply with at least one line.
//! - anything else: sent as-is, replies are optional
//! - blank lines are skipped

use crate::dispatch::dispatch;
use crate::protocol::LineProtocol;
use lineproto_core::{Reply, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

const ACTION_PREFIX: &str = "action";
const TIMEBANK_SETTING: &str = "timebank";

/// Time bank used when the scenario has no `settings timebank <ms>` line
pub const DEFAULT_TIMEBANK_MS: u64 = 2000;

/// Ordered list of lines to feed to a subject
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Scenario {
    lines: Vec<String>,
}

/// Which side of the protocol the subject plays
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubjectKind {
    /// Asks carry the remaining time bank as a last token
    Bot,
    /// Asks are sent unchanged
    Engine,
}

/// Outcome of a scenario run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScenarioStatus {
    Ok,
    Error,
}

/// What the subject saw and said
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SubjectReport {
    /// Sent lines and replies, one per line
    pub log: String,
    /// Diagnostics for lines the subject rejected
    pub errors: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioFailure {
    pub message: String,
}

/// Result of running a scenario
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioReport {
    pub status: ScenarioStatus,
    pub subject: SubjectReport,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ScenarioFailure>,
}

impl ScenarioReport {
    pub fn is_ok(&self) -> bool {
        self.status == ScenarioStatus::Ok
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl Scenario {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    /// Parse a scenario from a JSON array of strings
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Time bank from the first `<anything> timebank <ms>` line
    pub fn timebank(&self) -> u64 {
        let found = self.lines.iter().find_map(|line| {
            let mut tokens = line.split_whitespace().skip(1);
            match (tokens.next(), tokens.next()) {
                (Some(TIMEBANK_SETTING), Some(ms)) => ms.parse().ok(),
                _ => None,
            }
        });

        found.unwrap_or_else(|| {
            warn!(
                "No timebank in scenario, using {}ms",
                DEFAULT_TIMEBANK_MS
            );
            DEFAULT_TIMEBANK_MS
        })
    }

    /// Run every line against `protocol`, stopping at the first unanswered action
    pub fn run<P: LineProtocol>(&self, protocol: &mut P, kind: SubjectKind) -> ScenarioReport {
        let timebank = self.timebank();
        let mut subject = SubjectReport::default();

        for raw in &self.lines {
            let raw = raw.trim();
            if raw.is_empty() {
                continue;
            }

            let is_action = raw.split_whitespace().next() == Some(ACTION_PREFIX);
            let line = match (is_action, kind) {
                (true, SubjectKind::Bot) => format!("{} {}", strip_action_time(raw), timebank),
                (true, SubjectKind::Engine) => strip_action_time(raw),
                (false, _) => raw.to_string(),
            };

            subject.log.push_str(&line);
            subject.log.push('\n');

            let reply = match dispatch(protocol, &line) {
                Ok(reply) => reply,
                Err(e) if e.is_recoverable() => {
                    debug!("Scenario line rejected: {}", e);
                    subject.errors.push_str(&e.to_string());
                    subject.errors.push('\n');
                    Reply::none()
                }
                Err(e) => return failed(subject, e.to_string()),
            };

            if is_action && reply.is_empty() {
                warn!("{} gave no response to '{}'", protocol.name(), line);
                return failed(subject, format!("No response to '{}'", line));
            }

            for out in reply {
                subject
                    .log
                    .push_str(&format!("Output from subject: \"{}\"\n", out));
            }
        }

        ScenarioReport {
            status: ScenarioStatus::Ok,
            subject,
            error: None,
        }
    }
}

/// Drop the time from `action <name> <ms>`; any other shape is kept whole
fn strip_action_time(line: &str) -> String {
    let tokens: Vec<&str> = line.split_whitespace().collect();

    match tokens.as_slice() {
        [action, name, ms] if ms.parse::<i64>().is_ok() => format!("{} {}", action, name),
        _ => line.to_string(),
    }
}

fn failed(subject: SubjectReport, message: String) -> ScenarioReport {
    ScenarioReport {
        status: ScenarioStatus::Error,
        subject,
        error: Some(ScenarioFailure { message }),
    }
}
