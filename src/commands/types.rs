use crate::error::CommandError;
use serde::Serialize;

/// Classification of one inbound command string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Command {
    /// `!e <UID> <EMOTE_ID>`
    Emote,
    /// `/x/<TEAM_CODE>`
    TeamJoin,
    /// `/5`
    SquadCreate,
    /// `/solo`
    SquadLeave,
    /// `/s`
    Matchmaking,
    /// `/help` or `help`
    Help,
    Unknown,
}

impl Command {
    pub fn name(self) -> &'static str {
        match self {
            Self::Emote => "emote",
            Self::TeamJoin => "team_join",
            Self::SquadCreate => "squad_create",
            Self::SquadLeave => "squad_leave",
            Self::Matchmaking => "matchmaking",
            Self::Help => "help",
            Self::Unknown => "unknown",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    pub command: Command,
    pub text: String,
    pub ok: bool,
}

impl CommandResult {
    pub fn success(command: Command, text: impl Into<String>) -> Self {
        Self {
            command,
            text: text.into(),
            ok: true,
        }
    }

    pub fn failure(command: Command, error: &CommandError) -> Self {
        Self {
            command,
            text: error.render(),
            ok: false,
        }
    }

    pub fn from_outcome(command: Command, outcome: Result<String, CommandError>) -> Self {
        match outcome {
            Ok(text) => Self::success(command, text),
            Err(error) => Self::failure(command, &error),
        }
    }
}
