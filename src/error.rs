use thiserror::Error;

// ─── Top-level error hierarchy ───────────────────────────────────────────────

/// Structured error hierarchy for `emotebot`.
///
/// Command and request errors never escape the gateway: they are rendered
/// into the JSON envelope. Bootstrap code uses `anyhow::Result` for context
/// chains and converts into this type at the library boundary.
#[derive(Debug, Error)]
pub enum BotError {
    // ── Config ───────────────────────────────────────────────────────────
    #[error("config: {0}")]
    Config(#[from] ConfigError),

    // ── Command grammar / validation ────────────────────────────────────
    #[error("command: {0}")]
    Command(#[from] CommandError),

    // ── Inbound request envelope ────────────────────────────────────────
    #[error("request: {0}")]
    Request(#[from] RequestError),

    // ── Generic fallthrough (wraps anyhow for interop) ──────────────────
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

// ─── Config errors ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load config: {0}")]
    Load(String),

    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

// ─── Command errors ─────────────────────────────────────────────────────────

/// Failures produced by a command handler. The `Display` text is what the
/// caller sees in the `result` field, minus the status marker.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("Invalid format. Use: !e [UID] [EMOTE_ID]")]
    InvalidFormat,

    #[error("Invalid UID format")]
    InvalidUid,

    #[error("Invalid Emote ID format")]
    InvalidEmoteId,

    #[error("Please provide team code")]
    MissingTeamCode,

    #[error("Unknown command: {0}")]
    Unknown(String),
}

impl CommandError {
    /// Marker prefixed to the rendered message.
    pub fn marker(&self) -> &'static str {
        match self {
            Self::Unknown(_) => "❓",
            _ => "❌",
        }
    }

    pub fn render(&self) -> String {
        format!("{} {self}", self.marker())
    }
}

// ─── Request errors ─────────────────────────────────────────────────────────

/// Problems with the `/execute` request envelope itself.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    #[error("No JSON data received")]
    MalformedRequest,

    #[error("No command provided")]
    EmptyCommand,

    #[error("Server error: field `{0}` must be a string")]
    InvalidField(&'static str),
}

impl RequestError {
    pub fn render(&self) -> String {
        format!("❌ {self}")
    }
}

// ─── Convenience re-exports ─────────────────────────────────────────────────

/// Shorthand result type for the crate.
pub type Result<T> = std::result::Result<T, BotError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_displays_correctly() {
        let err = BotError::Config(ConfigError::Load("bad toml".into()));
        assert!(err.to_string().contains("bad toml"));
    }

    #[test]
    fn anyhow_interop() {
        let anyhow_err = anyhow::anyhow!("something went wrong");
        let bot_err: BotError = anyhow_err.into();
        assert!(bot_err.to_string().contains("something went wrong"));
    }

    #[test]
    fn unknown_command_uses_question_marker() {
        let err = CommandError::Unknown("/dance".into());
        assert_eq!(err.render(), "❓ Unknown command: /dance");
    }

    #[test]
    fn validation_errors_use_cross_marker() {
        assert_eq!(CommandError::InvalidUid.render(), "❌ Invalid UID format");
        assert_eq!(
            CommandError::InvalidEmoteId.render(),
            "❌ Invalid Emote ID format"
        );
        assert_eq!(
            CommandError::MissingTeamCode.render(),
            "❌ Please provide team code"
        );
    }

    #[test]
    fn request_errors_render_with_marker() {
        assert_eq!(
            RequestError::EmptyCommand.render(),
            "❌ No command provided"
        );
        assert_eq!(
            RequestError::MalformedRequest.render(),
            "❌ No JSON data received"
        );
    }
}
