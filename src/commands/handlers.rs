use super::parser::{emote_args, is_decimal, team_code};
use super::types::{Command, CommandResult};
use crate::config::IdentityConfig;
use crate::error::CommandError;

pub const HELP_TEXT: &str = "\
🤖 EMOTE BOT - Available Commands:

🎭 EMOTES:
  !e [UID] [EMOTE_ID] - Perform emote on player
  Example: !e 123456789 909000001

🎯 TEAM:
  /x/ [TEAM_CODE] - Bot join your team
  Example: /x/ ABC123

👥 SQUAD:
  /5 - Create 5-player squad
  /solo - Leave current squad
  /s - Start matchmaking

📞 HELP:
  /help - Show this message
";

/// Help reply: the command list followed by where the bot runs and who runs it.
pub fn help_text(identity: &IdentityConfig) -> String {
    format!(
        "{HELP_TEXT}\n🌐 Platform: {} + {}\n👨‍💻 Developer: {}\n",
        identity.website, identity.platform, identity.developer
    )
}

pub fn handle_command(
    command: Command,
    input: &str,
    identity: &IdentityConfig,
) -> CommandResult {
    let outcome = match command {
        Command::Emote => handle_emote(input),
        Command::TeamJoin => handle_team_join(input),
        Command::SquadCreate => Ok(handle_squad_create()),
        Command::SquadLeave => Ok(handle_squad_leave()),
        Command::Matchmaking => Ok(handle_matchmaking()),
        Command::Help => Ok(help_text(identity)),
        Command::Unknown => Err(CommandError::Unknown(input.to_string())),
    };
    CommandResult::from_outcome(command, outcome)
}

/// `!e <UID> <EMOTE_ID>`. Stand-in until a game client is wired up.
pub fn handle_emote(input: &str) -> Result<String, CommandError> {
    let args = emote_args(input).ok_or(CommandError::InvalidFormat)?;
    if !is_decimal(args.uid) {
        return Err(CommandError::InvalidUid);
    }
    if !is_decimal(args.emote_id) {
        return Err(CommandError::InvalidEmoteId);
    }

    tracing::info!(
        emote_id = args.emote_id,
        uid = args.uid,
        "🎭 executing emote"
    );
    Ok(format!(
        "✅ Emote {} executed on player: {}",
        args.emote_id, args.uid
    ))
}

pub fn handle_team_join(input: &str) -> Result<String, CommandError> {
    let code = team_code(input);
    if code.is_empty() {
        return Err(CommandError::MissingTeamCode);
    }

    tracing::info!(team_code = code, "🎯 joining team");
    Ok(format!("✅ Joining team with code: {code}"))
}

fn handle_squad_create() -> String {
    tracing::info!("👥 creating 5-player squad");
    "✅ 5-player squad created successfully".to_string()
}

fn handle_squad_leave() -> String {
    tracing::info!("🚪 leaving squad");
    "✅ Left current squad".to_string()
}

fn handle_matchmaking() -> String {
    tracing::info!("🎮 starting matchmaking");
    "✅ Matchmaking started".to_string()
}
