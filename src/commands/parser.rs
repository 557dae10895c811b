use super::types::Command;

pub const EMOTE_PREFIX: &str = "!e";
pub const TEAM_JOIN_SEPARATOR: &str = "/x/";

/// Classify an already-trimmed command string. First match wins.
pub fn parse_command(input: &str) -> Command {
    if input.starts_with(EMOTE_PREFIX) {
        return Command::Emote;
    }
    if input.starts_with(TEAM_JOIN_SEPARATOR) {
        return Command::TeamJoin;
    }

    match input {
        "/5" => Command::SquadCreate,
        "/solo" => Command::SquadLeave,
        "/s" => Command::Matchmaking,
        "/help" | "help" => Command::Help,
        _ => Command::Unknown,
    }
}

/// Arguments of `!e <UID> <EMOTE_ID>`, still unvalidated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmoteArgs<'a> {
    pub uid: &'a str,
    pub emote_id: &'a str,
}

/// Split an emote command on whitespace. `None` when fewer than three tokens.
pub fn emote_args(input: &str) -> Option<EmoteArgs<'_>> {
    let mut parts = input.split_whitespace().skip(1);
    let uid = parts.next()?;
    let emote_id = parts.next()?;
    Some(EmoteArgs { uid, emote_id })
}

/// Trimmed text after the first `/x/`. Empty when nothing follows.
pub fn team_code(input: &str) -> &str {
    input
        .split_once(TEAM_JOIN_SEPARATOR)
        .map_or("", |(_, rest)| rest.trim())
}

pub fn is_decimal(token: &str) -> bool {
    !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emote_prefix() {
        assert_eq!(parse_command("!e 123 456"), Command::Emote);
    }

    #[test]
    fn emote_prefix_matches_longer_words() {
        assert_eq!(parse_command("!emote"), Command::Emote);
    }

    #[test]
    fn team_join_prefix() {
        assert_eq!(parse_command("/x/ABC123"), Command::TeamJoin);
    }

    #[test]
    fn squad_commands_are_exact() {
        assert_eq!(parse_command("/5"), Command::SquadCreate);
        assert_eq!(parse_command("/solo"), Command::SquadLeave);
        assert_eq!(parse_command("/s"), Command::Matchmaking);
        assert_eq!(parse_command("/5 now"), Command::Unknown);
        assert_eq!(parse_command("/solo2"), Command::Unknown);
    }

    #[test]
    fn help_aliases() {
        assert_eq!(parse_command("/help"), Command::Help);
        assert_eq!(parse_command("help"), Command::Help);
        assert_eq!(parse_command("HELP"), Command::Unknown);
    }

    #[test]
    fn plain_text_is_unknown() {
        assert_eq!(parse_command("hello"), Command::Unknown);
    }

    #[test]
    fn empty_input_is_unknown() {
        assert_eq!(parse_command(""), Command::Unknown);
    }

    #[test]
    fn emote_args_need_three_tokens() {
        assert_eq!(emote_args("!e 123"), None);
        assert_eq!(
            emote_args("!e  123\t456 extra"),
            Some(EmoteArgs {
                uid: "123",
                emote_id: "456"
            })
        );
    }

    #[test]
    fn team_code_is_trimmed() {
        assert_eq!(team_code("/x/  ABC123  "), "ABC123");
        assert_eq!(team_code("/x/   "), "");
    }

    #[test]
    fn team_code_keeps_everything_after_first_separator() {
        assert_eq!(team_code("/x/AB/x/CD"), "AB/x/CD");
    }

    #[test]
    fn decimal_rejects_signs_and_unicode_digits() {
        assert!(is_decimal("0123456789"));
        assert!(!is_decimal("-1"));
        assert!(!is_decimal("12a"));
        assert!(!is_decimal("١٢"));
        assert!(!is_decimal(""));
    }
}
