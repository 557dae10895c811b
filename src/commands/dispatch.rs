use super::handlers::handle_command;
use super::history::CommandHistory;
use super::parser::parse_command;
use super::types::CommandResult;
use crate::config::IdentityConfig;
use std::sync::Arc;

/// Records every inbound command, then routes it to its handler.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    history: Arc<CommandHistory>,
    identity: Arc<IdentityConfig>,
}

impl Dispatcher {
    pub fn new(history: Arc<CommandHistory>, identity: Arc<IdentityConfig>) -> Self {
        Self { history, identity }
    }

    pub fn history(&self) -> &CommandHistory {
        &self.history
    }

    /// `input` must already be trimmed by the caller.
    pub fn process(&self, input: &str) -> CommandResult {
        tracing::info!(command = input, "📱 received command");
        self.history.record(input);

        let command = parse_command(input);
        let result = handle_command(command, input, &self.identity);
        if result.ok {
            tracing::debug!(kind = command.name(), "command handled");
        } else {
            tracing::warn!(kind = command.name(), result = %result.text, "command rejected");
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::history::RecordStatus;
    use crate::commands::types::Command;

    fn dispatcher() -> Dispatcher {
        Dispatcher::new(
            Arc::new(CommandHistory::new()),
            Arc::new(IdentityConfig::default()),
        )
    }

    #[test]
    fn every_command_is_recorded_even_when_unknown() {
        let dispatcher = dispatcher();
        dispatcher.process("/5");
        dispatcher.process("nonsense");
        dispatcher.process("!e abc 1");

        let all = dispatcher.history().all();
        assert_eq!(all.len(), 3);
        assert_eq!(all[1].command, "nonsense");
        assert!(all.iter().all(|r| r.status == RecordStatus::Processing));
    }

    #[test]
    fn emote_round_trip_through_dispatch() {
        let result = dispatcher().process("!e 123456789 909000001");
        assert_eq!(result.command, Command::Emote);
        assert!(result.ok);
        assert!(result.text.contains("909000001"));
        assert!(result.text.contains("123456789"));
    }

    #[test]
    fn invalid_uid_is_reported_specifically() {
        let result = dispatcher().process("!e abc 1");
        assert!(!result.ok);
        assert_eq!(result.text, "❌ Invalid UID format");
    }

    #[test]
    fn canned_replies_ignore_prior_state() {
        let dispatcher = dispatcher();
        let first = dispatcher.process("/s");
        dispatcher.process("/x/TEAM");
        dispatcher.process("!e 1 2");
        let second = dispatcher.process("/s");
        assert_eq!(first, second);
    }

    #[test]
    fn unknown_reproduces_input_verbatim() {
        let result = dispatcher().process("/x");
        assert_eq!(result.command, Command::Unknown);
        assert_eq!(result.text, "❓ Unknown command: /x");
    }

    #[test]
    fn clones_share_one_history() {
        let dispatcher = dispatcher();
        let clone = dispatcher.clone();
        clone.process("/help");
        assert_eq!(dispatcher.history().count(), 1);
    }
}
