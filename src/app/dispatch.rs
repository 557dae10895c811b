use crate::cli::{Cli, Commands};
use crate::commands::{CommandHistory, Dispatcher};
use crate::config::{Config, IdentityConfig};
use crate::error::{self, RequestError};
use anyhow::Result;
use std::sync::Arc;
use tracing::info;

pub async fn dispatch(cli: Cli, config: Config) -> Result<()> {
    let config = Arc::new(config);
    match cli.command {
        None => serve(None, None, config).await,
        Some(Commands::Serve { port, host }) => serve(port, host, config).await,
        Some(Commands::Exec { command }) => {
            println!("{}", exec(&command, &config.identity)?);
            Ok(())
        }
    }
}

async fn serve(port: Option<u16>, host: Option<String>, config: Arc<Config>) -> Result<()> {
    let port = port.unwrap_or(config.gateway.port);
    let host = host.unwrap_or_else(|| config.gateway.host.clone());
    if port == 0 {
        info!("Starting emotebot gateway on {host} (random port)");
    } else {
        info!("Starting emotebot gateway on {host}:{port}");
    }
    crate::gateway::run_gateway(&host, port, config).await
}

/// Run one command through a fresh dispatcher and return the result text.
pub fn exec(words: &[String], identity: &IdentityConfig) -> error::Result<String> {
    let command = words.join(" ");
    let command = command.trim();
    if command.is_empty() {
        return Err(RequestError::EmptyCommand.into());
    }
    let dispatcher = Dispatcher::new(
        Arc::new(CommandHistory::new()),
        Arc::new(identity.clone()),
    );
    Ok(dispatcher.process(command).text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BotError;

    #[test]
    fn exec_runs_dispatcher() {
        let words = vec!["/x/".to_string(), "ABC123".to_string()];
        assert_eq!(
            exec(&words, &IdentityConfig::default()).unwrap(),
            "✅ Joining team with code: ABC123"
        );
    }

    #[test]
    fn exec_rejects_blank_input_as_empty_command() {
        let words = vec!["   ".to_string()];
        let err = exec(&words, &IdentityConfig::default()).unwrap_err();
        assert!(matches!(
            err,
            BotError::Request(RequestError::EmptyCommand)
        ));
        assert_eq!(err.to_string(), "request: No command provided");
    }

    #[test]
    fn exec_help_uses_configured_identity() {
        let identity = IdentityConfig {
            developer: "Ops Team".into(),
            ..IdentityConfig::default()
        };
        let text = exec(&["/help".to_string()], &identity).unwrap();
        assert!(text.contains("👨‍💻 Developer: Ops Team"));
    }
}
