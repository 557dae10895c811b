//! Axum-based HTTP gateway exposing the command dispatcher.
//!
//! Every response is a JSON envelope served with HTTP 200; callers read the
//! outcome from the `status` field. Bodies are capped at 64KB.

mod handlers;
mod server;

pub use server::{build_app, resolve_bind_addr, run_gateway, run_gateway_with_listener};

use crate::Config;
use crate::commands::{CommandHistory, Dispatcher};
use crate::error::RequestError;
use serde_json::Value;
use std::sync::Arc;

/// Maximum request body size (64KB) -- prevents memory exhaustion
pub const MAX_BODY_SIZE: usize = 65_536;

/// Shared state for all axum handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub dispatcher: Dispatcher,
}

impl AppState {
    pub fn new(config: Arc<Config>) -> Self {
        Self {
            dispatcher: Dispatcher::new(
                Arc::new(CommandHistory::new()),
                Arc::new(config.identity.clone()),
            ),
            config,
        }
    }

    pub fn history(&self) -> &CommandHistory {
        self.dispatcher.history()
    }
}

/// Validated `/execute` body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecuteRequest {
    /// Trimmed, never empty.
    pub command: String,
    pub user: Option<String>,
}

impl ExecuteRequest {
    /// Parse `{"command": "...", "user": "..."}`. An absent, non-JSON or
    /// empty-object body is malformed; a blank command is empty.
    pub fn from_body(body: &[u8]) -> Result<Self, RequestError> {
        let Ok(Value::Object(fields)) = serde_json::from_slice::<Value>(body) else {
            return Err(RequestError::MalformedRequest);
        };
        if fields.is_empty() {
            return Err(RequestError::MalformedRequest);
        }

        let command = match fields.get("command") {
            None | Some(Value::Null) => "",
            Some(Value::String(command)) => command.trim(),
            Some(_) => return Err(RequestError::InvalidField("command")),
        };
        if command.is_empty() {
            return Err(RequestError::EmptyCommand);
        }

        // `null` counts as absent so the reply always names a user.
        let user = match fields.get("user") {
            None | Some(Value::Null) => None,
            Some(Value::String(user)) => Some(user.clone()),
            Some(_) => return Err(RequestError::InvalidField("user")),
        };

        Ok(Self {
            command: command.to_string(),
            user,
        })
    }
}
