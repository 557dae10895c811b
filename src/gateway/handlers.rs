use crate::commands::history::{RECENT_WINDOW, unix_timestamp};
use crate::error::RequestError;
use axum::{body::Bytes, extract::State, response::Json};
use serde_json::{Value, json};

use super::{AppState, ExecuteRequest};

fn error_envelope(error: &RequestError) -> Json<Value> {
    Json(json!({
        "status": "error",
        "message": error.render(),
    }))
}

/// GET / -- service banner
pub(super) async fn handle_root(State(state): State<AppState>) -> Json<Value> {
    let identity = &state.config.identity;
    Json(json!({
        "status": "online",
        "message": identity.banner_message,
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "/execute": "POST - Execute bot commands",
            "/status": "GET - Check bot status",
            "/history": "GET - Command history",
            "/test": "GET - Test connection",
            "/health": "GET - Health check",
        },
        "developer": identity.developer,
    }))
}

/// POST /execute -- run one command through the dispatcher
pub(super) async fn handle_execute(State(state): State<AppState>, body: Bytes) -> Json<Value> {
    let request = match ExecuteRequest::from_body(&body) {
        Ok(request) => request,
        Err(error) => {
            tracing::warn!(error = %error, "rejected /execute request");
            return error_envelope(&error);
        }
    };

    let user = request
        .user
        .unwrap_or_else(|| state.config.identity.default_user.clone());
    let result = state.dispatcher.process(&request.command);
    tracing::info!(command = %request.command, user = %user, "✅ command processed");

    Json(json!({
        "status": "success",
        "message": "✅ Command executed successfully",
        "result": result.text,
        "command": request.command,
        "user": user,
        "timestamp": unix_timestamp(),
    }))
}

/// GET /status -- counters and the most recent command
pub(super) async fn handle_status(State(state): State<AppState>) -> Json<Value> {
    let identity = &state.config.identity;
    let history = state.history();
    Json(json!({
        "status": "online",
        "bot": identity.bot_name,
        "platform": identity.platform,
        "website": identity.website,
        "commands_processed": history.count(),
        "last_command": history.last(),
        "timestamp": unix_timestamp(),
    }))
}

/// GET /history -- the last ten commands, oldest first
pub(super) async fn handle_history(State(state): State<AppState>) -> Json<Value> {
    let history = state.history();
    Json(json!({
        "status": "success",
        "history": history.recent(RECENT_WINDOW),
        "total_commands": history.count(),
    }))
}

/// GET /test -- connectivity check for the website
pub(super) async fn handle_test(State(state): State<AppState>) -> Json<Value> {
    let identity = &state.config.identity;
    Json(json!({
        "status": "success",
        "message": format!("{} is working!", identity.bot_name),
        "connection": format!("{} ↔ {} ✅", identity.website, identity.platform),
        "timestamp": unix_timestamp(),
    }))
}

/// GET /health -- always public
pub(super) async fn handle_health(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "service": state.config.identity.service_name,
    }))
}
