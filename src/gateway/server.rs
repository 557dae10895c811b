use super::handlers::{
    handle_execute, handle_health, handle_history, handle_root, handle_status, handle_test,
};
use super::{AppState, MAX_BODY_SIZE};

use crate::config::{Config, IdentityConfig};
use anyhow::{Context, Result};
use axum::{
    Router,
    http::HeaderValue,
    routing::{get, post},
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::limit::RequestBodyLimitLayer;

/// Bind `host:port` and serve until the process exits.
pub async fn run_gateway(host: &str, port: u16, config: Arc<Config>) -> Result<()> {
    let addr = resolve_bind_addr(host, port).await?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("bind gateway socket")?;

    run_gateway_with_listener(host, listener, config).await
}

/// Resolve `host:port`, accepting IP literals and hostnames alike.
pub async fn resolve_bind_addr(host: &str, port: u16) -> Result<SocketAddr> {
    tokio::net::lookup_host((host, port))
        .await
        .with_context(|| format!("resolve gateway bind address {host}:{port}"))?
        .next()
        .with_context(|| format!("no address found for {host}:{port}"))
}

/// Run the HTTP gateway from a pre-bound listener.
pub async fn run_gateway_with_listener(
    host: &str,
    listener: tokio::net::TcpListener,
    config: Arc<Config>,
) -> Result<()> {
    let actual_port = listener
        .local_addr()
        .context("get gateway listener local address")?
        .port();
    let display_addr = format!("{host}:{actual_port}");

    print_gateway_banner(&display_addr, &config.identity);
    tracing::info!(addr = %display_addr, "gateway listening");

    let cors_origins = config.gateway.cors_origins.clone();
    let app = build_app(AppState::new(config), &cors_origins);
    axum::serve(listener, app)
        .await
        .context("serve HTTP gateway")?;

    Ok(())
}

fn print_gateway_banner(display_addr: &str, identity: &IdentityConfig) {
    println!("🚀 Starting {} API...", identity.bot_name);
    println!("🌐 Website: {}", identity.website);
    println!("🖥️  Hosting: {}", identity.platform);
    println!("👨‍💻 Developer: {}", identity.developer);
    println!("📍 Listening on {display_addr}");
    println!();
    println!("📋 Available Endpoints:");
    println!("   POST /execute - Execute commands");
    println!("   GET  /status  - Check bot status");
    println!("   GET  /history - Command history");
    println!("   GET  /test    - Test connection");
    println!("   GET  /health  - Health check");
}

pub fn build_app(state: AppState, cors_origins: &[String]) -> Router {
    let app = Router::new()
        .route("/", get(handle_root))
        .route("/execute", post(handle_execute))
        .route("/status", get(handle_status))
        .route("/history", get(handle_history))
        .route("/test", get(handle_test))
        .route("/health", get(handle_health))
        .with_state(state)
        .layer(RequestBodyLimitLayer::new(MAX_BODY_SIZE));

    if cors_origins.is_empty() {
        return app.layer(CorsLayer::permissive());
    }

    let origins: Vec<HeaderValue> = cors_origins
        .iter()
        .filter_map(|o| o.parse().ok())
        .collect();
    app.layer(
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([axum::http::Method::GET, axum::http::Method::POST])
            .allow_headers([axum::http::header::CONTENT_TYPE]),
    )
}
