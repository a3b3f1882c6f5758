//! Ban Chi greedy bot service.
//!
//! A Pao server invites the bot into a game by opening a websocket to any
//! path on this server. Each connection gets its own session: the server
//! pushes board positions, the bot answers every one with a move, and the
//! connection closes on game over or when the bot resigns.

mod config;
mod protocol;
mod session;

use anyhow::Context;
use axum::{
    extract::ws::{Message, WebSocket, WebSocketUpgrade},
    response::Response,
    routing::get,
    Json, Router,
};
use banchi_core::Command;
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{debug, error, info, warn};
use tracing_subscriber::EnvFilter;

use config::Config;
use session::{Reply, Session, SessionError};

// =============================================================================
// Websocket
// =============================================================================

async fn upgrade(ws: WebSocketUpgrade) -> Response {
    info!("got a new customer");
    ws.on_upgrade(play)
}

async fn play(mut socket: WebSocket) {
    let mut session = Session::new();
    info!(bot = session.bot_name(), "session started");

    match run(&mut socket, &mut session).await {
        Ok(()) => info!(bot = session.bot_name(), color = session.color(), "session finished"),
        Err(e) => error!(
            bot = session.bot_name(),
            color = session.color(),
            error = %e,
            "session failed"
        ),
    }

    // the peer may already be gone
    if let Err(e) = socket.send(Message::Close(None)).await {
        debug!(error = %e, "close frame not sent");
    }
}

async fn run(socket: &mut WebSocket, session: &mut Session) -> Result<(), SessionError> {
    while let Some(message) = socket.recv().await {
        let text = match message? {
            Message::Text(text) => text,
            Message::Close(_) => return Ok(()),
            other => {
                debug!(?other, "ignoring non-text frame");
                continue;
            }
        };
        match session.handle(text.as_str())? {
            Reply::Send(command) => send(socket, &command).await?,
            Reply::SendAndClose(command) => {
                send(socket, &command).await?;
                return Ok(());
            }
            Reply::Close => return Ok(()),
            Reply::Ignore => {}
        }
    }
    warn!("connection dropped without a close frame");
    Ok(())
}

async fn send(socket: &mut WebSocket, command: &Command) -> Result<(), SessionError> {
    let json = serde_json::to_string(command)?;
    socket.send(Message::Text(json.into())).await?;
    Ok(())
}

// =============================================================================
// Health
// =============================================================================

#[derive(Serialize)]
struct HealthModel {
    status: String,
}

async fn health() -> Json<HealthModel> {
    Json(HealthModel {
        status: "ok".to_string(),
    })
}

// =============================================================================
// Main
// =============================================================================

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "failed to listen for ctrl-c");
        // keep serving until killed
        std::future::pending::<()>().await;
    }
    info!("shutting down");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env()?;

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .route("/health", get(health))
        .fallback(upgrade)
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    let bind = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&bind)
        .await
        .with_context(|| format!("failed to bind {}", bind))?;
    info!("listening on {}", bind);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;
    Ok(())
}
