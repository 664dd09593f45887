//! Daily Quiz · Backend
//!
//! - Axum HTTP API serving a seeded, shuffled multiple-choice quiz
//! - Static quiz pages from ./static
//!
//! Important env variables:
//!   PORT              : u16 (default 8000)
//!   QUIZ_DATA_PATH    : question pool JSON (default ./data/global_warming.json)
//!   QUIZ_STATIC_DIR   : directory holding the quiz pages (default ./static)
//!   QUIZ_CONFIG_PATH  : optional TOML file with the same settings
//!   LOG_LEVEL         : tracing filter, e.g. "debug" or full directives
//!   LOG_FORMAT        : "pretty" (default) or "json"

mod telemetry;
mod domain;
mod config;
mod pool;
mod selector;
mod state;
mod protocol;
mod routes;

use std::{net::SocketAddr, sync::Arc};
use tokio::net::TcpListener;
use tracing::info;

use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
  telemetry::init_tracing();

  let state = Arc::new(AppState::new());
  let addr = SocketAddr::from(([0, 0, 0, 0], state.config.port));
  let app = build_router(state);

  let listener = TcpListener::bind(addr).await?;
  info!(target: "daily_quiz", %addr, "HTTP server listening");
  axum::serve(listener, app)
    .with_graceful_shutdown(shutdown_signal())
    .await?;
  Ok(())
}

async fn shutdown_signal() {
  if let Err(e) = tokio::signal::ctrl_c().await {
    tracing::error!(target: "daily_quiz", error = %e, "Failed to listen for Ctrl-C");
    std::future::pending::<()>().await;
  }
  info!(target: "daily_quiz", "Shutdown requested");
}
