//! Library entry for fleetview_hub so integration tests can drive the server in-process.

pub mod args;
pub mod fleet;
pub mod sampler;
pub mod settings;
pub mod state;
pub mod ws;

use axum::{routing::get, Router};

use crate::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/ws", get(ws::ws_handler))
        .with_state(state)
}

pub async fn serve(listener: tokio::net::TcpListener, state: AppState) -> std::io::Result<()> {
    axum::serve(listener, router(state)).await
}
