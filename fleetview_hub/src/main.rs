//! fleetview_hub: pushes one fleet snapshot per tick to every WebSocket subscriber.

use std::net::SocketAddr;

use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

use fleetview_hub::args::{parse_port, wants_help};
use fleetview_hub::fleet::Fleet;
use fleetview_hub::sampler::spawn_sampler;
use fleetview_hub::settings::{fleet_size, period, DEFAULT_PORT};
use fleetview_hub::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if wants_help(std::env::args()) {
        println!("Usage: fleetview_hub [--port N|-p N]");
        return Ok(());
    }

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let port = parse_port(std::env::args(), DEFAULT_PORT);
    let state = AppState::new();
    let _sampler = spawn_sampler(state.clone(), Fleet::new(fleet_size()), period());

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    let bound = listener.local_addr()?;
    info!(
        addr = %bound,
        servers = fleet_size(),
        period_ms = period().as_millis() as u64,
        "hub listening on /ws"
    );

    fleetview_hub::serve(listener, state)
        .await
        .context("serving websocket hub")
}
