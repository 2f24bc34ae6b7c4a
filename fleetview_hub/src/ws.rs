//! WebSocket upgrade and per-connection push loop.

use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        State,
    },
    response::Response,
};
use futures_util::stream::StreamExt;
use std::sync::atomic::Ordering;
use tokio::sync::broadcast::error::RecvError;
use tracing::{debug, warn};

use crate::state::AppState;

pub async fn ws_handler(ws: WebSocketUpgrade, State(state): State<AppState>) -> Response {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

async fn handle_socket(mut socket: WebSocket, state: AppState) {
    state.client_count.fetch_add(1, Ordering::Relaxed);

    // Ensure we decrement on disconnect (drop).
    struct ClientGuard(AppState);
    impl Drop for ClientGuard {
        fn drop(&mut self) {
            self.0.client_count.fetch_sub(1, Ordering::Relaxed);
        }
    }
    let _guard = ClientGuard(state.clone());

    // Subscribe while holding the cache lock: the sampler updates the cache and
    // broadcasts under the write lock, so each tick arrives exactly once
    let (mut rx, cached) = {
        let guard = state.last_json.read().await;
        (state.tx.subscribe(), guard.clone())
    };
    if !cached.is_empty() && socket.send(Message::Text(cached)).await.is_err() {
        return;
    }

    loop {
        tokio::select! {
            pushed = rx.recv() => match pushed {
                Ok(json) => {
                    if socket.send(Message::Text(json)).await.is_err() {
                        break;
                    }
                }
                Err(RecvError::Lagged(skipped)) => {
                    warn!(skipped, "subscriber lagging; skipped ticks");
                }
                Err(RecvError::Closed) => break,
            },
            incoming = socket.next() => match incoming {
                Some(Ok(Message::Close(_))) | Some(Err(_)) | None => break,
                Some(Ok(_)) => {}
            },
        }
    }
    debug!("subscriber disconnected");
}
