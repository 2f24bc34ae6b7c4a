//! Shared hub state: latest encoded snapshot and the push channel.

use std::sync::atomic::AtomicUsize;
use std::sync::Arc;

use tokio::sync::{broadcast, RwLock};

// Ticks a slow subscriber may fall behind before it starts skipping
const CHANNEL_DEPTH: usize = 16;

#[derive(Clone)]
pub struct AppState {
    // Last serialized snapshot, sent to new subscribers right away
    pub last_json: Arc<RwLock<String>>,
    pub tx: broadcast::Sender<String>,
    pub client_count: Arc<AtomicUsize>,
}

impl AppState {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(CHANNEL_DEPTH);
        Self {
            last_json: Arc::new(RwLock::new(String::new())),
            tx,
            client_count: Arc::new(AtomicUsize::new(0)),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
