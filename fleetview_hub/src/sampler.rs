//! Background sampler: steps the fleet once per period, caches the encoded snapshot
//! and pushes it to every subscriber.

use tokio::task::JoinHandle;
use tokio::time::{interval, Duration, MissedTickBehavior};
use tracing::{debug, error};

use crate::fleet::Fleet;
use crate::state::AppState;

pub fn spawn_sampler(state: AppState, mut fleet: Fleet, period: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = interval(period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
        loop {
            ticker.tick().await;
            let snap = fleet.step();
            let json = match snap.encode() {
                Ok(js) => js,
                Err(e) => {
                    error!(error = %e, "failed to encode snapshot");
                    continue;
                }
            };
            // cache and push under one write lock; see ws::handle_socket
            let receivers = {
                let mut cached = state.last_json.write().await;
                cached.clone_from(&json);
                // Err only means nobody is subscribed right now
                state.tx.send(json).unwrap_or(0)
            };
            debug!(receivers, io = snap.io.len(), servers = snap.tree.servers.len(), "pushed snapshot");
        }
    })
}
