//! Runtime settings read once from the environment.

use std::time::Duration;

use once_cell::sync::OnceCell;

pub const DEFAULT_PORT: u16 = 3232;
const DEFAULT_PERIOD_MS: u64 = 1_000;
const DEFAULT_SERVERS: usize = 5;

// FLEETVIEW_HUB_PERIOD_MS: push interval; floored at 50ms
pub fn period() -> Duration {
    static V: OnceCell<Duration> = OnceCell::new();
    *V.get_or_init(|| {
        let ms = std::env::var("FLEETVIEW_HUB_PERIOD_MS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(DEFAULT_PERIOD_MS);
        Duration::from_millis(ms.max(50))
    })
}

// FLEETVIEW_HUB_SERVERS: number of simulated room servers
pub fn fleet_size() -> usize {
    static V: OnceCell<usize> = OnceCell::new();
    *V.get_or_init(|| {
        std::env::var("FLEETVIEW_HUB_SERVERS")
            .ok()
            .and_then(|v| v.parse::<usize>().ok())
            .unwrap_or(DEFAULT_SERVERS)
    })
}
