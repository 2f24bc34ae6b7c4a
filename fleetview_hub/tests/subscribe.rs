//! Subscribers see each snapshot once: the cached replay never repeats a pushed tick.

use std::time::Duration;

use fleetview::{ws, Snapshot};
use fleetview_hub::fleet::Fleet;
use fleetview_hub::sampler::spawn_sampler;
use fleetview_hub::state::AppState;

#[tokio::test]
async fn no_snapshot_is_delivered_twice() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind");
    let addr = listener.local_addr().expect("addr");
    let state = AppState::new();
    // a fast sampler makes connect-during-update likely
    spawn_sampler(state.clone(), Fleet::with_seed(20, 5), Duration::from_millis(1));
    tokio::spawn(fleetview_hub::serve(listener, state));

    for _ in 0..20 {
        let mut stream = ws::connect(&format!("ws://{addr}/ws"))
            .await
            .expect("connect");
        let mut prev: Option<String> = None;
        for _ in 0..5 {
            let raw = tokio::time::timeout(Duration::from_secs(5), ws::next_payload(&mut stream))
                .await
                .expect("payload within timeout")
                .expect("stream ok")
                .expect("hub open");
            Snapshot::decode(&raw).expect("decodes");
            assert_ne!(prev.as_deref(), Some(raw.as_str()), "same snapshot pushed twice");
            prev = Some(raw);
        }
    }
}

#[tokio::test]
async fn sampler_caches_what_it_broadcasts() {
    let state = AppState::new();
    let mut rx = state.tx.subscribe();
    spawn_sampler(state.clone(), Fleet::with_seed(1, 3), Duration::from_millis(20));

    let pushed = tokio::time::timeout(Duration::from_secs(5), rx.recv())
        .await
        .expect("tick within timeout")
        .expect("channel open");
    let cached = state.last_json.read().await.clone();
    // the cache may already hold a newer tick, never an older or empty one
    assert!(!cached.is_empty());
    assert!(Snapshot::decode(&pushed).is_ok());
}
