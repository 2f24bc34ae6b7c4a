//! Payload decoding against the hub wire contract.

use fleetview::types::Snapshot;
use fleetview::DecodeError;

const SAMPLE: &str = r#"{
    "io": [
        {"name": "registry", "in": 12.5, "out": 40},
        {"name": "server-1", "in": 3, "out": 7}
    ],
    "tree": {"servers": [
        {"name": "server-1", "users": 3, "full": false, "rooms": {"lobby": 1, "arena": {"open": true}}},
        {"name": "server-2", "users": 40, "full": true, "rooms": {}}
    ]}
}"#;

#[test]
fn decodes_sample_payload() {
    let snap = Snapshot::decode(SAMPLE).expect("decode");
    assert_eq!(snap.io.len(), 2);
    assert_eq!(snap.io[0].name, "registry");
    assert_eq!(snap.io[0].inbound, 12.5);
    assert_eq!(snap.io[0].outbound, 40.0);
    assert_eq!(snap.tree.servers[1].users, 40);
    assert!(snap.tree.servers[1].full);
    let rooms: Vec<&str> = snap.tree.servers[0].room_names().collect();
    assert_eq!(rooms, vec!["arena", "lobby"]);
}

#[test]
fn round_trips_through_encode() {
    let snap = Snapshot::decode(SAMPLE).expect("decode");
    let json = snap.encode().expect("encode");
    assert!(json.contains(r#""in":12.5"#));
    assert_eq!(Snapshot::decode(&json).expect("re-decode"), snap);
}

#[test]
fn syntax_errors_are_malformed() {
    for raw in ["", "{", "not json", r#"{"io": [}"#] {
        let err = Snapshot::decode(raw).unwrap_err();
        assert!(matches!(err, DecodeError::Malformed { .. }), "{raw:?} -> {err}");
    }
}

#[test]
fn schema_mismatches_are_non_conforming() {
    let cases = [
        r#"{"io": []}"#,
        r#"{"io": [{"name": "a", "in": "fast", "out": 1}], "tree": {"servers": []}}"#,
        r#"{"io": [], "tree": {"servers": [{"name": "a", "users": 1.5, "full": false}]}}"#,
        r#"[1, 2, 3]"#,
    ];
    for raw in cases {
        let err = Snapshot::decode(raw).unwrap_err();
        assert!(matches!(err, DecodeError::NonConforming { .. }), "{raw} -> {err}");
    }
}

#[test]
fn negative_user_counts_pass_through() {
    let raw = r#"{"io": [], "tree": {"servers": [{"name": "a", "users": -1, "full": false}]}}"#;
    let snap = Snapshot::decode(raw).expect("negative users still decode");
    assert_eq!(snap.tree.servers[0].users, -1);
}
