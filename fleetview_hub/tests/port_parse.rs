//! Port flag parsing for the hub.

use fleetview_hub::args::{parse_port, wants_help};

fn args(v: &[&str]) -> Vec<String> {
    v.iter().map(|s| s.to_string()).collect()
}

#[test]
fn port_long_short_and_assign() {
    assert_eq!(parse_port(args(&["hub", "--port", "9001"]), 3232), 9001);
    assert_eq!(parse_port(args(&["hub", "-p", "9002"]), 3232), 9002);
    assert_eq!(parse_port(args(&["hub", "--port=9003"]), 3232), 9003);
    assert_eq!(parse_port(args(&["hub"]), 3232), 3232);
}

#[test]
fn long_form_wins_and_garbage_falls_back() {
    assert_eq!(parse_port(args(&["hub", "-p", "1", "--port", "2"]), 3232), 2);
    assert_eq!(parse_port(args(&["hub", "--port", "not-a-port"]), 3232), 3232);
    assert_eq!(parse_port(args(&["hub", "--port", "70000"]), 3232), 3232);
}

#[test]
fn help_flag_detected() {
    assert!(wants_help(args(&["hub", "-h"])));
    assert!(wants_help(args(&["hub", "--port", "1", "--help"])));
    assert!(!wants_help(args(&["hub", "--port", "1"])));
}
