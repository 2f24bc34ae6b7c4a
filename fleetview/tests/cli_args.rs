//! CLI tests for the fleetview client: arg handling and stdin replay.
use assert_cmd::Command;

use fleetview::{MetricView, RenderableFrame};

fn fleetview() -> Command {
    Command::cargo_bin("fleetview").expect("binary exists")
}

#[test]
fn test_help_mentions_short_and_long_flags() {
    let output = fleetview().arg("--help").output().expect("run fleetview --help");
    assert!(output.status.success());
    let text = String::from_utf8_lossy(&output.stdout);
    assert!(
        text.contains("Usage:")
            && text.contains("--window")
            && text.contains("-w")
            && text.contains("--stdin"),
        "help text missing expected flags\n{text}"
    );
}

#[test]
fn test_bad_window_value_is_rejected() {
    let output = fleetview()
        .args(["--window", "many", "--stdin"])
        .output()
        .expect("run fleetview");
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("--window"));
}

#[test]
fn test_stdin_replay_emits_one_frame_per_valid_line() {
    let input = [
        r#"{"io":[{"name":"alpha","in":1,"out":10}],"tree":{"servers":[{"name":"alpha","users":2,"full":false,"rooms":{"r1":1}}]}}"#,
        "",
        "this is not json",
        r#"{"io":[{"name":"alpha","in":2,"out":20},{"name":"beta","in":3,"out":30}],"tree":{"servers":[]}}"#,
        r#"{"io":[{"name":"beta","in":4,"out":40}],"tree":{"servers":[]}}"#,
    ]
    .join("\n");

    let output = fleetview()
        .args(["--stdin", "-w", "2"])
        .env("RUST_LOG", "off")
        .write_stdin(input)
        .output()
        .expect("run fleetview --stdin");
    assert!(output.status.success());

    let frames: Vec<RenderableFrame> = String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(|l| serde_json::from_str(l).expect("frame json"))
        .collect();
    assert_eq!(frames.len(), 3);
    assert_eq!(frames[0].counters.user_count, 2);
    assert_eq!(frames[2].tick, 3);

    let out = frames[2].view(MetricView::Outbound).expect("io_out view");
    assert_eq!(out.labels.len(), 2);
    assert_eq!(out.series("alpha").unwrap().values, vec![10.0, 20.0]);
    assert_eq!(out.series("beta").unwrap().values, vec![30.0, 40.0]);
}
