//! Entry point for the fleetview client. Parses args, then turns each pushed snapshot
//! into a frame on stdout (one JSON object per line).

use std::env;
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use fleetview::sink::JsonLinesSink;
use fleetview::{ws, EngineConfig, TelemetryEngine};

const DEMO_PORT: u16 = 3232;

#[derive(Debug, Default)]
struct ParsedArgs {
    url: Option<String>,
    window: Option<usize>,
    min_brightness: Option<u8>,
    stdin: bool,
    demo: bool,
    help: bool,
}

fn usage(prog: &str) -> String {
    format!(
        "Usage: {prog} [--window N|-w N] [--min-brightness N] [--stdin] [--demo] [ws://HOST:PORT/ws]"
    )
}

fn parse_num<T: std::str::FromStr>(flag: &str, v: Option<String>) -> Result<T, String> {
    let v = v.ok_or_else(|| format!("{flag} requires a value"))?;
    v.parse::<T>()
        .map_err(|_| format!("invalid value for {flag}: '{v}'"))
}

fn parse_args<I: IntoIterator<Item = String>>(args: I) -> Result<ParsedArgs, String> {
    let mut it = args.into_iter();
    let prog = it.next().unwrap_or_else(|| "fleetview".into());
    let mut parsed = ParsedArgs::default();

    while let Some(arg) = it.next() {
        match arg.as_str() {
            "-h" | "--help" => parsed.help = true,
            "--window" | "-w" => parsed.window = Some(parse_num(&arg, it.next())?),
            "--min-brightness" => parsed.min_brightness = Some(parse_num(&arg, it.next())?),
            "--stdin" => parsed.stdin = true,
            "--demo" => parsed.demo = true,
            _ if arg.starts_with("--window=") => {
                let v = arg.split_once('=').map(|(_, v)| v.to_string());
                parsed.window = Some(parse_num("--window", v)?);
            }
            _ if arg.starts_with("--min-brightness=") => {
                let v = arg.split_once('=').map(|(_, v)| v.to_string());
                parsed.min_brightness = Some(parse_num("--min-brightness", v)?);
            }
            _ if arg.starts_with('-') => {
                return Err(format!("Unknown flag '{arg}'. {}", usage(&prog)));
            }
            _ => {
                if parsed.url.is_none() {
                    parsed.url = Some(arg);
                } else {
                    return Err(format!("Unexpected argument. {}", usage(&prog)));
                }
            }
        }
    }
    Ok(parsed)
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    // stdout carries frames; logs go to stderr
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let parsed = match parse_args(env::args()) {
        Ok(v) => v,
        Err(msg) => {
            eprintln!("{msg}");
            std::process::exit(2);
        }
    };
    if parsed.help {
        println!("{}", usage("fleetview"));
        return Ok(());
    }

    init_logging();

    let mut config = EngineConfig::from_env();
    if let Some(w) = parsed.window {
        config.window = w.max(1);
    }
    if let Some(b) = parsed.min_brightness {
        config.min_brightness = b;
    }
    info!(window = config.window, views = config.views.len(), "engine ready");

    let mut engine = TelemetryEngine::new(config);
    let mut sink = JsonLinesSink::new(io::stdout());

    if parsed.stdin {
        return replay_stdin(&mut engine, &mut sink).await;
    }
    if parsed.demo {
        return run_demo_mode(&mut engine, &mut sink).await;
    }
    let Some(url) = parsed.url else {
        eprintln!("No hub URL provided. {}", usage("fleetview"));
        std::process::exit(2);
    };
    subscribe(&url, &mut engine, &mut sink).await
}

fn apply<W: Write>(
    engine: &mut TelemetryEngine,
    sink: &mut JsonLinesSink<W>,
    raw: &str,
) -> anyhow::Result<()> {
    match engine.deliver(raw) {
        Ok(frame) => {
            debug!(tick = frame.tick, servers = frame.counters.server_count, "frame");
            sink.emit(&frame).context("writing frame")?;
        }
        // the renderer keeps showing the previous frame
        Err(e) => warn!(error = %e, "dropping tick"),
    }
    Ok(())
}

async fn subscribe<W: Write>(
    url: &str,
    engine: &mut TelemetryEngine,
    sink: &mut JsonLinesSink<W>,
) -> anyhow::Result<()> {
    let mut stream = ws::connect(url)
        .await
        .with_context(|| format!("connecting to {url}"))?;
    loop {
        tokio::select! {
            next = ws::next_payload(&mut stream) => match next? {
                Some(raw) => apply(engine, sink, &raw)?,
                None => {
                    info!(ticks = engine.ticks(), "hub closed the stream");
                    break;
                }
            },
            _ = tokio::signal::ctrl_c() => {
                info!(ticks = engine.ticks(), "interrupted");
                break;
            }
        }
    }
    Ok(())
}

// Newline-delimited snapshots; blank lines are skipped
async fn replay_stdin<W: Write>(
    engine: &mut TelemetryEngine,
    sink: &mut JsonLinesSink<W>,
) -> anyhow::Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await.context("reading stdin")? {
        if line.trim().is_empty() {
            continue;
        }
        apply(engine, sink, &line)?;
    }
    info!(ticks = engine.ticks(), "end of input");
    Ok(())
}

// --- Demo Mode ---

async fn run_demo_mode<W: Write>(
    engine: &mut TelemetryEngine,
    sink: &mut JsonLinesSink<W>,
) -> anyhow::Result<()> {
    let url = format!("ws://127.0.0.1:{DEMO_PORT}/ws");
    let hub = spawn_demo_hub(DEMO_PORT).await?;
    let res = subscribe(&url, engine, sink).await;
    drop(hub);
    res
}

struct DemoGuard(std::process::Child);

impl Drop for DemoGuard {
    fn drop(&mut self) {
        let _ = self.0.kill();
        let _ = self.0.wait();
    }
}

async fn spawn_demo_hub(port: u16) -> anyhow::Result<DemoGuard> {
    let exe = find_hub_executable();
    let child = std::process::Command::new(&exe)
        .arg("--port")
        .arg(port.to_string())
        .spawn()
        .with_context(|| format!("spawning {}", exe.display()))?;
    // Give the hub a brief moment to bind
    tokio::time::sleep(Duration::from_millis(300)).await;
    Ok(DemoGuard(child))
}

fn find_hub_executable() -> PathBuf {
    if let Some(parent) = env::current_exe().ok().as_deref().and_then(|p| p.parent()) {
        #[cfg(windows)]
        let name = "fleetview_hub.exe";
        #[cfg(not(windows))]
        let name = "fleetview_hub";
        let candidate = parent.join(name);
        if candidate.exists() {
            return candidate;
        }
    }
    // Fallback to relying on PATH
    PathBuf::from("fleetview_hub")
}
