//! Library entry for fleetview: rolling per-server telemetry windows and roll-ups,
//! plus the WebSocket client used to subscribe to a hub.

pub mod aggregate;
pub mod config;
pub mod engine;
pub mod error;
pub mod history;
pub mod palette;
pub mod series;
pub mod sink;
pub mod types;
pub mod ws;

pub use config::EngineConfig;
pub use engine::{MetricView, TelemetryEngine};
pub use error::{DecodeError, TransportError};
pub use types::{RenderableFrame, Snapshot};
