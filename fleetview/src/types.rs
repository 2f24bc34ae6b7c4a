//! Types that mirror the hub's JSON schema, and the per-tick frame handed to renderers.
//! The wire half defines the payload format; keep it stable.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::engine::MetricView;
use crate::error::DecodeError;
use crate::palette::Color;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IoSample {
    pub name: String,
    #[serde(rename = "in")]
    pub inbound: f64,
    #[serde(rename = "out")]
    pub outbound: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerNode {
    pub name: String,
    // not range-checked here; negative counts pass through to the windows
    pub users: i64,
    pub full: bool,
    // only the key set is meaningful; values are carried through untouched
    #[serde(default)]
    pub rooms: BTreeMap<String, serde_json::Value>,
}

impl ServerNode {
    pub fn room_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.rooms.keys().map(String::as_str)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Topology {
    pub servers: Vec<ServerNode>,
}

/// One decoded hub message. `io` and `tree.servers` are reported independently and
/// need not name the same servers.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Snapshot {
    pub io: Vec<IoSample>,
    pub tree: Topology,
}

impl Snapshot {
    pub fn decode(raw: &str) -> Result<Self, DecodeError> {
        serde_json::from_str(raw).map_err(DecodeError::from)
    }

    pub fn encode(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

// ---------- Frame ----------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesFrame {
    pub id: String,
    pub values: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewFrame {
    pub view: MetricView,
    pub title: String,
    /// Shared timestamp axis, oldest first.
    pub labels: Vec<String>,
    /// First-seen order.
    pub series: Vec<SeriesFrame>,
}

impl ViewFrame {
    pub fn series(&self, id: &str) -> Option<&SeriesFrame> {
        self.series.iter().find(|s| s.id == id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Counters {
    pub server_count: usize,
    pub room_count: usize,
    pub user_count: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StatusTally {
    pub ready: usize,
    pub full: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegendEntry {
    pub id: String,
    pub color: Color,
}

/// Self-contained output of one tick. Owns copies of every window, so holding on to
/// a frame never observes later ticks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderableFrame {
    pub tick: u64,
    pub timestamp: String,
    pub views: Vec<ViewFrame>,
    pub counters: Counters,
    pub status: StatusTally,
    pub legend: Vec<LegendEntry>,
}

impl RenderableFrame {
    pub fn view(&self, view: MetricView) -> Option<&ViewFrame> {
        self.views.iter().find(|v| v.view == view)
    }

    pub fn color_of(&self, id: &str) -> Option<Color> {
        self.legend.iter().find(|e| e.id == id).map(|e| e.color)
    }
}
