//! Ingest engine: decodes one hub message per tick, rolls every metric view forward,
//! computes the roll-ups and hands back a self-contained frame.
//!
//! Lifecycle: build one engine at startup and feed it from the transport's delivery
//! loop. It owns all windows and the color registry; nothing here locks because
//! ticks are applied one at a time through `&mut self`.

use std::fmt::Write as _;

use chrono::Local;
use serde::{Deserialize, Serialize};

use crate::aggregate::aggregate;
use crate::config::{EngineConfig, DEFAULT_TIMESTAMP_FORMAT};
use crate::error::DecodeError;
use crate::history::Window;
use crate::palette::ColorRegistry;
use crate::series::SeriesSet;
use crate::types::{LegendEntry, RenderableFrame, SeriesFrame, Snapshot, ViewFrame};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MetricView {
    #[serde(rename = "io_in")]
    Inbound,
    #[serde(rename = "io_out")]
    Outbound,
    #[serde(rename = "users")]
    UserSpread,
}

impl MetricView {
    pub const ALL: [MetricView; 3] = [
        MetricView::Inbound,
        MetricView::Outbound,
        MetricView::UserSpread,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            MetricView::Inbound => "io_in",
            MetricView::Outbound => "io_out",
            MetricView::UserSpread => "users",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            MetricView::Inbound => "Input",
            MetricView::Outbound => "Output",
            MetricView::UserSpread => "Spread",
        }
    }

    /// `(series, value)` pairs this view tracks, in payload order.
    pub fn extract<'a>(&self, snap: &'a Snapshot) -> Vec<(&'a str, f64)> {
        match self {
            MetricView::Inbound => snap
                .io
                .iter()
                .map(|s| (s.name.as_str(), s.inbound))
                .collect(),
            MetricView::Outbound => snap
                .io
                .iter()
                .map(|s| (s.name.as_str(), s.outbound))
                .collect(),
            MetricView::UserSpread => snap
                .tree
                .servers
                .iter()
                .map(|s| (s.name.as_str(), s.users as f64))
                .collect(),
        }
    }
}

impl std::fmt::Display for MetricView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

pub struct TelemetryEngine {
    config: EngineConfig,
    colors: ColorRegistry,
    views: Vec<(MetricView, SeriesSet)>,
    ticks: u64,
}

impl TelemetryEngine {
    pub fn new(config: EngineConfig) -> Self {
        let colors = ColorRegistry::new(config.min_brightness, config.color_fallback);
        Self::with_colors(config, colors)
    }

    pub fn with_colors(config: EngineConfig, colors: ColorRegistry) -> Self {
        let mut views: Vec<(MetricView, SeriesSet)> = Vec::with_capacity(config.views.len());
        for v in &config.views {
            // a view listed twice would be rolled forward twice per tick
            if !views.iter().any(|(seen, _)| seen == v) {
                views.push((*v, SeriesSet::new(config.window)));
            }
        }
        Self {
            config,
            colors,
            views,
            ticks: 0,
        }
    }

    /// Transport entry point: one raw message, labelled with the local wall clock.
    pub fn deliver(&mut self, raw: &str) -> Result<RenderableFrame, DecodeError> {
        let now = Local::now();
        let mut label = String::new();
        // chrono reports a bad format string as a fmt error
        if write!(label, "{}", now.format(&self.config.timestamp_format)).is_err() {
            label = now.format(DEFAULT_TIMESTAMP_FORMAT).to_string();
        }
        self.deliver_at(raw, label)
    }

    /// Decoding happens in full before any window is touched, so a rejected
    /// payload leaves the engine exactly as it was.
    pub fn deliver_at(
        &mut self,
        raw: &str,
        label: impl Into<String>,
    ) -> Result<RenderableFrame, DecodeError> {
        let snap = Snapshot::decode(raw)?;
        Ok(self.ingest(&snap, label))
    }

    pub fn ingest(&mut self, snap: &Snapshot, label: impl Into<String>) -> RenderableFrame {
        let label = label.into();
        for (view, set) in self.views.iter_mut() {
            let tick = view.extract(snap);
            for (id, _) in &tick {
                self.colors.color_for(id);
            }
            set.reconcile(tick, label.clone());
        }
        let rollup = aggregate(&snap.tree);
        self.ticks += 1;

        RenderableFrame {
            tick: self.ticks,
            timestamp: label,
            views: self.views.iter().map(|(v, set)| view_frame(*v, set)).collect(),
            counters: rollup.counters,
            status: rollup.status,
            legend: self
                .colors
                .iter()
                .map(|(id, color)| LegendEntry {
                    id: id.to_string(),
                    color,
                })
                .collect(),
        }
    }

    pub fn series(&self, view: MetricView) -> Option<&SeriesSet> {
        self.views
            .iter()
            .find(|(v, _)| *v == view)
            .map(|(_, set)| set)
    }

    pub fn buffer(&self, view: MetricView, id: &str) -> Option<&Window<f64>> {
        self.series(view).and_then(|set| set.get(id))
    }

    /// Successful ticks so far.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn colors(&self) -> &ColorRegistry {
        &self.colors
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }
}

fn view_frame(view: MetricView, set: &SeriesSet) -> ViewFrame {
    ViewFrame {
        view,
        title: view.title().to_string(),
        labels: set.timestamps().values(),
        series: set
            .iter()
            .map(|(id, w)| SeriesFrame {
                id: id.to_string(),
                values: w.values(),
            })
            .collect(),
    }
}
