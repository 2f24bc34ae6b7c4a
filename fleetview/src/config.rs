//! Engine settings: defaults match the dashboard (30-point windows, all three views),
//! overridable through FLEETVIEW_* environment variables.

use std::str::FromStr;

use tracing::warn;

use crate::engine::MetricView;
use crate::palette::ColorFallback;

pub const DEFAULT_WINDOW: usize = 30;
pub const DEFAULT_MIN_BRIGHTNESS: u8 = 30;
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%H:%M:%S";

#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    pub window: usize,
    pub min_brightness: u8,
    pub color_fallback: ColorFallback,
    pub views: Vec<MetricView>,
    /// chrono format string for tick labels.
    pub timestamp_format: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            window: DEFAULT_WINDOW,
            min_brightness: DEFAULT_MIN_BRIGHTNESS,
            color_fallback: ColorFallback::default(),
            views: MetricView::ALL.to_vec(),
            timestamp_format: DEFAULT_TIMESTAMP_FORMAT.to_string(),
        }
    }
}

impl EngineConfig {
    pub fn from_env() -> Self {
        Self::default().with_env_overrides(|k| std::env::var(k).ok())
    }

    /// Apply overrides from `lookup`; unparseable values keep the current setting.
    pub fn with_env_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = parse_var::<usize, _>(&lookup, "FLEETVIEW_WINDOW") {
            self.window = v.max(1);
        }
        if let Some(v) = parse_var::<u8, _>(&lookup, "FLEETVIEW_MIN_BRIGHTNESS") {
            self.min_brightness = v;
        }
        if let Some(v) = parse_var::<ColorFallback, _>(&lookup, "FLEETVIEW_COLOR_FALLBACK") {
            self.color_fallback = v;
        }
        self
    }
}

fn parse_var<T, F>(lookup: &F, key: &str) -> Option<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    let raw = lookup(key)?;
    match raw.trim().parse::<T>() {
        Ok(v) => Some(v),
        Err(e) => {
            warn!(var = key, value = %raw, error = %e, "ignoring invalid setting");
            None
        }
    }
}
