//! Name-keyed set of rolling windows sharing one timestamp axis (one set per chart).

use std::collections::HashMap;

use tracing::debug;

use crate::history::Window;

pub type SeriesId = String;

#[derive(Debug, Clone)]
pub struct SeriesSet {
    // first-seen order; `index` points into it
    series: Vec<(SeriesId, Window<f64>)>,
    index: HashMap<SeriesId, usize>,
    timestamps: Window<String>,
    cap: usize,
}

impl SeriesSet {
    pub fn new(cap: usize) -> Self {
        let cap = cap.max(1);
        Self {
            series: Vec::new(),
            index: HashMap::new(),
            timestamps: Window::new(cap),
            cap,
        }
    }

    /// Apply one tick. Every reported series gets the value pushed (new ids are
    /// registered first); series missing from the tick are left untouched.
    /// The timestamp axis advances exactly once regardless of what was reported.
    pub fn reconcile<'a, I>(&mut self, tick: I, label: impl Into<String>)
    where
        I: IntoIterator<Item = (&'a str, f64)>,
    {
        for (id, value) in tick {
            let slot = match self.index.get(id) {
                Some(&i) => i,
                None => {
                    debug!(series = id, "registering new series");
                    self.series.push((id.to_string(), Window::new(self.cap)));
                    self.index.insert(id.to_string(), self.series.len() - 1);
                    self.series.len() - 1
                }
            };
            self.series[slot].1.push(value);
        }
        self.timestamps.push(label.into());
    }

    pub fn get(&self, id: &str) -> Option<&Window<f64>> {
        self.index.get(id).map(|&i| &self.series[i].1)
    }

    /// Series in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Window<f64>)> + '_ {
        self.series.iter().map(|(id, w)| (id.as_str(), w))
    }

    pub fn timestamps(&self) -> &Window<String> {
        &self.timestamps
    }

    pub fn len(&self) -> usize {
        self.series.len()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.cap
    }
}
