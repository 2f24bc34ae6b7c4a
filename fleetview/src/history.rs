//! Small utilities to manage bounded history buffers for charts.

use std::collections::VecDeque;

pub fn push_capped<T>(dq: &mut VecDeque<T>, v: T, cap: usize) {
    while dq.len() >= cap && !dq.is_empty() {
        dq.pop_front();
    }
    dq.push_back(v);
}

/// Fixed-capacity FIFO over one series: pushes append at the tail and the
/// oldest sample is dropped once `capacity` is exceeded.
#[derive(Debug, Clone, PartialEq)]
pub struct Window<T> {
    samples: VecDeque<T>,
    cap: usize,
}

impl<T> Window<T> {
    // A zero capacity would never hold the sample just pushed
    pub fn new(cap: usize) -> Self {
        let cap = cap.max(1);
        Self {
            samples: VecDeque::with_capacity(cap),
            cap,
        }
    }

    pub fn push(&mut self, v: T) {
        push_capped(&mut self.samples, v, self.cap);
    }

    /// Oldest first.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &T> + ExactSizeIterator + '_ {
        self.samples.iter()
    }

    pub fn latest(&self) -> Option<&T> {
        self.samples.back()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.cap
    }
}

impl<T: Clone> Window<T> {
    /// Copy of the retained samples, oldest first.
    pub fn values(&self) -> Vec<T> {
        self.samples.iter().cloned().collect()
    }
}
