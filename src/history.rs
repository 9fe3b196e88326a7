use circular_queue::CircularQueue;

use crate::constants::{MOMENTARY_BLOCKS, SHORTTERM_BLOCKS};

/// Per-block loudness history for the three aggregation horizons.
///
/// Pure bookkeeping: values are appended as they are computed, and the two
/// bounded windows evict their oldest entry once full. No gating happens
/// here.
#[derive(Debug)]
pub(crate) struct History {
    momentary: CircularQueue<f64>,
    shortterm: CircularQueue<f64>,
    integrated: Vec<f64>,
    integrated_cap: Option<usize>,
}

impl History {
    pub fn new() -> Self {
        Self {
            momentary: CircularQueue::with_capacity(MOMENTARY_BLOCKS),
            shortterm: CircularQueue::with_capacity(SHORTTERM_BLOCKS),
            integrated: Vec::new(),
            integrated_cap: None,
        }
    }

    /// Bounds the integrated history to the `cap` most recent values. The
    /// default is unbounded; trimming only ever happens through an explicit
    /// cap.
    pub fn set_integrated_cap(&mut self, cap: usize) {
        self.integrated_cap = Some(cap);
        self.trim_integrated();
    }

    pub fn push(&mut self, value: f64) {
        let _ = self.momentary.push(value);
        let _ = self.shortterm.push(value);
        self.integrated.push(value);
        self.trim_integrated();
    }

    fn trim_integrated(&mut self) {
        if let Some(cap) = self.integrated_cap {
            if self.integrated.len() > cap {
                let excess = self.integrated.len() - cap;
                self.integrated.drain(..excess);
            }
        }
    }

    pub fn momentary(&self) -> impl Iterator<Item = f64> + '_ {
        self.momentary.iter().copied()
    }

    pub fn shortterm(&self) -> impl Iterator<Item = f64> + '_ {
        self.shortterm.iter().copied()
    }

    pub fn integrated(&self) -> &[f64] {
        &self.integrated
    }

    pub fn clear(&mut self) {
        self.momentary.clear();
        self.shortterm.clear();
        self.integrated.clear();
    }
}
