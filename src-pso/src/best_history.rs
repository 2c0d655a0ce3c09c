//! Sliding window of recent global-best positions used for stagnation detection

use std::collections::VecDeque;

use ndarray::Array1;

#[derive(Debug, Clone)]
pub struct BestHistory {
    window: usize,
    entries: VecDeque<Array1<f64>>,
}

impl BestHistory {
    pub fn new(window: usize) -> Self {
        Self {
            window,
            entries: VecDeque::with_capacity(window),
        }
    }

    /// Append `best`, dropping the oldest entry when the window is full
    pub fn push(&mut self, best: Array1<f64>) {
        if self.entries.len() == self.window {
            self.entries.pop_front();
        }
        self.entries.push_back(best);
    }

    pub fn window(&self) -> usize {
        self.window
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.entries.len() == self.window
    }

    /// True when every entry is bit-for-bit identical to the first one
    pub fn is_constant(&self) -> bool {
        let Some(first) = self.entries.front() else {
            return true;
        };
        self.entries.iter().skip(1).all(|e| {
            e.len() == first.len()
                && e.iter().zip(first.iter()).all(|(a, b)| a.to_bits() == b.to_bits())
        })
    }

    /// Oldest first
    pub fn iter(&self) -> impl Iterator<Item = &Array1<f64>> {
        self.entries.iter()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
