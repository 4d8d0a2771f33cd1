//! Fair random sequencers.
//!
//! A [`Cycler`] hands out every item of a fixed collection once per round in
//! shuffled order, then reshuffles. Rounds are independent, so an item may
//! repeat across a round boundary, but none is skipped within one.

use log::trace;
use rand::seq::SliceRandom;
use rand_pcg::Pcg32;

use crate::error::{LickError, LickResult};

/// Without-replacement-per-round dispenser over a fixed collection.
#[derive(Debug, Clone)]
pub struct Cycler<T> {
    label: String,
    items: Vec<T>,
    permutation: Vec<usize>,
    cursor: usize,
    rounds: u64,
    rng: Pcg32,
}

impl<T: Clone> Cycler<T> {
    /// Build a cycler and shuffle its first round.
    ///
    /// `label` names the collection in logs and errors.
    pub fn new(label: impl Into<String>, items: Vec<T>, rng: Pcg32) -> LickResult<Self> {
        let label = label.into();
        if items.is_empty() {
            return Err(LickError::EmptyCycler(label));
        }
        let mut cycler = Self {
            label,
            permutation: (0..items.len()).collect(),
            items,
            cursor: 0,
            rounds: 0,
            rng,
        };
        cycler.reset_permutation();
        Ok(cycler)
    }

    /// Next item of the current round, reshuffling when the round is spent.
    pub fn next_item(&mut self) -> T {
        if self.cursor >= self.permutation.len() {
            self.reset_permutation();
        }
        let item = self.items[self.permutation[self.cursor]].clone();
        self.cursor += 1;
        item
    }

    /// Draw until `pred` holds, giving up after the rest of this round plus
    /// one full round. Every draw advances the cycler.
    pub fn next_where(&mut self, mut pred: impl FnMut(&T) -> bool) -> Option<T> {
        let budget = self.remaining() + self.items.len();
        for _ in 0..budget {
            let item = self.next_item();
            if pred(&item) {
                return Some(item);
            }
        }
        None
    }

    /// Discard the rest of the round and shuffle a new one.
    pub fn reset_permutation(&mut self) {
        self.permutation.shuffle(&mut self.rng);
        self.cursor = 0;
        self.rounds += 1;
        trace!(
            "cycler '{}' starting round {} over {} items",
            self.label,
            self.rounds,
            self.items.len()
        );
    }

    /// Items left before the next reshuffle.
    pub fn remaining(&self) -> usize {
        self.permutation.len() - self.cursor
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of permutations shuffled so far.
    pub fn rounds(&self) -> u64 {
        self.rounds
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }
}
