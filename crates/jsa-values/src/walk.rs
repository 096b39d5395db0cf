//! Bounded walks along links between objects.
//!
//! Prototype links come from analyzed code, so once values have been widened a
//! chain may loop back on itself or run on for as long as the program allows.
//! `ChainWalk` follows one link at a time and says when to stop.

use jsa_common::limits::MAX_PROTOTYPE_CHAIN_DEPTH;
use rustc_hash::FxHashSet;
use std::hash::Hash;

/// Why a walk stopped early.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkStop {
    /// The next link leads back to an object already on the chain.
    Cycle,
    /// The chain is longer than the walk allows.
    TooLong,
}

/// State of one walk along a chain of links.
///
/// ```ignore
/// let mut walk = ChainWalk::prototype_chain();
/// let mut current = Some(object);
/// while let Some(id) = current {
///     if walk.step(id).is_err() {
///         return None;
///     }
///     current = store.prototype_of(id);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ChainWalk<K> {
    seen: FxHashSet<K>,
    max_len: usize,
    stopped: Option<WalkStop>,
}

impl<K: Hash + Eq + Copy> ChainWalk<K> {
    pub fn new(max_len: usize) -> Self {
        Self {
            seen: FxHashSet::default(),
            max_len,
            stopped: None,
        }
    }

    /// A walk bounded for `[[Prototype]]` lookups.
    pub fn prototype_chain() -> Self {
        Self::new(MAX_PROTOTYPE_CHAIN_DEPTH)
    }

    /// Move onto `key`. Once a step fails, every later step fails the same
    /// way.
    pub fn step(&mut self, key: K) -> Result<(), WalkStop> {
        if let Some(stop) = self.stopped {
            return Err(stop);
        }
        let stop = if self.seen.len() >= self.max_len {
            WalkStop::TooLong
        } else if !self.seen.insert(key) {
            WalkStop::Cycle
        } else {
            return Ok(());
        };
        self.stopped = Some(stop);
        Err(stop)
    }

    /// Number of objects visited so far.
    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }

    pub fn has_visited(&self, key: &K) -> bool {
        self.seen.contains(key)
    }

    pub fn stopped(&self) -> Option<WalkStop> {
        self.stopped
    }
}

#[cfg(test)]
#[path = "../tests/walk_tests.rs"]
mod tests;
