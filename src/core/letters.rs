//! Letter multiset
//!
//! Both guess evaluation and hard-mode checking consume letters from a pool one
//! occurrence at a time. `LetterPool` keeps explicit per-letter counts so a letter
//! can never be consumed more often than it was inserted.

use rustc_hash::FxHashMap;

/// A multiset of uppercase ASCII letters
///
/// Remembers the order in which distinct letters were first inserted so that
/// [`LetterPool::remaining`] is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterPool {
    counts: FxHashMap<u8, usize>,
    order: Vec<u8>,
}

impl LetterPool {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one occurrence of `letter`
    pub fn insert(&mut self, letter: u8) {
        let count = self.counts.entry(letter).or_insert(0);
        if *count == 0 && !self.order.contains(&letter) {
            self.order.push(letter);
        }
        *count += 1;
    }

    /// Remove one occurrence of `letter`
    ///
    /// Returns `false` (and leaves the pool untouched) when no occurrence remains.
    pub fn take(&mut self, letter: u8) -> bool {
        match self.counts.get_mut(&letter) {
            Some(count) if *count > 0 => {
                *count -= 1;
                true
            }
            _ => false,
        }
    }

    /// Occurrences of `letter` still in the pool
    #[inline]
    #[must_use]
    pub fn count(&self, letter: u8) -> usize {
        self.counts.get(&letter).copied().unwrap_or(0)
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, letter: u8) -> bool {
        self.count(letter) > 0
    }

    /// Total occurrences across all letters
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.values().sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Remaining letters with multiplicity, grouped in first-insertion order
    #[must_use]
    pub fn remaining(&self) -> Vec<u8> {
        self.order
            .iter()
            .flat_map(|&letter| std::iter::repeat_n(letter, self.count(letter)))
            .collect()
    }
}

impl FromIterator<u8> for LetterPool {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        let mut pool = Self::new();
        for letter in iter {
            pool.insert(letter);
        }
        pool
    }
}
