//! In-memory dictionary
//!
//! `WordList` indexes words by length for secret selection and keeps a hash set
//! for membership tests.

use super::loader::words_from_slice;
use super::WORDS;
use crate::core::Word;
use crate::game::Dictionary;
use rand::seq::IndexedRandom;
use rustc_hash::{FxHashMap, FxHashSet};

/// Dictionary backed by a list of words
#[derive(Debug, Clone, Default)]
pub struct WordList {
    by_length: FxHashMap<usize, Vec<Word>>,
    lookup: FxHashSet<String>,
}

impl WordList {
    /// Build from already-validated words, dropping duplicates
    #[must_use]
    pub fn new(words: impl IntoIterator<Item = Word>) -> Self {
        let mut list = Self::default();
        for word in words {
            if list.lookup.insert(word.text().to_string()) {
                list.by_length.entry(word.len()).or_default().push(word);
            }
        }
        list
    }

    /// The dictionary compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::new(words_from_slice(WORDS))
    }

    /// Build from raw strings, skipping invalid entries
    #[must_use]
    pub fn from_slice(words: &[&str]) -> Self {
        Self::new(words_from_slice(words))
    }

    /// All words of exactly `length` letters
    #[must_use]
    pub fn words_of_length(&self, length: usize) -> &[Word] {
        self.by_length.get(&length).map_or(&[], Vec::as_slice)
    }

    /// Total number of words
    #[must_use]
    pub fn len(&self) -> usize {
        self.lookup.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lookup.is_empty()
    }
}

impl Dictionary for WordList {
    fn random_word(&self, length: usize) -> Option<Word> {
        self.words_of_length(length).choose(&mut rand::rng()).cloned()
    }

    fn contains(&self, word: &str) -> bool {
        self.lookup.contains(&word.trim().to_ascii_uppercase())
    }
}
