//! Deduplicated word collections
//!
//! A [`WordSet`] is built once from an iterator and read afterwards. It uses a
//! fixed-seed hasher so the same words iterate in the same order on every run,
//! which keeps `--seed` output reproducible.

use ahash::RandomState;
use hashbrown::HashSet;

/// Fixed hasher keys; changing them reshuffles every seeded run
const HASH_SEEDS: [u64; 4] = [
    0x6e69_636b_5f67_656e,
    0x776f_7264_6c69_7374,
    0x6c33_3374_5f64_756f,
    0x6164_6a5f_6e6f_756e,
];

fn hasher() -> RandomState {
    RandomState::with_seeds(HASH_SEEDS[0], HASH_SEEDS[1], HASH_SEEDS[2], HASH_SEEDS[3])
}

/// Set of lowercase words with set semantics and stable iteration order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordSet {
    words: HashSet<String, RandomState>,
}

impl WordSet {
    pub fn new() -> Self {
        Self {
            words: HashSet::with_hasher(hasher()),
        }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.words.iter().map(String::as_str)
    }

    /// Words in alphabetical order
    pub fn to_sorted_vec(&self) -> Vec<&str> {
        let mut words: Vec<_> = self.iter().collect();
        words.sort_unstable();
        words
    }
}

impl Default for WordSet {
    fn default() -> Self {
        Self::new()
    }
}

impl FromIterator<String> for WordSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        let mut words = HashSet::with_hasher(hasher());
        words.extend(iter);
        Self { words }
    }
}

impl<'a> FromIterator<&'a str> for WordSet {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        iter.into_iter().map(str::to_string).collect()
    }
}
