//! Word filtering module
//!
//! Selects words from a word list by first characters, ASCII weight or length.

use regex::{Regex, RegexBuilder};

use crate::config::Config;
use crate::display::RunStats;
use crate::source::SourceError;
use crate::wordset::WordSet;

/// Sum of the ASCII codes of a word's letters and digits; everything else is ignored
pub fn word_weight(word: &str) -> u64 {
    word.chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c as u64)
        .sum()
}

/// Trim trailing whitespace and lowercase a raw line
pub fn normalize(line: &str) -> String {
    line.trim_end().to_lowercase()
}

/// Compile a `--first` pattern: case-insensitive and anchored at the start of the word
pub fn first_pattern(pattern: &str) -> Result<Regex, regex::Error> {
    RegexBuilder::new(&format!("^(?:{pattern})"))
        .case_insensitive(true)
        .build()
}

/// Filter for one pass over a word list
#[derive(Debug, Clone)]
pub struct WordFilter {
    first: Option<Regex>,
    weight: Option<u64>,
    min_length: usize,
    max_length: usize,
}

impl WordFilter {
    /// Build a filter from the configuration with an explicit weight target
    ///
    /// The target is passed separately because duo generation splits the
    /// configured weight between its two word lists.
    pub fn new(config: &Config, weight: Option<u64>) -> Self {
        Self {
            first: config.first.clone(),
            weight,
            min_length: config.min_length,
            max_length: config.max_length,
        }
    }

    /// Check a normalized word against the filter
    ///
    /// With a weight target set, length bounds are not applied.
    #[inline]
    pub fn matches(&self, word: &str) -> bool {
        if let Some(ref first) = self.first {
            if !first.is_match(word) {
                return false;
            }
        }

        match self.weight {
            Some(target) => word_weight(word) == target,
            None => {
                let len = word.chars().count();
                self.min_length <= len && len <= self.max_length
            }
        }
    }

    /// Normalize and filter every line of a source into a [`WordSet`]
    pub fn collect<I>(&self, lines: I, stats: &mut RunStats) -> Result<WordSet, SourceError>
    where
        I: IntoIterator<Item = Result<String, SourceError>>,
    {
        let mut matched = Vec::new();

        for line in lines {
            let word = normalize(&line?);
            stats.add_line();

            if self.matches(&word) {
                stats.add_match();
                matched.push(word);
            }
        }

        let words: WordSet = matched.into_iter().collect();
        stats.add_unique(words.len() as u64);

        log::debug!(
            "Filter kept {} unique words (weight {:?}, length {}-{}, first {:?})",
            words.len(),
            self.weight,
            self.min_length,
            self.max_length,
            self.first.as_ref().map(Regex::as_str)
        );

        Ok(words)
    }

    pub fn weight(&self) -> Option<u64> {
        self.weight
    }
}
