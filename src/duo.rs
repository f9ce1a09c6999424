//! Two-word nicknames
//!
//! Builds nicknames such as adjective + noun from two filtered word lists.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::config::Config;
use crate::display::RunStats;
use crate::filter::WordFilter;
use crate::source::SourceError;
use crate::wordset::WordSet;

/// Split a weight target between the first and second word
///
/// Each half is matched on its own list; the weight of the joined word is not
/// checked again.
pub fn split_weight(target: u64) -> (u64, u64) {
    let first = target / 2;
    (first, target - first)
}

/// Prefix every word of `second` with a random word of `first`
///
/// Returns `None` when either side is empty. The prefix is drawn again for
/// each word, so the same first word may appear several times.
pub fn combine<R>(first: &WordSet, second: &WordSet, rng: &mut R) -> Option<WordSet>
where
    R: Rng + ?Sized,
{
    if first.is_empty() || second.is_empty() {
        return None;
    }

    let prefixes: Vec<&str> = first.iter().collect();

    let duos = second
        .iter()
        .filter_map(|word| {
            prefixes
                .choose(&mut *rng)
                .map(|prefix| format!("{prefix}{word}"))
        })
        .collect();

    Some(duos)
}

/// Filter two word lists and combine them
pub fn generate_duos<A, B, R>(
    first: A,
    second: B,
    config: &Config,
    rng: &mut R,
    stats: &mut RunStats,
) -> Result<Option<WordSet>, SourceError>
where
    A: IntoIterator<Item = Result<String, SourceError>>,
    B: IntoIterator<Item = Result<String, SourceError>>,
    R: Rng + ?Sized,
{
    let (first_weight, second_weight) = match config.weight {
        Some(target) => {
            let (a, b) = split_weight(target);
            (Some(a), Some(b))
        }
        None => (None, None),
    };

    let first_filter = WordFilter::new(config, first_weight);
    let second_filter = WordFilter::new(config, second_weight);

    let first_words = first_filter.collect(first, stats)?;
    let second_words = second_filter.collect(second, stats)?;

    log::debug!(
        "Duo halves: {} words at weight {:?}, {} words at weight {:?}",
        first_words.len(),
        first_filter.weight(),
        second_words.len(),
        second_filter.weight()
    );

    Ok(combine(&first_words, &second_words, rng))
}
