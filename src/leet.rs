//! L33t transform
//!
//! Replaces a share of a word's characters with look-alike glyphs.

use rand::seq::index;
use rand::Rng;
use thiserror::Error;

/// Glyphs for 'A' through 'Z'
const GLYPHS: [&str; 26] = [
    "4", "|3", "(", "|)", "3", "|=", "(-", "|-|", "!", "_|", "|<", "1", "|v|", "~", "0", "|*",
    "0_", "|2", "5", "+", "|_|", "|/", "'//", "><", "'/", "2",
];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LeetError {
    /// A picked position holds a character without a glyph (digit, punctuation, most non-ASCII)
    #[error("no l33t glyph for '{ch}' at position {index} of \"{word}\"")]
    Unmapped { word: String, ch: char, index: usize },
}

/// Glyph for a character, looked up by its uppercase form
///
/// Only characters whose uppercase is a single ASCII letter have one, so
/// `ı` maps like `I` while `ß` (uppercase "SS") has none.
pub fn glyph(ch: char) -> Option<&'static str> {
    let mut upper = ch.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) if u.is_ascii_uppercase() => Some(GLYPHS[(u as u8 - b'A') as usize]),
        _ => None,
    }
}

/// Number of characters replaced for a word of `len` characters
///
/// Halves round to even, so 2.5 gives 2 and 3.5 gives 4.
pub fn substitution_count(len: usize, ratio: f64) -> usize {
    (len as f64 * ratio).round_ties_even() as usize
}

/// Replace `round(len * ratio)` distinct, randomly picked characters with their glyphs
///
/// Positions are drawn from the whole word. Picking a character that has no
/// glyph fails with [`LeetError::Unmapped`].
pub fn to_l33t<R>(word: &str, ratio: f64, rng: &mut R) -> Result<String, LeetError>
where
    R: Rng + ?Sized,
{
    let chars: Vec<char> = word.chars().collect();
    let count = substitution_count(chars.len(), ratio).min(chars.len());

    let mut replaced: Vec<Option<&'static str>> = vec![None; chars.len()];

    for i in index::sample(rng, chars.len(), count) {
        let ch = chars[i];
        let glyph = glyph(ch).ok_or_else(|| LeetError::Unmapped {
            word: word.to_string(),
            ch,
            index: i,
        })?;
        replaced[i] = Some(glyph);
    }

    Ok(chars
        .iter()
        .zip(replaced)
        .fold(String::with_capacity(word.len() * 2), |mut out, (ch, glyph)| {
            match glyph {
                Some(glyph) => out.push_str(glyph),
                None => out.push(*ch),
            }
            out
        }))
}
