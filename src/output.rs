//! Grid output
//!
//! Prints nicknames five per row and waits for the user after each full row.

use rand::Rng;
use std::io::{self, BufRead, Write};
use thiserror::Error;

use crate::leet::{to_l33t, LeetError};
use crate::wordset::WordSet;

/// Words per row
pub const COLUMNS: usize = 5;

/// Width every word but the last of a row is padded to
pub const COLUMN_WIDTH: usize = 20;

/// Separator after a padded column
const GAP: &str = "  ";

/// Printed instead of the grid when nothing matched
pub const NOTHING_FOUND: &str = "[!] Sorry, no words were found suitable for the parameters\n\
Try other parameters or expand the .txt files with new words";

#[derive(Debug, Error)]
pub enum OutputError {
    #[error(transparent)]
    Leet(#[from] LeetError),

    #[error("failed to write output")]
    Io(#[from] io::Error),
}

/// Blocks between rows of output
pub trait Pager {
    fn pause(&mut self) -> io::Result<()>;
}

impl<P: Pager + ?Sized> Pager for Box<P> {
    fn pause(&mut self) -> io::Result<()> {
        (**self).pause()
    }
}

/// Waits for one line on stdin
#[derive(Debug, Default)]
pub struct StdinPager;

impl Pager for StdinPager {
    fn pause(&mut self) -> io::Result<()> {
        let mut line = String::new();
        io::stdin().lock().read_line(&mut line)?;
        Ok(())
    }
}

/// Never waits
#[derive(Debug, Default)]
pub struct NoPager;

impl Pager for NoPager {
    fn pause(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Writes words into rows of [`COLUMNS`] columns
pub struct GridWriter<W: Write, P: Pager> {
    out: W,
    pager: P,
    column: usize,
    words_written: u64,
}

impl<W: Write, P: Pager> GridWriter<W, P> {
    pub fn new(out: W, pager: P) -> Self {
        Self {
            out,
            pager,
            column: 0,
            words_written: 0,
        }
    }

    /// Write one word; a row-closing word ends the line and triggers the pager
    pub fn write_word(&mut self, word: &str) -> io::Result<()> {
        self.column += 1;
        self.words_written += 1;

        if self.column < COLUMNS {
            write!(self.out, "{:<width$}{}", word, GAP, width = COLUMN_WIDTH)?;
        } else {
            writeln!(self.out, "{}", word)?;
            self.out.flush()?;
            self.column = 0;
            self.pager.pause()?;
        }
        Ok(())
    }

    /// Write the nothing-found message
    pub fn write_nothing_found(&mut self) -> io::Result<()> {
        writeln!(self.out, "{}", NOTHING_FOUND)
    }

    /// Close a partial row and flush, returning the inner writer
    pub fn finish(mut self) -> io::Result<W> {
        if self.column > 0 {
            writeln!(self.out)?;
        }
        self.out.flush()?;
        Ok(self.out)
    }

    pub fn words_written(&self) -> u64 {
        self.words_written
    }
}

/// Print the generated words, l33ting each one when `leet_ratio > 0`
///
/// Returns the number of words printed.
pub fn print_words<W, P, R>(
    words: Option<&WordSet>,
    leet_ratio: f64,
    rng: &mut R,
    grid: &mut GridWriter<W, P>,
) -> Result<u64, OutputError>
where
    W: Write,
    P: Pager,
    R: Rng + ?Sized,
{
    let words = match words {
        Some(words) if !words.is_empty() => words,
        _ => {
            grid.write_nothing_found()?;
            return Ok(0);
        }
    };

    for word in words.iter() {
        if leet_ratio > 0.0 {
            let word = to_l33t(word, leet_ratio, rng)?;
            grid.write_word(&word)?;
        } else {
            grid.write_word(word)?;
        }
    }

    Ok(grid.words_written())
}
