//! Core generation engine
//!
//! Opens the word lists a [`Mode`](crate::config::Mode) needs and runs the
//! filter or duo combiner over them.

use rand::Rng;

use crate::config::{Config, Sources};
use crate::display::RunStats;
use crate::duo::generate_duos;
use crate::filter::WordFilter;
use crate::source::{SourceError, WordSource};
use crate::wordset::WordSet;

/// Main generator
#[derive(Debug)]
pub struct Generator {
    config: Config,
    stats: RunStats,
}

impl Generator {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            stats: RunStats::default(),
        }
    }

    /// Produce the candidate nicknames
    ///
    /// `None` means a duo half came up empty; single-word mode always returns
    /// a set, possibly empty.
    pub fn generate<R>(&mut self, rng: &mut R) -> Result<Option<WordSet>, SourceError>
    where
        R: Rng + ?Sized,
    {
        log::info!("Generating {} nicknames", self.config.mode);

        let words = match self.config.mode.sources() {
            Sources::One(name) => {
                let source = self.open(name)?;
                let filter = WordFilter::new(&self.config, self.config.weight);
                Some(filter.collect(source, &mut self.stats)?)
            }
            Sources::Pair(first, second) => {
                let first = self.open(first)?;
                let second = self.open(second)?;
                generate_duos(first, second, &self.config, rng, &mut self.stats)?
            }
        };

        log::debug!(
            "Read {} lines, {} matched, {} unique",
            self.stats.lines_read(),
            self.stats.matched(),
            self.stats.unique()
        );

        Ok(words)
    }

    /// Open a word list from the configured directory
    fn open(&mut self, name: &str) -> Result<WordSource, SourceError> {
        let source = WordSource::open(self.config.word_list(name)).map_err(|e| {
            log::debug!("Cannot load word list {}", e.path().display());
            e
        })?;

        log::info!(
            "Loading {} ({})",
            source.path().display(),
            source.encoding().name()
        );
        self.stats.add_file(source.size());
        Ok(source)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Get generation statistics
    pub fn stats(&self) -> &RunStats {
        &self.stats
    }

    pub fn stats_mut(&mut self) -> &mut RunStats {
        &mut self.stats
    }
}
