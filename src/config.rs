//! Validated generator configuration
//!
//! [`Config`] is built once from the parsed [`Args`] and never changes afterwards.

use rand::rngs::StdRng;
use rand::SeedableRng;
use regex::Regex;
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::cli::Args;
use crate::filter::first_pattern;

/// Lowest accepted weight: the ASCII value of 'a'
pub const MIN_WEIGHT: u64 = 97;

/// Word list file names
pub mod files {
    /// Plain words for single-word mode
    pub const WORDS: &str = "words.txt";

    /// Adjectives, first part of adjective + noun
    pub const ADJECTIVES: &str = "adjectives.txt";

    /// Verbs, first part of verb + noun
    pub const VERBS: &str = "verbs.txt";

    /// Nouns
    pub const NOUNS: &str = "nouns.txt";
}

/// Invalid combination of command-line values
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("--num \"{0}\" must be >= 97")]
    WeightTooSmall(u64),

    #[error("--min \"{0}\" must be > 0")]
    MinTooSmall(usize),

    #[error("--max \"{max}\" must be >= --min \"{min}\"")]
    MaxBelowMin { min: usize, max: usize },

    #[error("--l33t {0} must be between 0.0 and 1.0")]
    LeetRatio(f64),

    #[error("--first \"{pattern}\" is not a valid pattern: {source}")]
    InvalidFirst {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

/// Which word lists feed the generator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Single,
    AdjNoun,
    VerbNoun,
    NounNoun,
}

/// Word list file(s) read by a [`Mode`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sources {
    One(&'static str),
    Pair(&'static str, &'static str),
}

impl Mode {
    pub fn sources(self) -> Sources {
        match self {
            Mode::Single => Sources::One(files::WORDS),
            Mode::AdjNoun => Sources::Pair(files::ADJECTIVES, files::NOUNS),
            Mode::VerbNoun => Sources::Pair(files::VERBS, files::NOUNS),
            Mode::NounNoun => Sources::Pair(files::NOUNS, files::NOUNS),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Mode::Single => "single word",
            Mode::AdjNoun => "adjective + noun",
            Mode::VerbNoun => "verb + noun",
            Mode::NounNoun => "noun + noun",
        };
        f.write_str(name)
    }
}

/// Generator configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Exact ASCII weight to match; length bounds are ignored when set
    pub weight: Option<u64>,
    pub min_length: usize,
    pub max_length: usize,
    /// Share of characters replaced by l33t glyphs
    pub leet_ratio: f64,
    pub seed: Option<i64>,
    /// Case-insensitive pattern anchored at the start of each word
    pub first: Option<Regex>,
    pub mode: Mode,
    /// Directory holding the word lists
    pub word_dir: PathBuf,
    /// Wait for Enter after every full row
    pub paginate: bool,
    pub verbose: bool,
    pub quiet: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            weight: None,
            min_length: 1,
            max_length: 30,
            leet_ratio: 0.0,
            seed: None,
            first: None,
            mode: Mode::Single,
            word_dir: PathBuf::from("."),
            paginate: true,
            verbose: false,
            quiet: false,
        }
    }
}

impl Config {
    /// Validate parsed arguments into a configuration
    pub fn from_args(args: &Args) -> Result<Self, ConfigError> {
        if let Some(weight) = args.num {
            if weight < MIN_WEIGHT {
                return Err(ConfigError::WeightTooSmall(weight));
            }
        }

        if args.min < 1 {
            return Err(ConfigError::MinTooSmall(args.min));
        }
        if args.max < args.min {
            return Err(ConfigError::MaxBelowMin {
                min: args.min,
                max: args.max,
            });
        }

        if !(0.0..=1.0).contains(&args.l33t) {
            return Err(ConfigError::LeetRatio(args.l33t));
        }

        let first = match args.first.as_deref() {
            Some(pattern) if !pattern.is_empty() => {
                let regex = first_pattern(pattern).map_err(|source| ConfigError::InvalidFirst {
                    pattern: pattern.to_string(),
                    source,
                })?;
                Some(regex)
            }
            _ => None,
        };

        Ok(Self {
            weight: args.num,
            min_length: args.min,
            max_length: args.max,
            leet_ratio: args.l33t,
            seed: args.seed,
            first,
            mode: args.mode(),
            word_dir: args.dir.clone(),
            paginate: !args.no_pause,
            verbose: args.verbose,
            quiet: args.quiet,
        })
    }

    /// Random generator for this run: seeded when `--seed` was given, from OS entropy otherwise
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed as u64),
            None => StdRng::from_entropy(),
        }
    }

    /// Full path of a word list inside the word directory
    pub fn word_list(&self, name: &str) -> PathBuf {
        self.word_dir.join(name)
    }

    pub fn word_dir(&self) -> &Path {
        &self.word_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    fn args(extra: &[&str]) -> Args {
        let mut argv = vec!["nick-gen"];
        argv.extend_from_slice(extra);
        Args::try_parse_args_from(argv).unwrap()
    }

    #[test]
    fn test_defaults_are_valid() {
        let config = Config::from_args(&args(&[])).unwrap();

        assert_eq!(config.weight, None);
        assert_eq!(config.min_length, 1);
        assert_eq!(config.max_length, 30);
        assert_eq!(config.mode, Mode::Single);
        assert!(config.first.is_none());
        assert!(config.paginate);
    }

    #[test]
    fn test_weight_bounds() {
        assert!(matches!(
            Config::from_args(&args(&["-n", "96"])),
            Err(ConfigError::WeightTooSmall(96))
        ));
        assert!(matches!(
            Config::from_args(&args(&["-n", "0"])),
            Err(ConfigError::WeightTooSmall(0))
        ));

        let config = Config::from_args(&args(&["-n", "97"])).unwrap();
        assert_eq!(config.weight, Some(97));
    }

    #[test]
    fn test_length_bounds() {
        assert!(matches!(
            Config::from_args(&args(&["-m", "0"])),
            Err(ConfigError::MinTooSmall(0))
        ));
        assert!(matches!(
            Config::from_args(&args(&["-m", "5", "-x", "4"])),
            Err(ConfigError::MaxBelowMin { min: 5, max: 4 })
        ));
        assert!(Config::from_args(&args(&["-m", "4", "-x", "4"])).is_ok());
    }

    #[test]
    fn test_leet_ratio_bounds() {
        assert!(Config::from_args(&args(&["-l", "0.0"])).is_ok());
        assert!(Config::from_args(&args(&["-l", "1.0"])).is_ok());
        assert!(matches!(
            Config::from_args(&args(&["-l", "1.5"])),
            Err(ConfigError::LeetRatio(_))
        ));
        assert!(matches!(
            Config::from_args(&args(&["-l", "NaN"])),
            Err(ConfigError::LeetRatio(_))
        ));
    }

    #[test]
    fn test_invalid_first_pattern() {
        let err = Config::from_args(&args(&["-f", "ab("])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidFirst { .. }));
        assert!(err.to_string().contains("ab("));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(ConfigError::WeightTooSmall(50).to_string(), "--num \"50\" must be >= 97");
        assert_eq!(
            ConfigError::MaxBelowMin { min: 5, max: 2 }.to_string(),
            "--max \"2\" must be >= --min \"5\""
        );
    }

    #[test]
    fn test_mode_sources() {
        assert_eq!(Mode::Single.sources(), Sources::One(files::WORDS));
        assert_eq!(Mode::AdjNoun.sources(), Sources::Pair(files::ADJECTIVES, files::NOUNS));
        assert_eq!(Mode::VerbNoun.sources(), Sources::Pair(files::VERBS, files::NOUNS));
        assert_eq!(Mode::NounNoun.sources(), Sources::Pair(files::NOUNS, files::NOUNS));
    }

    #[test]
    fn test_seeded_rng_is_reproducible() {
        let config = Config {
            seed: Some(42),
            ..Config::default()
        };

        let a: Vec<u32> = (0..8).map(|_| config.rng().gen()).collect();
        let mut first = config.rng();
        let mut second = config.rng();
        let b: Vec<u32> = (0..8).map(|_| first.gen()).collect();
        let c: Vec<u32> = (0..8).map(|_| second.gen()).collect();

        assert_eq!(b, c);
        // a fresh generator per draw keeps repeating the first value
        assert!(a.iter().all(|v| *v == b[0]));
    }

    #[test]
    fn test_negative_seed_is_reproducible() {
        let config = Config::from_args(&args(&["-s", "-1"])).unwrap();
        assert_eq!(config.seed, Some(-1));

        let mut first = config.rng();
        let mut second = config.rng();
        let a: Vec<u64> = (0..8).map(|_| first.gen()).collect();
        let b: Vec<u64> = (0..8).map(|_| second.gen()).collect();
        assert_eq!(a, b);

        // -1 and u64::MAX share a bit pattern
        let mut wrapped = StdRng::seed_from_u64(u64::MAX);
        assert_eq!(a[0], wrapped.gen::<u64>());
    }

    #[test]
    fn test_word_list_path() {
        let config = Config {
            word_dir: PathBuf::from("lists"),
            ..Config::default()
        };
        assert_eq!(config.word_list(files::NOUNS), PathBuf::from("lists").join("nouns.txt"));
    }
}
