//! Command-line interface definition for nick-gen
//!
//! Provides argument parsing for the nickname generator. Range checks live in
//! [`crate::config`], which turns [`Args`] into a validated [`crate::config::Config`].

use clap::error::ErrorKind;
use clap::{ArgGroup, CommandFactory, Parser};
use std::ffi::OsString;
use std::path::PathBuf;

use crate::config::Mode;

/// Nickname generator
///
/// Pick words from plain word lists by length, first characters or ASCII
/// weight, glue two categories together and optionally l33t the result.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "nick-gen",
    author = "m0h1nd4",
    version,
    about = "Nickname generator",
    long_about = r#"
Nickname generator.

Words are read from words.txt, adjectives.txt, verbs.txt and nouns.txt in the
word list directory (one word per line) and printed five per row. After every
row the generator waits for Enter.

EXAMPLES:
    # Words of 4 to 6 characters
    nick-gen -m 4 -x 6

    # Words starting with "ka"
    nick-gen -f ka

    # Adjective + noun whose letters add up to an ASCII weight of 1000
    nick-gen -an -n 1000

    # Reproducible output with half of the characters l33ted
    nick-gen -vn -l 0.5 -s 42

    # Use the bundled sample lists and print everything at once
    nick-gen -d wordlists --no-pause
"#
)]
#[command(group(ArgGroup::new("mode").multiple(false)))]
pub struct Args {
    /// Sum of all ASCII character weights; min/max are ignored when set
    #[arg(short = 'n', long = "num", value_name = "CHAR_NUMBER")]
    pub num: Option<u64>,

    /// Minimum length of nickname
    #[arg(short = 'm', long = "min", value_name = "MINIMUM", default_value_t = 1)]
    pub min: usize,

    /// Maximum length of nickname
    #[arg(short = 'x', long = "max", value_name = "MAXIMUM", default_value_t = 30)]
    pub max: usize,

    /// Share of characters to make 1337, from 0.0 to 1.0
    #[arg(short = 'l', long = "l33t", value_name = "L33T", default_value_t = 0.0)]
    pub l33t: f64,

    /// Random seed for reproducible output
    #[arg(short, long, value_name = "SEED", allow_negative_numbers = true)]
    pub seed: Option<i64>,

    /// First character(s) of the nickname
    #[arg(short, long, value_name = "FIRST")]
    pub first: Option<String>,

    /// Make nickname using 1 adjective and 1 noun (also -an)
    #[arg(long = "adj_noun", alias = "adj-noun", group = "mode")]
    pub adj_noun: bool,

    /// Make nickname using 1 verb and 1 noun (also -vn)
    #[arg(long = "verb_noun", alias = "verb-noun", group = "mode")]
    pub verb_noun: bool,

    /// Make nickname using 2 nouns (also -nn)
    #[arg(long = "noun_noun", alias = "noun-noun", group = "mode")]
    pub noun_noun: bool,

    /// Directory holding words.txt, adjectives.txt, verbs.txt and nouns.txt
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    pub dir: PathBuf,

    /// Print every row without waiting for Enter
    #[arg(long, default_value_t = false)]
    pub no_pause: bool,

    /// Quiet mode - errors only
    #[arg(short, long, default_value_t = false, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Verbose mode - configuration, statistics and debug logging
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

/// Single-dash long flags kept for compatibility with the classic interface
const LEGACY_FLAGS: [(&str, &str); 3] = [
    ("-an", "--adj_noun"),
    ("-vn", "--verb_noun"),
    ("-nn", "--noun_noun"),
];

impl Args {
    /// Parse the process arguments, accepting the legacy `-an`/`-vn`/`-nn` flags
    pub fn parse_args() -> Self {
        Self::parse_from(normalize_legacy_flags(std::env::args_os()))
    }

    /// Fallible variant of [`Args::parse_args`] over an explicit argument list
    pub fn try_parse_args_from<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        Self::try_parse_from(normalize_legacy_flags(args))
    }

    /// Selected generation mode; single words when no combination flag is set
    pub fn mode(&self) -> Mode {
        if self.adj_noun {
            Mode::AdjNoun
        } else if self.verb_noun {
            Mode::VerbNoun
        } else if self.noun_noun {
            Mode::NounNoun
        } else {
            Mode::Single
        }
    }

    /// Build a usage error carrying `message`, rendered by clap with the usage line
    pub fn usage_error(message: impl std::fmt::Display) -> clap::Error {
        Self::command().error(ErrorKind::ValueValidation, message)
    }
}

/// Rewrite `-an`, `-vn` and `-nn` to their long forms so clap can parse them
pub fn normalize_legacy_flags<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    args.into_iter()
        .map(Into::into)
        .map(|arg| {
            let legacy = arg
                .to_str()
                .and_then(|s| LEGACY_FLAGS.iter().find(|(short, _)| *short == s));

            match legacy {
                Some((_, long)) => OsString::from(long),
                None => arg,
            }
        })
        .collect()
}
