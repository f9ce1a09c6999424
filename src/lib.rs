//! # Nick Gen
//!
//! Nickname generator built on plain word lists.
//!
//! ## Features
//!
//! - **Length filtering**: keep words between `--min` and `--max` characters
//! - **First characters**: keep words starting with a given prefix pattern
//! - **ASCII weight**: keep words whose letters and digits add up to `--num`
//! - **Duos**: adjective + noun, verb + noun or noun + noun
//! - **L33t**: replace a share of the characters with look-alike glyphs
//! - **Reproducible**: the same `--seed` prints the same nicknames
//!
//! ## Usage
//!
//! ```bash
//! # Words of 4 to 6 characters
//! nick-gen -m 4 -x 6
//!
//! # Adjective + noun weighing 1000, a quarter of it l33ted
//! nick-gen -an -n 1000 -l 0.25 -s 7
//! ```
//!
//! ## Example
//!
//! ```rust,no_run
//! use nick_gen::config::{Config, Mode};
//! use nick_gen::generator::Generator;
//! use std::path::PathBuf;
//!
//! let config = Config {
//!     mode: Mode::AdjNoun,
//!     seed: Some(42),
//!     word_dir: PathBuf::from("wordlists"),
//!     ..Config::default()
//! };
//!
//! let mut rng = config.rng();
//! let mut generator = Generator::new(config);
//! let nicknames = generator.generate(&mut rng).unwrap();
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod duo;
pub mod filter;
pub mod generator;
pub mod leet;
pub mod output;
pub mod source;
pub mod wordset;

pub use cli::Args;
pub use config::Config;
pub use generator::Generator;
pub use wordset::WordSet;
