//! # Eldrow
//!
//! Pick a random word from a spell-check dictionary, or list every word that
//! fits a set of restrictions. Handy for seeding Wordle-style puzzles.
//!
//! A run is one pass: the dictionary is read into memory, each word is checked
//! by a [`WordFilter`], and the survivors go through the selection policy in
//! [`selection`] which either picks one at random or lists them all.

pub mod config;
pub mod constraints;
pub mod dictionary;
pub mod error;
pub mod filter;
pub mod selection;

use rand::Rng;

pub use config::{resolve, Overrides, RunConfig, Settings};
pub use constraints::{Constraints, Length};
pub use dictionary::{load_dictionary, normalize_line, read_words};
pub use error::{EldrowError, Result};
pub use filter::WordFilter;
pub use selection::{select, ListingLabel, Selection, SelectionMode};

/// Dictionary used when neither a flag nor the config file names one.
pub const DEFAULT_DICTIONARY: &str = "/usr/share/myspell/en_US.dic";

/// Filter an in-memory word list and apply the selection policy.
pub fn pick<R: Rng>(words: &[String], constraints: &Constraints, rng: &mut R) -> Result<Selection> {
    let filter = WordFilter::new(constraints)?;
    let candidates = filter.filter(words);
    tracing::debug!(candidates = candidates.len(), "filtered dictionary");
    select(candidates, constraints, rng)
}

/// Run one full invocation against the dictionary file named in `config`.
///
/// The pattern is compiled before the dictionary is opened.
pub fn run<R: Rng>(config: &RunConfig, rng: &mut R) -> Result<Selection> {
    let filter = WordFilter::new(&config.constraints)?;
    let words = load_dictionary(&config.dictionary)?;
    let candidates = filter.filter(&words);
    tracing::debug!(
        words = words.len(),
        candidates = candidates.len(),
        "filtered dictionary"
    );
    select(candidates, &config.constraints, rng)
}
