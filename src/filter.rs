//! The per-word filter pipeline.
//!
//! Each word goes through up to three checks, stopping at the first failure:
//!
//! 1. shape: the override pattern if one is set, otherwise "ASCII letters only"
//!    plus the exact length when one is requested
//! 2. include: every required letter occurs somewhere in the word
//! 3. skip: no forbidden letter occurs anywhere in the word
//!
//! Letter checks ignore ASCII case, like the shape check.

use regex::Regex;

use crate::constraints::{Constraints, Length};
use crate::error::{EldrowError, Result};

/// The first check a word must pass.
#[derive(Debug, Clone)]
enum Shape {
    /// Override pattern, anchored at both ends and case-insensitive.
    Pattern(Regex),
    /// ASCII letters only, at least one, with an optional exact count.
    Alphabetic(Length),
}

impl Shape {
    fn is_match(&self, word: &str) -> bool {
        match self {
            Shape::Pattern(regex) => regex.is_match(word),
            Shape::Alphabetic(length) => is_alphabetic_of(word, *length),
        }
    }
}

/// A compiled set of constraints that can be applied to words.
#[derive(Debug, Clone)]
pub struct WordFilter {
    shape: Shape,
    include: Vec<char>,
    skip: Vec<char>,
}

impl WordFilter {
    /// Compile the filter. Fails on an invalid override pattern, before any
    /// word has been looked at.
    pub fn new(constraints: &Constraints) -> Result<Self> {
        let shape = match &constraints.match_pattern {
            Some(pattern) => Shape::Pattern(anchored_pattern(pattern)?),
            None => Shape::Alphabetic(constraints.length),
        };

        Ok(Self {
            shape,
            include: lowercase_letters(&constraints.include_letters),
            skip: lowercase_letters(&constraints.skip_letters),
        })
    }

    /// Check a single normalized word.
    pub fn matches(&self, word: &str) -> bool {
        if !self.shape.is_match(word) {
            return false;
        }

        if !self.include.is_empty() && !self.include.iter().all(|&c| contains_letter(word, c)) {
            return false;
        }

        if !self.skip.is_empty() && self.skip.iter().any(|&c| contains_letter(word, c)) {
            return false;
        }

        true
    }

    /// Keep the matching words, preserving source order.
    pub fn filter<I, S>(&self, words: I) -> Vec<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        words
            .into_iter()
            .filter(|w| self.matches(w.as_ref()))
            .map(|w| w.as_ref().to_string())
            .collect()
    }
}

/// Compile `pattern` so it must match a whole word, ignoring case.
///
/// The bare pattern is compiled first: wrapped in a group, an unbalanced
/// pattern like `a)|(b` would close the group early and compile unanchored.
fn anchored_pattern(pattern: &str) -> Result<Regex> {
    let configuration_error = |source| EldrowError::Configuration {
        pattern: pattern.to_string(),
        source,
    };
    Regex::new(pattern).map_err(configuration_error)?;
    Regex::new(&format!("(?i)^(?:{})$", pattern)).map_err(configuration_error)
}

/// Letters-only check. Empty lines never pass, even with any length.
fn is_alphabetic_of(word: &str, length: Length) -> bool {
    if word.is_empty() || !word.bytes().all(|b| b.is_ascii_alphabetic()) {
        return false;
    }
    match length {
        Length::Any => true,
        Length::Exact(n) => word.len() == n.get(),
    }
}

fn lowercase_letters(letters: &str) -> Vec<char> {
    letters.chars().map(|c| c.to_ascii_lowercase()).collect()
}

fn contains_letter(word: &str, letter: char) -> bool {
    word.chars().any(|c| c.to_ascii_lowercase() == letter)
}
