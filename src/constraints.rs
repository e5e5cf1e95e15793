//! Word constraints.
//!
//! A [`Constraints`] value is built once from the command line and the
//! persisted config, then handed to the filter and the selection policy.
//! Absence is always an empty string or `None`, never a sentinel value.

use std::fmt;
use std::num::NonZeroUsize;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::EldrowError;

/// Requested word length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Length {
    /// Any length.
    #[default]
    Any,
    /// Exactly this many letters.
    Exact(NonZeroUsize),
}

impl Length {
    /// Exact length. `None` for zero, which is not a word length.
    pub fn exact(n: usize) -> Option<Self> {
        NonZeroUsize::new(n).map(Length::Exact)
    }
}

impl FromStr for Length {
    type Err = EldrowError;

    /// Accepts `*`, `any`, or a positive integer.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed == "*" || trimmed.eq_ignore_ascii_case("any") {
            return Ok(Length::Any);
        }
        trimmed
            .parse::<NonZeroUsize>()
            .map(Length::Exact)
            .map_err(|_| EldrowError::InvalidLength(s.to_string()))
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Length::Any => write!(f, "any"),
            Length::Exact(n) => write!(f, "{}", n),
        }
    }
}

impl Serialize for Length {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Length::Any => serializer.serialize_str("*"),
            Length::Exact(n) => serializer.serialize_u64(n.get() as u64),
        }
    }
}

/// YAML writes `length: 5` as a number and `length: "*"` as a string.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawLength {
    Number(u64),
    Text(String),
}

impl<'de> Deserialize<'de> for Length {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match RawLength::deserialize(deserializer)? {
            RawLength::Number(n) => usize::try_from(n)
                .ok()
                .and_then(NonZeroUsize::new)
                .map(Length::Exact)
                .ok_or_else(|| serde::de::Error::custom(EldrowError::InvalidLength(n.to_string()))),
            RawLength::Text(s) => s.parse().map_err(serde::de::Error::custom),
        }
    }
}

/// The full set of restrictions applied to a dictionary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Constraints {
    pub length: Length,
    /// Letters that must not appear anywhere in the word.
    pub skip_letters: String,
    /// Letters that must each appear at least once. Repeats are redundant.
    pub include_letters: String,
    /// Replaces the length and alphabetic check when set.
    pub match_pattern: Option<String>,
    pub list_all: bool,
}

impl Constraints {
    pub fn new(length: Length) -> Self {
        Self {
            length,
            ..Self::default()
        }
    }

    pub fn with_skip(mut self, letters: impl Into<String>) -> Self {
        self.skip_letters = letters.into();
        self
    }

    pub fn with_include(mut self, letters: impl Into<String>) -> Self {
        self.include_letters = letters.into();
        self
    }

    pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.match_pattern = Some(pattern.into());
        self
    }

    pub fn with_list_all(mut self, list_all: bool) -> Self {
        self.list_all = list_all;
        self
    }

    /// True when anything beyond length narrows the candidates.
    pub fn is_restricted(&self) -> bool {
        !self.skip_letters.is_empty()
            || !self.include_letters.is_empty()
            || self.match_pattern.is_some()
    }
}
