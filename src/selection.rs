//! Deciding between a random pick and a full listing.
//!
//! The decision depends only on which constraints are active:
//!
//! - **Unrestricted** (at most a length): one random word, or every word when
//!   `list_all` is set.
//! - **Restricted** (include, skip or pattern): always every word, whatever
//!   `list_all` says.

use std::fmt;

use rand::Rng;

use crate::constraints::{Constraints, Length};
use crate::error::{EldrowError, Result};

/// Which output policy applies to a set of constraints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionMode {
    Unrestricted,
    Restricted,
}

impl SelectionMode {
    pub fn of(constraints: &Constraints) -> Self {
        if constraints.is_restricted() {
            SelectionMode::Restricted
        } else {
            SelectionMode::Unrestricted
        }
    }
}

/// Header shown above a listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListingLabel {
    AllOfLength(Length),
    Restrictions {
        length: Length,
        include: String,
        skip: String,
        pattern: Option<String>,
    },
}

impl fmt::Display for ListingLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListingLabel::AllOfLength(length) => write!(f, "All words of length {}:", length),
            ListingLabel::Restrictions {
                length,
                include,
                skip,
                pattern,
            } => write!(
                f,
                "Words that match the restrictions [length: {}, include: '{}', skip: '{}', match: '{}']:",
                length,
                include,
                skip,
                pattern.as_deref().unwrap_or("")
            ),
        }
    }
}

/// The outcome of one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    Single { length: Length, word: String },
    Listing { label: ListingLabel, words: Vec<String> },
}

impl Selection {
    /// Every word this selection will print.
    pub fn words(&self) -> &[String] {
        match self {
            Selection::Single { word, .. } => std::slice::from_ref(word),
            Selection::Listing { words, .. } => words,
        }
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selection::Single { length, word } => {
                write!(f, "Returning a random {} letter word: {}", length, word)
            }
            Selection::Listing { label, words } => {
                write!(f, "{}", label)?;
                for word in words {
                    write!(f, "\n\t{}", word)?;
                }
                Ok(())
            }
        }
    }
}

/// Apply the selection policy to an already filtered candidate set.
///
/// Fails with [`EldrowError::EmptyCandidateSet`] only when a random pick is
/// requested from zero candidates. Empty listings are valid.
pub fn select<R: Rng>(
    mut candidates: Vec<String>,
    constraints: &Constraints,
    rng: &mut R,
) -> Result<Selection> {
    let length = constraints.length;

    match SelectionMode::of(constraints) {
        SelectionMode::Restricted => Ok(Selection::Listing {
            label: ListingLabel::Restrictions {
                length,
                include: constraints.include_letters.clone(),
                skip: constraints.skip_letters.clone(),
                pattern: constraints.match_pattern.clone(),
            },
            words: candidates,
        }),
        SelectionMode::Unrestricted if constraints.list_all => Ok(Selection::Listing {
            label: ListingLabel::AllOfLength(length),
            words: candidates,
        }),
        SelectionMode::Unrestricted => {
            if candidates.is_empty() {
                return Err(EldrowError::EmptyCandidateSet { length });
            }
            let idx = rng.random_range(0..candidates.len());
            let word = candidates.swap_remove(idx);
            Ok(Selection::Single { length, word })
        }
    }
}
