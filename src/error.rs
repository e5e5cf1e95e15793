//! Error types for word selection.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::constraints::Length;

/// Everything that can end an invocation early.
#[derive(Debug, Error)]
pub enum EldrowError {
    /// The override pattern does not compile.
    #[error("invalid match pattern '{pattern}': {source}")]
    Configuration {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("invalid word length '{0}': expected a positive number or '*'")]
    InvalidLength(String),

    /// The dictionary could not be opened or read.
    #[error("failed reading dictionary {}: {source}", .path.display())]
    Resource {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("no matching words of length {length}")]
    EmptyCandidateSet { length: Length },

    #[error("config file {}: {source}", .path.display())]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("config file {}: {source}", .path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

pub type Result<T> = std::result::Result<T, EldrowError>;
