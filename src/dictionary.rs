//! Reading newline-delimited dictionaries.
//!
//! Spell-check dictionaries (hunspell/myspell `.dic` files) append affix flags
//! to a word after a slash, e.g. `cat/S`. Only the part before the first slash
//! is a candidate word.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{EldrowError, Result};

/// Strip the affix suffix from a dictionary line. Nothing else is changed.
pub fn normalize_line(line: &str) -> &str {
    match line.find('/') {
        Some(idx) => &line[..idx],
        None => line,
    }
}

/// Read every line from `reader`, normalized, in source order.
///
/// Lines are split on `\n` with a trailing `\r` dropped. Bytes that are not
/// UTF-8 (Latin-1 `.dic` files) are replaced, so such lines simply fail the
/// letter checks later instead of aborting the read.
pub fn read_words<R: BufRead>(reader: R) -> std::io::Result<Vec<String>> {
    reader
        .split(b'\n')
        .map(|line| {
            line.map(|mut bytes| {
                if bytes.last() == Some(&b'\r') {
                    bytes.pop();
                }
                normalize_line(&String::from_utf8_lossy(&bytes)).to_string()
            })
        })
        .collect()
}

/// Load a dictionary file into memory.
///
/// The file is closed before this returns, on success or failure.
pub fn load_dictionary<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();
    let resource_error = |source| EldrowError::Resource {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(resource_error)?;
    let words = read_words(BufReader::new(file)).map_err(resource_error)?;

    tracing::debug!(path = %path.display(), lines = words.len(), "loaded dictionary");
    Ok(words)
}
