//! Resolving the run configuration.
//!
//! Values come from three places, highest precedence first:
//!
//! 1. command-line flags ([`Overrides`])
//! 2. the persisted YAML file ([`Settings`]), usually `~/.config/eldrow.yaml`
//! 3. built-in defaults ([`DEFAULT_DICTIONARY`], any length)
//!
//! Only the dictionary and the length are persisted. Letter restrictions and
//! patterns are per-invocation.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::constraints::{Constraints, Length};
use crate::error::{EldrowError, Result};
use crate::DEFAULT_DICTIONARY;

/// File name inside the user config directory.
pub const CONFIG_FILE_NAME: &str = "eldrow.yaml";

/// `<user config dir>/eldrow.yaml`, if the platform has a config directory.
pub fn default_config_file() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_FILE_NAME))
}

/// Persisted settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dictionary: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length: Option<Length>,
}

impl Settings {
    /// Parse settings from YAML. An empty document yields empty settings.
    pub fn from_yaml_str(yaml: &str) -> serde_yaml::Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(yaml)
    }

    pub fn to_yaml_string(&self) -> serde_yaml::Result<String> {
        serde_yaml::to_string(self)
    }

    /// Load settings from `path`. A missing file is `Ok(None)`.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Option<Self>> {
        let path = path.as_ref();
        let yaml = match fs::read_to_string(path) {
            Ok(yaml) => yaml,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(EldrowError::ConfigIo {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        Self::from_yaml_str(&yaml)
            .map(Some)
            .map_err(|source| EldrowError::ConfigParse {
                path: path.to_path_buf(),
                source,
            })
    }

    /// Write settings to `path`, creating the parent directory if needed.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let io_error = |source| EldrowError::ConfigIo {
            path: path.to_path_buf(),
            source,
        };

        let yaml = self.to_yaml_string().map_err(|source| EldrowError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(io_error)?;
        }
        fs::write(path, yaml).map_err(io_error)?;
        restrict_permissions(path).map_err(io_error)
    }
}

#[cfg(unix)]
fn restrict_permissions(path: &Path) -> io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(0o600))
}

#[cfg(not(unix))]
fn restrict_permissions(_path: &Path) -> io::Result<()> {
    Ok(())
}

/// Values given explicitly for this invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    pub dictionary: Option<PathBuf>,
    pub length: Option<Length>,
    pub skip: Option<String>,
    pub include: Option<String>,
    pub pattern: Option<String>,
    pub list_all: bool,
}

/// Fully resolved configuration for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub dictionary: PathBuf,
    pub constraints: Constraints,
}

impl RunConfig {
    /// The part of this configuration that is worth persisting.
    pub fn settings(&self) -> Settings {
        Settings {
            dictionary: Some(self.dictionary.clone()),
            length: Some(self.constraints.length),
        }
    }
}

/// Merge flags, persisted settings, and defaults.
///
/// Empty strings count as "not given", so `-m ''` does not turn on restricted
/// mode.
pub fn resolve(overrides: Overrides, persisted: Option<&Settings>) -> RunConfig {
    let dictionary = non_empty_path(overrides.dictionary)
        .or_else(|| persisted.and_then(|s| non_empty_path(s.dictionary.clone())))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DICTIONARY));

    let length = overrides
        .length
        .or_else(|| persisted.and_then(|s| s.length))
        .unwrap_or_default();

    RunConfig {
        dictionary,
        constraints: Constraints {
            length,
            skip_letters: overrides.skip.unwrap_or_default(),
            include_letters: overrides.include.unwrap_or_default(),
            match_pattern: overrides.pattern.filter(|p| !p.is_empty()),
            list_all: overrides.list_all,
        },
    }
}

fn non_empty_path(path: Option<PathBuf>) -> Option<PathBuf> {
    path.filter(|p| !p.as_os_str().is_empty())
}

/// Load persisted settings, logging instead of failing.
pub fn load_persisted(path: &Path) -> Option<Settings> {
    match Settings::load(path) {
        Ok(Some(settings)) => {
            tracing::debug!(path = %path.display(), ?settings, "loaded config file");
            Some(settings)
        }
        Ok(None) => None,
        Err(e) => {
            tracing::warn!("ignoring {}", e);
            None
        }
    }
}

/// Persist the resolved dictionary and length unless a config file already
/// exists. Returns whether a file was written.
pub fn save_if_absent(path: &Path, run: &RunConfig) -> Result<bool> {
    if path.exists() {
        return Ok(false);
    }
    run.settings().save(path)?;
    tracing::info!(path = %path.display(), "saved config file");
    Ok(true)
}
