//! Raw `KEY=VALUE` sources feeding the settings loader.
//!
//! Sources only hand out string pairs. Matching against known fields,
//! precedence and coercion all happen in the loader.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Provider of raw key/value pairs.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait VarSource: Send + Sync {
    /// Short description used in log lines
    fn describe(&self) -> String;

    /// All pairs currently provided by this source
    fn vars(&self) -> Vec<(String, String)>;
}

/// The variables of the running process.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl VarSource for ProcessEnv {
    fn describe(&self) -> String {
        "process environment".to_string()
    }

    fn vars(&self) -> Vec<(String, String)> {
        // Non-UTF-8 entries cannot name a setting, skip them instead of panicking
        std::env::vars_os()
            .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
            .collect()
    }
}

/// A dotenv-style overlay file.
///
/// The file is parsed without touching the process environment. A missing
/// file yields no pairs.
#[derive(Debug, Clone)]
pub struct EnvFile {
    path: PathBuf,
}

impl EnvFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl VarSource for EnvFile {
    fn describe(&self) -> String {
        format!("env file {}", self.path.display())
    }

    fn vars(&self) -> Vec<(String, String)> {
        let iter = match dotenvy::from_path_iter(&self.path) {
            Ok(iter) => iter,
            Err(e) if e.not_found() => {
                tracing::debug!(path = %self.path.display(), "No env file found, skipping overlay");
                return Vec::new();
            }
            Err(e) => {
                tracing::warn!(path = %self.path.display(), "Failed to open env file: {}", e);
                return Vec::new();
            }
        };

        let mut pairs = Vec::new();
        for item in iter {
            match item {
                Ok(pair) => pairs.push(pair),
                Err(dotenvy::Error::Io(e)) => {
                    tracing::warn!(path = %self.path.display(), "Failed to read env file: {}", e);
                    break;
                }
                Err(e) => {
                    tracing::warn!(path = %self.path.display(), "Skipping malformed env file entry: {}", e);
                }
            }
        }
        pairs
    }
}

/// An explicit snapshot of variables, used in place of the process
/// environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticVars {
    pairs: Vec<(String, String)>,
}

impl<K, V> FromIterator<(K, V)> for StaticVars
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            pairs: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

impl VarSource for StaticVars {
    fn describe(&self) -> String {
        format!("{} explicit variables", self.pairs.len())
    }

    fn vars(&self) -> Vec<(String, String)> {
        self.pairs.clone()
    }
}

/// Case-insensitive view over merged source pairs.
///
/// Later layers win. Values are removed as fields claim them, so whatever is
/// left at the end was not recognized.
#[derive(Debug, Default)]
pub(crate) struct RawValues {
    values: HashMap<String, String>,
}

impl RawValues {
    /// Apply a source on top of what is already present
    pub(crate) fn layer(&mut self, mut pairs: Vec<(String, String)>) {
        // Same-source collisions differing only in case resolve the same way every time
        pairs.sort();
        for (key, value) in pairs {
            self.values.insert(key.to_ascii_lowercase(), value);
        }
    }

    /// Claim the raw value of a field, if any source provided one
    pub(crate) fn take(&mut self, field: &str) -> Option<String> {
        self.values.remove(field)
    }

    /// Number of unclaimed keys
    pub(crate) fn len(&self) -> usize {
        self.values.len()
    }
}
