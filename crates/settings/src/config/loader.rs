//! Settings loader combining the process environment, an optional overlay
//! file and built-in defaults.
//!
//! Precedence, per field: environment variable > overlay file > default.
//! Keys are matched case-insensitively and unknown keys are dropped.

use std::path::PathBuf;

use super::constants::DEFAULT_ENV_FILE;
use super::settings::Settings;
use super::source::{EnvFile, ProcessEnv, RawValues, StaticVars, VarSource};
use crate::errors::ConfigResult;

/// Builder for a single [`Settings`] construction.
pub struct SettingsLoader {
    env: Box<dyn VarSource>,
    overlay: Option<Box<dyn VarSource>>,
}

impl Default for SettingsLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl SettingsLoader {
    /// Process environment overlaid on `.env` from the working directory
    pub fn new() -> Self {
        Self {
            env: Box::new(ProcessEnv),
            overlay: Some(Box::new(EnvFile::new(DEFAULT_ENV_FILE))),
        }
    }

    /// Read the overlay from `path` instead of `.env`
    pub fn env_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.overlay = Some(Box::new(EnvFile::new(path)));
        self
    }

    /// Do not read any overlay file
    pub fn without_env_file(mut self) -> Self {
        self.overlay = None;
        self
    }

    /// Use an explicit snapshot in place of the process environment
    pub fn with_vars<I, K, V>(self, vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.with_env_source(vars.into_iter().collect::<StaticVars>())
    }

    /// Replace the highest-precedence source
    pub fn with_env_source(mut self, source: impl VarSource + 'static) -> Self {
        self.env = Box::new(source);
        self
    }

    /// Replace the overlay with an arbitrary source
    pub fn with_overlay_source(mut self, source: impl VarSource + 'static) -> Self {
        self.overlay = Some(Box::new(source));
        self
    }

    /// Build the settings.
    ///
    /// Fails only when a provided value cannot be coerced to its field's type
    /// or violates its range.
    pub fn load(&self) -> ConfigResult<Settings> {
        let mut raw = RawValues::default();

        if let Some(overlay) = &self.overlay {
            let pairs = overlay.vars();
            tracing::debug!(source = %overlay.describe(), entries = pairs.len(), "Applying overlay");
            raw.layer(pairs);
        }

        let pairs = self.env.vars();
        tracing::debug!(source = %self.env.describe(), entries = pairs.len(), "Applying environment");
        raw.layer(pairs);

        let settings = Settings::from_values(&mut raw).map_err(|e| {
            tracing::error!(field = e.field(), "Invalid configuration: {}", e);
            e
        })?;

        tracing::debug!(ignored = raw.len(), "Ignored unrecognized variables");

        if settings.is_production() {
            for field in settings.insecure_defaults() {
                tracing::warn!(field, "Production environment is using the development default");
            }
        }

        Ok(settings)
    }
}
