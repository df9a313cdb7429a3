//! Application configuration module
//!
//! Loads settings from environment variables and an optional overlay file.

mod constants;
mod loader;
mod log_level;
mod settings;
mod source;

pub use constants::*;
pub use loader::SettingsLoader;
pub use log_level::{LogLevel, ParseLogLevelError};
pub use settings::{Settings, SharedSettings};
pub use source::{EnvFile, ProcessEnv, StaticVars, VarSource};

#[cfg(any(test, feature = "test-utils"))]
pub use source::MockVarSource;
