//! AgroVision settings - Typed configuration for the AgroVision AI service
//!
//! Settings are read from the process environment, optionally overlaid on a
//! dotenv file, with a built-in default for every required field. The result
//! is an immutable [`Settings`] value that is constructed once at startup and
//! handed to every component that needs it.
//!
//! # Modules
//!
//! - **config**: Settings record, loader, value sources and constants
//! - **errors**: Configuration and CLI error types
//! - **cli**: Command-line interface of the operator tool
//! - **commands**: CLI command implementations
//!
//! # Usage
//!
//! ```rust,no_run
//! use agrovision_settings::SettingsLoader;
//!
//! let settings = SettingsLoader::new().load()?.into_shared();
//! println!("running {} jobs at once", settings.max_concurrent_jobs);
//! # Ok::<(), agrovision_settings::ConfigurationError>(())
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod errors;

// Re-export commonly used types at crate root
pub use config::{LogLevel, Settings, SettingsLoader, SharedSettings};
pub use errors::{AppError, AppResult, ConfigResult, ConfigurationError};
