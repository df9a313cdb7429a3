//! Application settings assembled from raw environment values.

use std::fmt::Display;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use validator::Validate;

use super::constants::*;
use super::log_level::LogLevel;
use super::source::RawValues;
use crate::errors::{ConfigResult, ConfigurationError};

/// Settings shared read-only across every component of the process
pub type SharedSettings = Arc<Settings>;

/// Application configuration.
///
/// Built once at startup by [`SettingsLoader`](super::SettingsLoader) and
/// never mutated afterwards. Secret material is kept in private fields and
/// exposed through accessors so it stays out of `Debug` and serialized output.
#[derive(Clone, PartialEq, Eq, Serialize, Validate)]
pub struct Settings {
    // Database
    pub postgres_server: String,
    pub postgres_user: String,
    #[serde(skip_serializing)]
    postgres_password: String,
    pub postgres_db: String,

    // Cache, the URL may embed a password
    #[serde(skip_serializing)]
    redis_url: String,

    // Security
    #[serde(skip_serializing)]
    secret_key: String,
    #[serde(skip_serializing)]
    api_secret_key: String,

    // Environment
    pub environment: String,
    pub node_env: String,

    // Processing
    pub model_path: String,
    /// Seconds
    pub processing_timeout: u64,
    #[validate(range(min = 1, message = "max_concurrent_jobs must be at least 1"))]
    pub max_concurrent_jobs: u32,

    // Uploads
    pub upload_dir: String,
    /// Bytes
    pub max_file_size: u64,
    pub allowed_video_formats: String,

    // Logging
    pub log_level: LogLevel,

    // External services
    #[serde(skip_serializing)]
    weather_api_key: Option<String>,
    #[serde(skip_serializing)]
    sentry_dsn: Option<String>,

    // AWS
    #[serde(skip_serializing)]
    aws_access_key_id: Option<String>,
    #[serde(skip_serializing)]
    aws_secret_access_key: Option<String>,
    pub aws_region: String,
    pub aws_s3_bucket: Option<String>,
}

impl std::fmt::Debug for Settings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let redact = |v: &Option<String>| v.as_ref().map(|_| REDACTED);

        f.debug_struct("Settings")
            .field("postgres_server", &self.postgres_server)
            .field("postgres_user", &self.postgres_user)
            .field("postgres_password", &REDACTED)
            .field("postgres_db", &self.postgres_db)
            .field("redis_url", &REDACTED)
            .field("secret_key", &REDACTED)
            .field("api_secret_key", &REDACTED)
            .field("environment", &self.environment)
            .field("node_env", &self.node_env)
            .field("model_path", &self.model_path)
            .field("processing_timeout", &self.processing_timeout)
            .field("max_concurrent_jobs", &self.max_concurrent_jobs)
            .field("upload_dir", &self.upload_dir)
            .field("max_file_size", &self.max_file_size)
            .field("allowed_video_formats", &self.allowed_video_formats)
            .field("log_level", &self.log_level)
            .field("weather_api_key", &redact(&self.weather_api_key))
            .field("sentry_dsn", &redact(&self.sentry_dsn))
            .field("aws_access_key_id", &redact(&self.aws_access_key_id))
            .field("aws_secret_access_key", &redact(&self.aws_secret_access_key))
            .field("aws_region", &self.aws_region)
            .field("aws_s3_bucket", &self.aws_s3_bucket)
            .finish()
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            postgres_server: DEFAULT_POSTGRES_SERVER.to_string(),
            postgres_user: DEFAULT_POSTGRES_USER.to_string(),
            postgres_password: DEFAULT_POSTGRES_PASSWORD.to_string(),
            postgres_db: DEFAULT_POSTGRES_DB.to_string(),
            redis_url: DEFAULT_REDIS_URL.to_string(),
            secret_key: DEFAULT_SECRET_KEY.to_string(),
            api_secret_key: DEFAULT_API_SECRET_KEY.to_string(),
            environment: DEFAULT_ENVIRONMENT.to_string(),
            node_env: DEFAULT_NODE_ENV.to_string(),
            model_path: DEFAULT_MODEL_PATH.to_string(),
            processing_timeout: DEFAULT_PROCESSING_TIMEOUT_SECONDS,
            max_concurrent_jobs: DEFAULT_MAX_CONCURRENT_JOBS,
            upload_dir: DEFAULT_UPLOAD_DIR.to_string(),
            max_file_size: DEFAULT_MAX_FILE_SIZE,
            allowed_video_formats: DEFAULT_ALLOWED_VIDEO_FORMATS.to_string(),
            log_level: LogLevel::default(),
            weather_api_key: None,
            sentry_dsn: None,
            aws_access_key_id: None,
            aws_secret_access_key: None,
            aws_region: DEFAULT_AWS_REGION.to_string(),
            aws_s3_bucket: None,
        }
    }
}

impl Settings {
    /// Load configuration from the process environment and `.env`.
    ///
    /// Shorthand for `SettingsLoader::new().load()`.
    pub fn from_env() -> ConfigResult<Self> {
        super::SettingsLoader::new().load()
    }

    /// Claim every known field from `raw`, coercing and validating values.
    ///
    /// Keys left in `raw` afterwards were not recognized.
    pub(super) fn from_values(raw: &mut RawValues) -> ConfigResult<Self> {
        let settings = Self {
            postgres_server: text(raw, POSTGRES_SERVER, DEFAULT_POSTGRES_SERVER),
            postgres_user: text(raw, POSTGRES_USER, DEFAULT_POSTGRES_USER),
            postgres_password: text(raw, POSTGRES_PASSWORD, DEFAULT_POSTGRES_PASSWORD),
            postgres_db: text(raw, POSTGRES_DB, DEFAULT_POSTGRES_DB),
            redis_url: text(raw, REDIS_URL, DEFAULT_REDIS_URL),
            secret_key: text(raw, SECRET_KEY, DEFAULT_SECRET_KEY),
            api_secret_key: text(raw, API_SECRET_KEY, DEFAULT_API_SECRET_KEY),
            environment: text(raw, ENVIRONMENT, DEFAULT_ENVIRONMENT),
            node_env: text(raw, NODE_ENV, DEFAULT_NODE_ENV),
            model_path: text(raw, MODEL_PATH, DEFAULT_MODEL_PATH),
            processing_timeout: coerce(
                raw,
                PROCESSING_TIMEOUT,
                DEFAULT_PROCESSING_TIMEOUT_SECONDS,
            )?,
            max_concurrent_jobs: coerce(raw, MAX_CONCURRENT_JOBS, DEFAULT_MAX_CONCURRENT_JOBS)?,
            upload_dir: text(raw, UPLOAD_DIR, DEFAULT_UPLOAD_DIR),
            max_file_size: coerce(raw, MAX_FILE_SIZE, DEFAULT_MAX_FILE_SIZE)?,
            allowed_video_formats: text(
                raw,
                ALLOWED_VIDEO_FORMATS,
                DEFAULT_ALLOWED_VIDEO_FORMATS,
            ),
            log_level: coerce(raw, LOG_LEVEL, LogLevel::default())?,
            weather_api_key: raw.take(WEATHER_API_KEY),
            sentry_dsn: raw.take(SENTRY_DSN),
            aws_access_key_id: raw.take(AWS_ACCESS_KEY_ID),
            aws_secret_access_key: raw.take(AWS_SECRET_ACCESS_KEY),
            aws_region: text(raw, AWS_REGION, DEFAULT_AWS_REGION),
            aws_s3_bucket: raw.take(AWS_S3_BUCKET),
        };

        settings.validate()?;
        Ok(settings)
    }

    /// Wrap in an `Arc` for injection into long-lived components
    pub fn into_shared(self) -> SharedSettings {
        Arc::new(self)
    }

    /// Cache endpoint, may carry credentials
    pub fn redis_url(&self) -> &str {
        &self.redis_url
    }

    pub fn postgres_password(&self) -> &str {
        &self.postgres_password
    }

    /// Key used for signing within the service
    pub fn secret_key(&self) -> &str {
        &self.secret_key
    }

    /// Key expected from API clients
    pub fn api_secret_key(&self) -> &str {
        &self.api_secret_key
    }

    pub fn weather_api_key(&self) -> Option<&str> {
        self.weather_api_key.as_deref()
    }

    pub fn sentry_dsn(&self) -> Option<&str> {
        self.sentry_dsn.as_deref()
    }

    pub fn aws_access_key_id(&self) -> Option<&str> {
        self.aws_access_key_id.as_deref()
    }

    pub fn aws_secret_access_key(&self) -> Option<&str> {
        self.aws_secret_access_key.as_deref()
    }

    /// Connection URL built from the individual Postgres fields.
    ///
    /// Contains the password, never log it.
    pub fn database_url(&self) -> String {
        format!(
            "postgres://{}:{}@{}/{}",
            self.postgres_user, self.postgres_password, self.postgres_server, self.postgres_db
        )
    }

    pub fn processing_timeout_duration(&self) -> Duration {
        Duration::from_secs(self.processing_timeout)
    }

    /// Allowed upload extensions, lowercased without empty entries
    pub fn allowed_formats(&self) -> Vec<String> {
        self.allowed_video_formats
            .split(',')
            .map(|f| f.trim().trim_start_matches('.').to_ascii_lowercase())
            .filter(|f| !f.is_empty())
            .collect()
    }

    /// Check an extension (`mp4`, `.MP4`) against the allowed formats
    pub fn is_format_allowed(&self, extension: &str) -> bool {
        let wanted = extension.trim().trim_start_matches('.').to_ascii_lowercase();
        !wanted.is_empty() && self.allowed_formats().iter().any(|f| *f == wanted)
    }

    pub fn accepts_file_size(&self, bytes: u64) -> bool {
        bytes <= self.max_file_size
    }

    /// Only `environment` is consulted, `node_env` is independent
    pub fn is_production(&self) -> bool {
        self.environment.eq_ignore_ascii_case(PRODUCTION_ENVIRONMENT)
    }

    pub fn has_aws_credentials(&self) -> bool {
        self.aws_access_key_id.is_some() && self.aws_secret_access_key.is_some()
    }

    /// Secret fields still holding their built-in development values
    pub fn insecure_defaults(&self) -> Vec<&'static str> {
        [
            (POSTGRES_PASSWORD, self.postgres_password == DEFAULT_POSTGRES_PASSWORD),
            (SECRET_KEY, self.secret_key == DEFAULT_SECRET_KEY),
            (API_SECRET_KEY, self.api_secret_key == DEFAULT_API_SECRET_KEY),
        ]
        .into_iter()
        .filter_map(|(field, is_default)| is_default.then_some(field))
        .collect()
    }
}

/// String fields pass through unchanged
fn text(raw: &mut RawValues, field: &str, default: &str) -> String {
    raw.take(field).unwrap_or_else(|| default.to_string())
}

/// Parse a typed field, surrounding whitespace is ignored
fn coerce<T>(raw: &mut RawValues, field: &str, default: T) -> ConfigResult<T>
where
    T: FromStr,
    T::Err: Display,
{
    match raw.take(field) {
        Some(value) => value.trim().parse().map_err(|e: T::Err| {
            ConfigurationError::invalid_value(field, format!("{:?} could not be parsed: {}", value, e))
        }),
        None => Ok(default),
    }
}
