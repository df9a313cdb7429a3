//! Setting names and built-in defaults.
//!
//! Centralized location for every key the loader recognizes and the value it
//! falls back to. Keys are matched case-insensitively, so they are stored in
//! lowercase here.

// =============================================================================
// Overlay File
// =============================================================================

/// Overlay file read from the working directory when none is given
pub const DEFAULT_ENV_FILE: &str = ".env";

// =============================================================================
// Database
// =============================================================================

pub const POSTGRES_SERVER: &str = "postgres_server";
pub const POSTGRES_USER: &str = "postgres_user";
pub const POSTGRES_PASSWORD: &str = "postgres_password";
pub const POSTGRES_DB: &str = "postgres_db";

pub const DEFAULT_POSTGRES_SERVER: &str = "localhost";
pub const DEFAULT_POSTGRES_USER: &str = "agrovision";
pub const DEFAULT_POSTGRES_PASSWORD: &str = "0106800";
pub const DEFAULT_POSTGRES_DB: &str = "agrovision_dev";

// =============================================================================
// Cache (Redis)
// =============================================================================

pub const REDIS_URL: &str = "redis_url";

/// Default Redis URL (for development)
pub const DEFAULT_REDIS_URL: &str = "redis://localhost:6379";

// =============================================================================
// Security
// =============================================================================

pub const SECRET_KEY: &str = "secret_key";
pub const API_SECRET_KEY: &str = "api_secret_key";

/// Development-only signing key, must be overridden in production
pub const DEFAULT_SECRET_KEY: &str = "dev-secret-key";

/// Development-only API key, must be overridden in production
pub const DEFAULT_API_SECRET_KEY: &str = "dev-api-secret-change-in-production";

// =============================================================================
// Environment
// =============================================================================

pub const ENVIRONMENT: &str = "environment";
pub const NODE_ENV: &str = "node_env";

pub const DEFAULT_ENVIRONMENT: &str = "development";
pub const DEFAULT_NODE_ENV: &str = "development";

/// Environment name that enables production checks
pub const PRODUCTION_ENVIRONMENT: &str = "production";

// =============================================================================
// Processing
// =============================================================================

pub const MODEL_PATH: &str = "model_path";
pub const PROCESSING_TIMEOUT: &str = "processing_timeout";
pub const MAX_CONCURRENT_JOBS: &str = "max_concurrent_jobs";

pub const DEFAULT_MODEL_PATH: &str = "./models";

/// Default processing timeout in seconds (5 minutes)
pub const DEFAULT_PROCESSING_TIMEOUT_SECONDS: u64 = 300;

pub const DEFAULT_MAX_CONCURRENT_JOBS: u32 = 3;

// =============================================================================
// Uploads
// =============================================================================

pub const UPLOAD_DIR: &str = "upload_dir";
pub const MAX_FILE_SIZE: &str = "max_file_size";
pub const ALLOWED_VIDEO_FORMATS: &str = "allowed_video_formats";

pub const DEFAULT_UPLOAD_DIR: &str = "./uploads";

/// Default upload limit in bytes (500 MB)
pub const DEFAULT_MAX_FILE_SIZE: u64 = 500_000_000;

pub const DEFAULT_ALLOWED_VIDEO_FORMATS: &str = "mp4,avi,mov,mkv";

// =============================================================================
// Logging
// =============================================================================

pub const LOG_LEVEL: &str = "log_level";

// =============================================================================
// External Services (optional)
// =============================================================================

pub const WEATHER_API_KEY: &str = "weather_api_key";
pub const SENTRY_DSN: &str = "sentry_dsn";

// =============================================================================
// AWS
// =============================================================================

pub const AWS_ACCESS_KEY_ID: &str = "aws_access_key_id";
pub const AWS_SECRET_ACCESS_KEY: &str = "aws_secret_access_key";
pub const AWS_REGION: &str = "aws_region";
pub const AWS_S3_BUCKET: &str = "aws_s3_bucket";

pub const DEFAULT_AWS_REGION: &str = "us-east-1";

// =============================================================================
// Field Catalog
// =============================================================================

/// Every recognized setting, in declaration order
pub const FIELD_NAMES: &[&str] = &[
    POSTGRES_SERVER,
    POSTGRES_USER,
    POSTGRES_PASSWORD,
    POSTGRES_DB,
    REDIS_URL,
    SECRET_KEY,
    API_SECRET_KEY,
    ENVIRONMENT,
    NODE_ENV,
    MODEL_PATH,
    PROCESSING_TIMEOUT,
    MAX_CONCURRENT_JOBS,
    UPLOAD_DIR,
    MAX_FILE_SIZE,
    ALLOWED_VIDEO_FORMATS,
    LOG_LEVEL,
    WEATHER_API_KEY,
    SENTRY_DSN,
    AWS_ACCESS_KEY_ID,
    AWS_SECRET_ACCESS_KEY,
    AWS_REGION,
    AWS_S3_BUCKET,
];

/// Settings whose values must never be printed
pub const SECRET_FIELDS: &[&str] = &[
    POSTGRES_PASSWORD,
    REDIS_URL,
    SECRET_KEY,
    API_SECRET_KEY,
    WEATHER_API_KEY,
    SENTRY_DSN,
    AWS_ACCESS_KEY_ID,
    AWS_SECRET_ACCESS_KEY,
];

/// Placeholder shown in place of secret values
pub const REDACTED: &str = "[REDACTED]";

/// Check if a setting name is recognized (case-insensitive)
pub fn is_known_field(name: &str) -> bool {
    FIELD_NAMES.iter().any(|f| f.eq_ignore_ascii_case(name))
}

/// Check if a setting holds secret material (case-insensitive)
pub fn is_secret_field(name: &str) -> bool {
    SECRET_FIELDS.iter().any(|f| f.eq_ignore_ascii_case(name))
}
