//! Settings loader integration tests.
//!
//! Most tests pass an explicit variable snapshot so they never depend on the
//! environment of the test runner.

use std::io::Write;
use std::thread;

use agrovision_settings::config::{DEFAULT_ALLOWED_VIDEO_FORMATS, MAX_CONCURRENT_JOBS, MAX_FILE_SIZE};
use agrovision_settings::{ConfigurationError, LogLevel, Settings, SettingsLoader};

fn load(vars: &[(&str, &str)]) -> Result<Settings, ConfigurationError> {
    SettingsLoader::new()
        .without_env_file()
        .with_vars(vars.iter().copied())
        .load()
}

fn overlay(lines: &[&str]) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    for line in lines {
        writeln!(file, "{}", line).unwrap();
    }
    file
}

// =============================================================================
// Defaults
// =============================================================================

#[test]
fn test_empty_environment_yields_defaults() {
    let settings = load(&[]).unwrap();

    assert_eq!(settings.postgres_server, "localhost");
    assert_eq!(settings.postgres_user, "agrovision");
    assert_eq!(settings.postgres_password(), "0106800");
    assert_eq!(settings.postgres_db, "agrovision_dev");
    assert_eq!(settings.redis_url(), "redis://localhost:6379");
    assert_eq!(settings.secret_key(), "dev-secret-key");
    assert_eq!(settings.api_secret_key(), "dev-api-secret-change-in-production");
    assert_eq!(settings.environment, "development");
    assert_eq!(settings.node_env, "development");
    assert_eq!(settings.model_path, "./models");
    assert_eq!(settings.processing_timeout, 300);
    assert_eq!(settings.max_concurrent_jobs, 3);
    assert_eq!(settings.upload_dir, "./uploads");
    assert_eq!(settings.max_file_size, 500_000_000);
    assert_eq!(settings.allowed_video_formats, DEFAULT_ALLOWED_VIDEO_FORMATS);
    assert_eq!(settings.log_level, LogLevel::Info);
    assert_eq!(settings.aws_region, "us-east-1");
    assert_eq!(settings, Settings::default());
}

#[test]
fn test_optional_fields_absent_by_default() {
    let settings = load(&[]).unwrap();

    assert!(settings.weather_api_key().is_none());
    assert!(settings.sentry_dsn().is_none());
    assert!(settings.aws_access_key_id().is_none());
    assert!(settings.aws_secret_access_key().is_none());
    assert!(settings.aws_s3_bucket.is_none());
}

// =============================================================================
// Overrides
// =============================================================================

#[test]
fn test_variable_overrides_default_and_unsetting_restores_it() {
    let overridden = load(&[("REDIS_URL", "redis://cache.internal:6380")]).unwrap();
    assert_eq!(overridden.redis_url(), "redis://cache.internal:6380");

    let restored = load(&[]).unwrap();
    assert_eq!(restored.redis_url(), "redis://localhost:6379");
}

#[test]
fn test_optional_field_equals_provided_string() {
    let settings = load(&[
        ("SENTRY_DSN", "https://key@sentry.example.com/42"),
        ("AWS_S3_BUCKET", "agrovision-videos"),
    ])
    .unwrap();

    assert_eq!(
        settings.sentry_dsn(),
        Some("https://key@sentry.example.com/42")
    );
    assert_eq!(settings.aws_s3_bucket.as_deref(), Some("agrovision-videos"));
}

#[test]
fn test_keys_are_case_insensitive() {
    let settings = load(&[
        ("max_concurrent_jobs", "5"),
        ("Log_Level", "WARNING"),
        ("AWS_REGION", "eu-central-1"),
    ])
    .unwrap();

    assert_eq!(settings.max_concurrent_jobs, 5);
    assert_eq!(settings.log_level, LogLevel::Warning);
    assert_eq!(settings.aws_region, "eu-central-1");
}

#[test]
fn test_unrecognized_variables_are_ignored() {
    let settings = load(&[
        ("PATH", "/usr/bin"),
        ("DATABASE_URL", "postgres://elsewhere"),
        ("NEXT_PUBLIC_API_URL", "http://localhost:8080"),
    ])
    .unwrap();

    assert_eq!(settings, Settings::default());
}

#[test]
fn test_environment_discriminators_stay_independent() {
    let settings = load(&[("NODE_ENV", "production")]).unwrap();

    assert_eq!(settings.node_env, "production");
    assert_eq!(settings.environment, "development");
    assert!(!settings.is_production());
}

// =============================================================================
// Coercion Failures
// =============================================================================

#[test]
fn test_non_integer_job_count_names_field() {
    let err = load(&[("max_concurrent_jobs", "abc")]).unwrap_err();

    assert!(matches!(err, ConfigurationError::InvalidValue { .. }));
    assert_eq!(err.field(), MAX_CONCURRENT_JOBS);
    assert!(err.to_string().contains("abc"));
}

#[test]
fn test_non_integer_file_size_names_field() {
    let err = load(&[("MAX_FILE_SIZE", "500MB")]).unwrap_err();

    assert_eq!(err.field(), MAX_FILE_SIZE);
}

#[test]
fn test_zero_concurrent_jobs_rejected() {
    let err = load(&[("MAX_CONCURRENT_JOBS", "0")]).unwrap_err();

    assert!(matches!(err, ConfigurationError::OutOfRange { .. }));
    assert_eq!(err.field(), MAX_CONCURRENT_JOBS);
}

#[test]
fn test_empty_integer_value_rejected() {
    let err = load(&[("PROCESSING_TIMEOUT", "")]).unwrap_err();

    assert_eq!(err.field(), "processing_timeout");
}

// =============================================================================
// Overlay File
// =============================================================================

#[test]
fn test_precedence_env_over_file_over_default() {
    let file = overlay(&[
        "MAX_CONCURRENT_JOBS=4",
        "MODEL_PATH=/srv/models",
        "WEATHER_API_KEY=from-file",
    ]);

    let settings = SettingsLoader::new()
        .env_file(file.path())
        .with_vars([("MAX_CONCURRENT_JOBS", "9")])
        .load()
        .unwrap();

    assert_eq!(settings.max_concurrent_jobs, 9);
    assert_eq!(settings.model_path, "/srv/models");
    assert_eq!(settings.weather_api_key(), Some("from-file"));
    assert_eq!(settings.upload_dir, "./uploads");
}

#[test]
fn test_missing_overlay_file_is_not_an_error() {
    let dir = tempfile::tempdir().unwrap();

    let settings = SettingsLoader::new()
        .env_file(dir.path().join(".env"))
        .with_vars(Vec::<(String, String)>::new())
        .load()
        .unwrap();

    assert_eq!(settings, Settings::default());
}

#[test]
fn test_overlay_unknown_keys_ignored() {
    let file = overlay(&["FRONTEND_PORT=3000", "LOG_LEVEL=error"]);

    let settings = SettingsLoader::new()
        .env_file(file.path())
        .with_vars(Vec::<(String, String)>::new())
        .load()
        .unwrap();

    assert_eq!(settings.log_level, LogLevel::Error);
}

#[test]
fn test_invalid_overlay_value_fails_construction() {
    let file = overlay(&["PROCESSING_TIMEOUT=soon"]);

    let err = SettingsLoader::new()
        .env_file(file.path())
        .with_vars(Vec::<(String, String)>::new())
        .load()
        .unwrap_err();

    assert_eq!(err.field(), "processing_timeout");
}

// =============================================================================
// Determinism and Sharing
// =============================================================================

#[test]
fn test_identical_inputs_give_equal_settings() {
    let vars = [
        ("ENVIRONMENT", "staging"),
        ("MAX_FILE_SIZE", "1024"),
        ("AWS_ACCESS_KEY_ID", "AKIAEXAMPLE"),
    ];

    assert_eq!(load(&vars).unwrap(), load(&vars).unwrap());
}

#[test]
fn test_shared_settings_readable_across_threads() {
    let settings = load(&[("MAX_CONCURRENT_JOBS", "2")]).unwrap().into_shared();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let settings = settings.clone();
            thread::spawn(move || settings.max_concurrent_jobs)
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), 2);
    }
}

// =============================================================================
// Process Environment
// =============================================================================

#[test]
fn test_reads_process_environment() {
    temp_env::with_vars(
        [
            ("MAX_CONCURRENT_JOBS", Some("7")),
            ("max_concurrent_jobs", None),
            ("WEATHER_API_KEY", Some("weather-from-env")),
        ],
        || {
            let settings = SettingsLoader::new().without_env_file().load().unwrap();

            assert_eq!(settings.max_concurrent_jobs, 7);
            assert_eq!(settings.weather_api_key(), Some("weather-from-env"));
        },
    );
}

#[test]
fn test_process_environment_beats_overlay() {
    let file = overlay(&["UPLOAD_DIR=/from/file", "MODEL_PATH=/file/models"]);

    temp_env::with_vars(
        [("UPLOAD_DIR", Some("/from/env")), ("MODEL_PATH", None)],
        || {
            let settings = SettingsLoader::new().env_file(file.path()).load().unwrap();

            assert_eq!(settings.upload_dir, "/from/env");
            assert_eq!(settings.model_path, "/file/models");
        },
    );
}
