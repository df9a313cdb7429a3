//! Get command - Prints a single setting.

use std::io::Write;

use crate::cli::args::GetArgs;
use crate::config::*;
use crate::errors::{AppError, AppResult};

/// Execute the get command
pub fn execute(args: GetArgs, settings: &Settings, out: &mut impl Write) -> AppResult<()> {
    let field = args.field.to_ascii_lowercase();
    let value = lookup(settings, &field).ok_or(AppError::UnknownField(args.field))?;

    if is_secret_field(&field) && !value.is_empty() {
        writeln!(out, "{}", REDACTED)?;
    } else {
        writeln!(out, "{}", value)?;
    }
    Ok(())
}

/// Effective value of a field as text; absent optional fields are empty
fn lookup(settings: &Settings, field: &str) -> Option<String> {
    let optional = |v: Option<&str>| v.unwrap_or_default().to_string();

    let value = match field {
        POSTGRES_SERVER => settings.postgres_server.clone(),
        POSTGRES_USER => settings.postgres_user.clone(),
        POSTGRES_PASSWORD => settings.postgres_password().to_string(),
        POSTGRES_DB => settings.postgres_db.clone(),
        REDIS_URL => settings.redis_url().to_string(),
        SECRET_KEY => settings.secret_key().to_string(),
        API_SECRET_KEY => settings.api_secret_key().to_string(),
        ENVIRONMENT => settings.environment.clone(),
        NODE_ENV => settings.node_env.clone(),
        MODEL_PATH => settings.model_path.clone(),
        PROCESSING_TIMEOUT => settings.processing_timeout.to_string(),
        MAX_CONCURRENT_JOBS => settings.max_concurrent_jobs.to_string(),
        UPLOAD_DIR => settings.upload_dir.clone(),
        MAX_FILE_SIZE => settings.max_file_size.to_string(),
        ALLOWED_VIDEO_FORMATS => settings.allowed_video_formats.clone(),
        LOG_LEVEL => settings.log_level.to_string(),
        WEATHER_API_KEY => optional(settings.weather_api_key()),
        SENTRY_DSN => optional(settings.sentry_dsn()),
        AWS_ACCESS_KEY_ID => optional(settings.aws_access_key_id()),
        AWS_SECRET_ACCESS_KEY => optional(settings.aws_secret_access_key()),
        AWS_REGION => settings.aws_region.clone(),
        AWS_S3_BUCKET => optional(settings.aws_s3_bucket.as_deref()),
        _ => return None,
    };
    Some(value)
}
