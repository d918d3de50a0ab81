use super::settings::Settings;

/// Environment variable carrying the backend origin.
pub const BACKEND_URL_ENV: &str = "SWADESHI_BACKEND_URL";

/// What: Trim whitespace and trailing slashes from a configured origin.
///
/// Output:
/// - `None` for empty input so an unset value never becomes `""`.
#[must_use]
pub fn normalize_origin(raw: &str) -> Option<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// What: Pick the backend origin from CLI flag, environment, then settings file.
///
/// Inputs:
/// - `cli`: Value of `--backend-url`, if given.
/// - `env_value`: Value of `SWADESHI_BACKEND_URL`, if set.
/// - `settings`: Parsed `settings.conf`.
///
/// Output:
/// - First non-empty normalized origin, or `None` when nothing is configured.
#[must_use]
pub fn resolve_backend_url(
    cli: Option<&str>,
    env_value: Option<&str>,
    settings: &Settings,
) -> Option<String> {
    cli.and_then(normalize_origin)
        .or_else(|| env_value.and_then(normalize_origin))
        .or_else(|| settings.backend_url.as_deref().and_then(normalize_origin))
}

/// What: Resolve the origin reading the real environment.
#[must_use]
pub fn backend_url_from_env(cli: Option<&str>, settings: &Settings) -> Option<String> {
    let env_value = std::env::var(BACKEND_URL_ENV).ok();
    let resolved = resolve_backend_url(cli, env_value.as_deref(), settings);
    match &resolved {
        Some(url) => tracing::info!(backend = %url, "backend origin configured"),
        None => tracing::warn!(
            env = BACKEND_URL_ENV,
            "no backend origin configured; every request will fail until one is set"
        ),
    }
    resolved
}
