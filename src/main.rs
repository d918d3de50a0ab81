//! Swadeshi binary entrypoint kept minimal. The full runtime lives in `swadeshi::app`.

mod args;

use std::fmt;
use std::process::ExitCode;
use std::sync::{Arc, OnceLock};

use clap::Parser;
use swadeshi::api::ApiClient;
use swadeshi::app::{self, RunOptions};
use swadeshi::config::{
    KeyValueStore, SettingsFile, backend_url_from_env, load_settings, logs_dir, settings_path,
};

struct SwadeshiTimer;

impl tracing_subscriber::fmt::time::FormatTime for SwadeshiTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> fmt::Result {
        write!(w, "{}", chrono::Local::now().format("%Y-%m-%dT%H:%M:%S%.3f"))
    }
}

static LOG_GUARD: OnceLock<tracing_appender::non_blocking::WorkerGuard> = OnceLock::new();

/// What: Build the log filter from `RUST_LOG`, falling back to `level`.
fn env_filter(level: &str) -> tracing_subscriber::EnvFilter {
    tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level))
}

/// What: Initialize tracing writing to `~/.config/swadeshi/logs/swadeshi.log`.
///
/// Details:
/// - Falls back to stderr when the log file cannot be opened.
fn init_logging(level: &str) {
    let mut log_path = logs_dir();
    log_path.push("swadeshi.log");
    match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
    {
        Ok(file) => {
            let (non_blocking, guard) = tracing_appender::non_blocking(file);
            tracing_subscriber::fmt()
                .with_env_filter(env_filter(level))
                .with_target(false)
                .with_ansi(false)
                .with_writer(non_blocking)
                .with_timer(SwadeshiTimer)
                .init();
            let _ = LOG_GUARD.set(guard);
            tracing::info!(path = %log_path.display(), "logging initialized");
        }
        Err(e) => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter(level))
                .with_target(false)
                .with_ansi(true)
                .with_writer(std::io::stderr)
                .with_timer(SwadeshiTimer)
                .init();
            tracing::warn!(error = %e, "failed to open log file; using stderr");
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = args::Args::parse();
    init_logging(&args::determine_log_level(&args));

    let settings_file = settings_path();
    let settings = load_settings(&settings_file);
    let backend = backend_url_from_env(args.backend_url.as_deref(), &settings);
    let client = match ApiClient::new(backend, settings.request_timeout) {
        Ok(c) => c,
        Err(e) => {
            tracing::error!(error = %e, "failed to build HTTP client");
            eprintln!("swadeshi: {e}");
            return ExitCode::FAILURE;
        }
    };
    let storage: Arc<dyn KeyValueStore> = Arc::new(SettingsFile::new(settings_file));

    let lang = args::resolve_cli_language(args.lang.as_deref(), storage.as_ref());
    if let Some(code) = args::process_args(&args, &client, lang).await {
        return code;
    }

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "Swadeshi starting");
    let opts = RunOptions {
        client,
        storage,
        persist_theme: settings.persist_theme,
    };
    let code = match app::run(opts).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = ?err, "Application error");
            eprintln!("swadeshi: {err}");
            ExitCode::FAILURE
        }
    };
    tracing::info!("Swadeshi exited");
    code
}

#[cfg(test)]
mod tests {
    /// What: FormatTime impl writes a non-empty timestamp without panicking
    #[test]
    fn swadeshi_timer_formats_time_without_panic() {
        use tracing_subscriber::fmt::time::FormatTime;
        let mut buf = String::new();
        let mut writer = tracing_subscriber::fmt::format::Writer::new(&mut buf);
        let t = super::SwadeshiTimer;
        assert!(t.format_time(&mut writer).is_ok());
        assert!(buf.contains('T'));
    }
}
