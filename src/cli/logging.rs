//! Logging initialization

use std::path::PathBuf;

/// Initialize logging based on the debug flag
///
/// Returns the log file path if debug logging is enabled. The TUI owns
/// stdout/stderr, so logs only ever go to a file.
pub fn init_logging(debug: bool) -> Option<PathBuf> {
    if !debug {
        return None;
    }

    let log_path = tempfile::Builder::new()
        .prefix("argocd-tui-")
        .suffix(".log")
        .tempfile()
        .and_then(|f| f.keep().map_err(|e| e.error))
        .map(|(_, path)| path)
        .unwrap_or_else(|_| {
            std::env::temp_dir().join(format!("argocd-tui-{}.log", std::process::id()))
        });

    let file = match std::fs::OpenOptions::new()
        .create(true)
        .truncate(true)
        .write(true)
        .open(&log_path)
    {
        Ok(file) => file,
        Err(e) => {
            eprintln!("Failed to open log file {}: {}", log_path.display(), e);
            return None;
        }
    };

    tracing_subscriber::fmt()
        .with_writer(file)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
        )
        .with_ansi(false)
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    Some(log_path)
}
