//! Logging setup for the `pathview` binary.

use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Installs the global tracing subscriber at INFO level.
///
/// The level can be overridden with `RUST_LOG`, e.g.
/// `RUST_LOG=pathview_dashboard=debug pathview`.
pub fn init_logger() {
    init_logger_with_level(Level::INFO);
}

/// Installs the global tracing subscriber with a custom default level.
///
/// # Panics
///
/// Panics if a global subscriber has already been installed.
pub fn init_logger_with_level(default_level: Level) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(default_level.into())
                .from_env_lossy(),
        )
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .init();
}
