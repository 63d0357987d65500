use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Installs the global subscriber. Events go to stderr so command output stays clean on stdout.
///
/// Levels come from `RUST_LOG`; without it everything logs at `info` and this crate at `debug`.
pub fn setup_logging() {
    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true);

    let default_filter = "info,heroes_client=debug";

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .init();
}
