use std::str::FromStr;
use std::sync::Once;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

static INIT: Once = Once::new();

/// Initializes the global tracing subscriber.
///
/// The maximum level is taken from the `LOGLEVEL` environment variable
/// (`trace`, `debug`, `info`, `warn` or `error`), defaulting to `info` when
/// the variable is unset or unparseable. Safe to call from multiple tests or
/// binaries; only the first call installs the subscriber.
pub fn setup_logger() {
    INIT.call_once(|| {
        let level = std::env::var("LOGLEVEL")
            .ok()
            .and_then(|value| Level::from_str(&value).ok())
            .unwrap_or(Level::INFO);

        let subscriber = FmtSubscriber::builder().with_max_level(level).finish();

        // Another subscriber may already be installed by the host process.
        let _ = tracing::subscriber::set_global_default(subscriber);
    });
}
