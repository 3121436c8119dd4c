//! Tracing bootstrap for binaries embedding detent.
//!
//! ## Usage
//!
//! Call [`init_tracing`] once at startup. Library code only emits events; it
//! never installs a subscriber.

/// Default filter used when `RUST_LOG` is not set.
pub const DEFAULT_FILTER: &str = "error,detent_ui=info,detent_components=info";

/// Installs a formatted subscriber filtered by `RUST_LOG`.
///
/// Falls back to [`DEFAULT_FILTER`]. Calling it more than once is harmless;
/// later calls leave the first subscriber in place.
pub fn init_tracing() {
    let filter = match tracing_subscriber::EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => match tracing_subscriber::EnvFilter::try_new(DEFAULT_FILTER) {
            Ok(filter) => filter,
            Err(_) => tracing_subscriber::EnvFilter::new("error"),
        },
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init();
}

/// Like [`init_tracing`], but with an explicit filter directive that takes
/// precedence over `RUST_LOG`.
pub fn init_tracing_with(directive: &str) {
    let filter = match tracing_subscriber::EnvFilter::try_new(directive) {
        Ok(filter) => filter,
        Err(err) => {
            eprintln!("Invalid log filter {directive:?}: {err}");
            tracing_subscriber::EnvFilter::new(DEFAULT_FILTER)
        }
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init();
}
