//! Tracing setup for the CLI.
//!
//! The subscriber is installed before the config is read so events emitted
//! while loading it are not lost. The configured `log_level` is applied
//! afterwards through a reload handle.

use tracing::Subscriber;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Registry, fmt, reload};

pub type FilterHandle = reload::Handle<EnvFilter, Registry>;

/// Build the layered subscriber with a reloadable filter.
pub fn subscriber<W>(filter: EnvFilter, writer: W) -> (impl Subscriber + Send + Sync + 'static, FilterHandle)
where
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    let (filter, handle) = reload::Layer::new(filter);
    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).with_writer(writer));
    (subscriber, handle)
}

/// Install the global subscriber. `RUST_LOG` wins, then `--verbose`.
pub fn init(verbose: bool) -> FilterHandle {
    let level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let (subscriber, handle) = subscriber(filter, std::io::stderr);
    subscriber.init();
    handle
}

/// Switch to the configured level unless `RUST_LOG` or `--verbose` chose one.
pub fn apply_config_level(handle: &FilterHandle, verbose: bool, log_level: &str) {
    if verbose || std::env::var_os("RUST_LOG").is_some() {
        return;
    }
    if let Err(e) = handle.reload(EnvFilter::new(log_level)) {
        tracing::warn!(error = %e, "Could not apply configured log level");
    }
}
