//! Tracing subscriber setup

use miette::{IntoDiagnostic, WrapErr};
use tracing::debug;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config;

/// Installs the global tracing subscriber.
///
/// Events are written to stderr so stdout only ever carries extracted data. `RUST_LOG` takes
/// precedence over the configured filter.
///
/// # Errors
///
/// Returns an error if the configured filter is invalid or a global subscriber is already set.
pub fn try_init(tracing: &config::TracingConfig) -> miette::Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&tracing.filter)
            .into_diagnostic()
            .wrap_err_with(|| format!("invalid tracing filter: {}", tracing.filter))?,
    };

    let (json_layer, text_layer) = if tracing.json {
        let layer = tracing_subscriber::fmt::layer()
            .json()
            .with_writer(std::io::stderr);

        (Some(layer), None)
    } else {
        let layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

        (None, Some(layer))
    };

    // initialize tracing
    tracing_subscriber::registry()
        .with(filter)
        .with(json_layer)
        .with(text_layer)
        .try_init()
        .into_diagnostic()
        .wrap_err("could not init registry")?;

    debug!("tracing initialized");

    Ok(())
}
