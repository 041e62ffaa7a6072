//! Structured logging for the `wasmedge-version` binary.
//!
//! Filtering follows `RUST_LOG`:
//! ```bash
//! RUST_LOG=debug wasmedge-version --structured Log full
//! ```
//! If `CUSTOM_FILTER` is set it replaces `RUST_LOG` entirely, and a warning is
//! printed when it does not parse.
//!
//! Logs always go to stderr so they never mix with the version written to
//! stdout.

use std::str::FromStr;

use derive_more::Display;
use tracing_subscriber::{
    filter::EnvFilter, fmt::MakeWriter, layer::SubscriberExt, util::SubscriberInitExt, Layer,
    Registry,
};

#[derive(Debug, Clone, PartialEq, Eq, Display)]
/// Sets the kind of structured logging output you want
pub enum Output {
    /// Regular logging
    Log,
    /// More compact version of above
    Compact,
    /// Outputs everything as json
    Json,
    /// No logging to console (default)
    None,
}

/// ParseError is a String
pub type ParseError = String;

impl FromStr for Output {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Log" => Ok(Output::Log),
            "Compact" => Ok(Output::Compact),
            "Json" => Ok(Output::Json),
            "None" => Ok(Output::None),
            _ => Err(format!("Could not parse log output type: {s}")),
        }
    }
}

/// Builds the filter from `RUST_LOG`, unless `CUSTOM_FILTER` overrides it.
pub fn standard_filter() -> Result<EnvFilter, TracingError> {
    let mut filter = match std::env::var("RUST_LOG") {
        Ok(_) => EnvFilter::from_default_env(),
        Err(_) => EnvFilter::default().add_directive("wasmedge_version_cli=info".parse()?),
    };
    if std::env::var("CUSTOM_FILTER").is_ok() {
        EnvFilter::try_from_env("CUSTOM_FILTER")
            .map_err(|e| eprintln!("Failed to parse CUSTOM_FILTER {e:?}"))
            .map(|f| {
                filter = f;
            })
            .ok();
    }
    Ok(filter)
}

/// Install a global subscriber for `output`, writing to stderr.
///
/// [`Output::None`] installs nothing.
pub fn init_fmt(output: Output) -> Result<(), TracingError> {
    init_fmt_with_writer(output, std::io::stderr)
}

fn init_fmt_with_writer<W>(output: Output, writer: W) -> Result<(), TracingError>
where
    W: for<'writer> MakeWriter<'writer> + Send + Sync + 'static,
{
    let layer = tracing_subscriber::fmt::layer()
        .with_writer(writer)
        .with_file(true)
        .with_line_number(true)
        .with_target(true);

    match output {
        Output::Log => Registry::default()
            .with(layer.with_filter(standard_filter()?))
            .try_init()?,
        Output::Compact => Registry::default()
            .with(layer.compact().with_filter(standard_filter()?))
            .try_init()?,
        Output::Json => Registry::default()
            .with(layer.json().with_filter(standard_filter()?))
            .try_init()?,
        Output::None => {}
    }
    Ok(())
}

/// Error in the tracing/logging setup
#[allow(missing_docs)] // should be self-explanatory
#[derive(thiserror::Error, Debug)]
pub enum TracingError {
    #[error(transparent)]
    BadDirective(#[from] tracing_subscriber::filter::ParseError),
    #[error(transparent)]
    AlreadyInstalled(#[from] tracing_subscriber::util::TryInitError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_round_trips_through_display() {
        for output in [Output::Log, Output::Compact, Output::Json, Output::None] {
            assert_eq!(output.to_string().parse::<Output>(), Ok(output));
        }
    }

    #[test]
    fn unknown_output_is_rejected() {
        let err = "Flame".parse::<Output>().unwrap_err();
        assert!(err.contains("Flame"));
    }

    #[test]
    fn none_installs_nothing() {
        init_fmt(Output::None).unwrap();
        assert!(!tracing::dispatcher::has_been_set());
    }
}
