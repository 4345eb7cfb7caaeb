//! Tracing subscriber for the `post-editor` binary.
//!
//! Logs go to stderr, compact or JSON. `ErrorLayer` records the spans
//! opened by `PostEditor::load`, `save` and `delete`, so span traces carry
//! the operation that was running.

use std::io::IsTerminal;

use tracing_error::ErrorLayer;
use tracing_subscriber::{
    EnvFilter, fmt,
    layer::{Layer, SubscriberExt},
    util::SubscriberInitExt,
};

use crate::config::{LogFormat, LoggingArgs};
use crate::error::AppError;

/// Install a global tracing subscriber writing to stderr, so stdout carries
/// only the rendered editor.
pub fn init(logging: &LoggingArgs) -> Result<(), AppError> {
    let env_filter = EnvFilter::builder()
        .with_default_directive(logging.level.into())
        .from_env_lossy();

    let ansi = std::io::stderr().is_terminal();
    let fmt_layer = match logging.format {
        LogFormat::Json => fmt::layer()
            .json()
            .with_current_span(true)
            .with_target(true)
            .with_writer(std::io::stderr)
            .boxed(),
        LogFormat::Compact => fmt::layer()
            .compact()
            .with_ansi(ansi)
            .with_target(true)
            .with_writer(std::io::stderr)
            .boxed(),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(ErrorLayer::default())
        .with(fmt_layer)
        .try_init()
        .map_err(|err| AppError::Telemetry(format!("failed to install tracing subscriber: {err}")))
}
