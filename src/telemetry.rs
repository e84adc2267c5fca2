// telemetry.rs
use crate::config::TelemetryConfig;
use std::error::Error;
use std::fmt;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::EnvFilter;

/// HTTP plumbing under the server and the upstream clients logs a lot below `warn`.
const QUIET_DEPENDENCIES: &str = "hyper=warn,reqwest=warn";

#[derive(Debug)]
pub enum TelemetryError {
    BadDirective { directive: String, source: ParseError },
    AlreadyInstalled(Box<dyn Error + Send + Sync>),
}

impl fmt::Display for TelemetryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TelemetryError::BadDirective { directive, .. } => {
                write!(f, "log filter '{directive}' does not parse")
            }
            TelemetryError::AlreadyInstalled(err) => {
                write!(f, "a global logger is already installed: {err}")
            }
        }
    }
}

impl Error for TelemetryError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            TelemetryError::BadDirective { source, .. } => Some(source),
            TelemetryError::AlreadyInstalled(err) => Some(&**err),
        }
    }
}

/// Installs the process-wide subscriber: one compact line per event, with the
/// worker thread id so interleaved requests can be told apart.
pub fn init(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    let directive = directive(std::env::var(EnvFilter::DEFAULT_ENV).ok(), config);
    let filter = build_filter(&directive)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(true)
        .compact()
        .with_ansi(false)
        .try_init()
        .map_err(TelemetryError::AlreadyInstalled)
}

/// A non-empty `RUST_LOG` is taken verbatim. Otherwise the configured level
/// applies, with dependency noise turned down.
fn directive(rust_log: Option<String>, config: &TelemetryConfig) -> String {
    match rust_log.filter(|value| !value.trim().is_empty()) {
        Some(value) => value,
        None => format!("{},{QUIET_DEPENDENCIES}", config.log_level.trim()),
    }
}

fn build_filter(directive: &str) -> Result<EnvFilter, TelemetryError> {
    EnvFilter::try_new(directive).map_err(|source| TelemetryError::BadDirective {
        directive: directive.to_string(),
        source,
    })
}
