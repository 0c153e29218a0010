use color_eyre::Report;
use tracing::Level;
use tracing_subscriber::{
    Layer, filter::EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt,
};

/// Configuration for the logging system
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level for console output
    pub console_level: Level,
    /// Whether to enable JSON formatted logs for structured output
    pub json_format: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { console_level: Level::WARN, json_format: false }
    }
}

impl LoggingConfig {
    /// Create logging configuration from environment variables
    pub fn from_env() -> Self {
        Self::from_vars(
            std::env::var("GPUT_LOG_LEVEL").ok().as_deref(),
            std::env::var("GPUT_JSON_LOGS").is_ok(),
        )
    }

    fn from_vars(level: Option<&str>, json_format: bool) -> Self {
        let mut config = Self::default();

        if let Some(parsed_level) = level.and_then(|l| l.parse::<Level>().ok()) {
            config.console_level = parsed_level;
        }
        config.json_format = json_format;

        config
    }
}

/// Initialize the logging system with the given configuration.
///
/// Logs go to stderr so stdout carries only the layout report.
pub fn init_logging(config: LoggingConfig) -> Result<(), Report> {
    let console_filter = EnvFilter::builder()
        .with_default_directive(config.console_level.into())
        .from_env_lossy();

    let console_layer = if config.json_format {
        fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_filter(console_filter)
            .boxed()
    } else {
        fmt::layer()
            .with_target(false) // Hide module paths for cleaner console output
            .with_writer(std::io::stderr)
            .with_filter(console_filter)
            .boxed()
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .try_init()?;

    Ok(())
}
