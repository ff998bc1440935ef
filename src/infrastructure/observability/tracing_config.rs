use crate::presentation::config::{Environment, LoggingSettings};

pub const LOG_FORMAT_VAR: &str = "LOG_FORMAT";

/// Configuration for tracing initialization.
#[derive(Debug, Clone)]
pub struct TracingConfig {
    pub environment: String,
    pub json_format: bool,
    /// Filter directive used when `RUST_LOG` is unset.
    pub default_filter: String,
}

impl TracingConfig {
    /// Builds the config from settings, letting `LOG_FORMAT` override `logging.enable_json`.
    pub fn from_settings(environment: Environment, logging: &LoggingSettings) -> Self {
        let format_override = std::env::var(LOG_FORMAT_VAR).ok();
        Self::resolve(environment, logging, format_override.as_deref())
    }

    /// `log_format` of `json` or `text` (any case) wins over the settings flag;
    /// other values are ignored.
    pub fn resolve(
        environment: Environment,
        logging: &LoggingSettings,
        log_format: Option<&str>,
    ) -> Self {
        let json_format = match log_format.map(|v| v.trim().to_lowercase()).as_deref() {
            Some("json") => true,
            Some("text") | Some("pretty") => false,
            _ => logging.enable_json,
        };

        Self {
            environment: environment.to_string(),
            json_format,
            default_filter: format!("{},voxcheck=debug,tower_http=debug", logging.level),
        }
    }
}
