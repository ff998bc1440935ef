use std::path::Path;

use config::{Config, File};
use serde::Deserialize;

use super::Environment;

const ENV_PREFIX: &str = "APP";
const ENV_SEPARATOR: &str = "__";

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("invalid configuration: {0}")]
    Invalid(#[from] config::ConfigError),
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub detection: DetectionSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub max_body_bytes: usize,
    pub index_path: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DetectionSettings {
    pub classifier: ClassifierProvider,
    pub entropy_threshold: f64,
    pub min_audio_bytes: usize,
    pub verify_audio: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClassifierProvider {
    Entropy,
    Mock,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub level: String,
    pub enable_json: bool,
}

impl Settings {
    /// Loads settings from `./appsettings.{environment}.toml` and `APP__*` variables.
    pub fn load(environment: Environment) -> Result<Self, SettingsError> {
        Self::load_from(environment, Path::new("."))
    }

    /// Layers built-in defaults, an optional settings file in `config_dir`,
    /// then `APP__SECTION__KEY` environment variables.
    pub fn load_from(environment: Environment, config_dir: &Path) -> Result<Self, SettingsError> {
        let settings_file = config_dir.join(environment.settings_file_name());

        let configuration = Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000_i64)?
            .set_default("server.max_body_bytes", 10_i64 * 1024 * 1024)?
            .set_default("server.index_path", "static/index.html")?
            .set_default("detection.classifier", "entropy")?
            .set_default("detection.entropy_threshold", 7.2_f64)?
            .set_default("detection.min_audio_bytes", 1000_i64)?
            .set_default("detection.verify_audio", true)?
            .set_default("logging.level", "info")?
            .set_default(
                "logging.enable_json",
                matches!(environment, Environment::Prod),
            )?
            .add_source(File::from(settings_file).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator(ENV_SEPARATOR)
                    .separator(ENV_SEPARATOR)
                    .try_parsing(true),
            )
            .build()?;

        Ok(configuration.try_deserialize()?)
    }
}
