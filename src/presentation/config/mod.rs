mod environment;
mod settings;

pub use environment::{ENVIRONMENT_VAR, Environment};
pub use settings::{
    ClassifierProvider, DetectionSettings, LoggingSettings, ServerSettings, Settings,
    SettingsError,
};
