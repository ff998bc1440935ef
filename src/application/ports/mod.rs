mod audio_inspector;
mod voice_classifier;

pub use audio_inspector::{AudioInspectionError, AudioInspector};
pub use voice_classifier::{ClassifierError, VoiceClassifier};
