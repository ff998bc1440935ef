mod audio_payload;
mod classification;
mod confidence;
mod detection;
mod explanation;
mod language;

pub use audio_payload::{AudioPayload, DEFAULT_MIN_AUDIO_BYTES, PayloadError};
pub use classification::Classification;
pub use confidence::{Confidence, MAX_CONFIDENCE};
pub use detection::{AudioInfo, Detection, Verdict};
pub use explanation::explain;
pub use language::Language;
