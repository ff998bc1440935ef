use std::sync::Arc;

use base64::Engine;
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};

pub const DEFAULT_MIN_AUDIO_BYTES: usize = 1000;

const BASE64: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum PayloadError {
    #[error("Invalid Base64 audio: {0}")]
    InvalidBase64(String),
    #[error("Audio too short for analysis: {actual} bytes, expected at least {minimum}")]
    AudioTooShort { actual: usize, minimum: usize },
}

/// Decoded audio bytes of a single request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioPayload(Arc<[u8]>);

impl AudioPayload {
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self(Arc::from(bytes))
    }

    /// Decodes a base64 string, accepting an optional `data:` URI prefix
    /// and embedded whitespace.
    pub fn from_base64(encoded: &str, min_bytes: usize) -> Result<Self, PayloadError> {
        let body = strip_data_uri(encoded.trim());
        let compact: String = body.chars().filter(|c| !c.is_ascii_whitespace()).collect();

        let bytes = BASE64
            .decode(compact.as_bytes())
            .map_err(|e| PayloadError::InvalidBase64(e.to_string()))?;

        if bytes.len() < min_bytes {
            return Err(PayloadError::AudioTooShort {
                actual: bytes.len(),
                minimum: min_bytes,
            });
        }

        Ok(Self::from_bytes(bytes))
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

fn strip_data_uri(input: &str) -> &str {
    match input
        .strip_prefix("data:")
        .and_then(|rest| rest.split_once(";base64,"))
    {
        Some((_, body)) => body,
        None => input,
    }
}
