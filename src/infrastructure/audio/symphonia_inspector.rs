use std::io::Cursor;

use symphonia::core::codecs::{CODEC_TYPE_NULL, DecoderOptions};
use symphonia::core::errors::Error as SymphoniaError;
use symphonia::core::formats::FormatOptions;
use symphonia::core::io::MediaSourceStream;
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;

use crate::application::ports::{AudioInspectionError, AudioInspector};
use crate::domain::{AudioInfo, AudioPayload};

/// Decodes the whole payload with symphonia to prove it is playable audio.
pub struct SymphoniaInspector;

impl AudioInspector for SymphoniaInspector {
    fn inspect(&self, audio: &AudioPayload) -> Result<AudioInfo, AudioInspectionError> {
        let cursor = Cursor::new(audio.as_bytes().to_vec());
        let mss = MediaSourceStream::new(Box::new(cursor), Default::default());

        let mut hint = Hint::new();
        hint.mime_type("audio/mpeg");

        let probed = symphonia::default::get_probe()
            .format(
                &hint,
                mss,
                &FormatOptions::default(),
                &MetadataOptions::default(),
            )
            .map_err(|e| AudioInspectionError::UnsupportedFormat(format!("probe: {}", e)))?;

        let mut format = probed.format;

        let track = format
            .tracks()
            .iter()
            .find(|t| t.codec_params.codec != CODEC_TYPE_NULL)
            .ok_or_else(|| {
                AudioInspectionError::DecodingFailed("no audio track found".to_string())
            })?;

        let track_id = track.id;
        let codec_params = track.codec_params.clone();
        let sample_rate = codec_params.sample_rate.ok_or_else(|| {
            AudioInspectionError::DecodingFailed("unknown sample rate".to_string())
        })?;
        let channels = codec_params.channels.map(|c| c.count()).unwrap_or(1);

        let codec = symphonia::default::get_codecs()
            .get_codec(codec_params.codec)
            .map(|d| d.short_name.to_string())
            .unwrap_or_else(|| "unknown".to_string());

        let mut decoder = symphonia::default::get_codecs()
            .make(&codec_params, &DecoderOptions::default())
            .map_err(|e| AudioInspectionError::UnsupportedFormat(format!("codec: {}", e)))?;

        let mut frames: u64 = 0;
        let mut skipped: usize = 0;

        loop {
            let packet = match format.next_packet() {
                Ok(p) => p,
                Err(SymphoniaError::IoError(ref e))
                    if e.kind() == std::io::ErrorKind::UnexpectedEof =>
                {
                    break;
                }
                Err(e) => {
                    return Err(AudioInspectionError::DecodingFailed(format!(
                        "packet: {}",
                        e
                    )));
                }
            };

            if packet.track_id() != track_id {
                continue;
            }

            match decoder.decode(&packet) {
                Ok(decoded) => frames += decoded.frames() as u64,
                Err(SymphoniaError::DecodeError(e)) => {
                    tracing::warn!(error = %e, "Skipping corrupt audio frame");
                    skipped += 1;
                }
                Err(e) => {
                    return Err(AudioInspectionError::DecodingFailed(format!(
                        "decode: {}",
                        e
                    )));
                }
            }
        }

        if frames == 0 {
            return Err(AudioInspectionError::DecodingFailed(
                "no audio samples decoded".to_string(),
            ));
        }

        let info = AudioInfo {
            codec,
            sample_rate,
            channels,
            frames,
            duration_secs: frames as f64 / sample_rate as f64,
        };

        tracing::debug!(
            frames = info.frames,
            skipped_frames = skipped,
            duration_secs = info.duration_secs,
            "Audio payload decoded"
        );

        Ok(info)
    }
}
