use voxcheck::application::ports::{AudioInspectionError, AudioInspector};
use voxcheck::domain::AudioPayload;
use voxcheck::infrastructure::audio::SymphoniaInspector;

use crate::helpers::{build_mp3, build_wav, noise_bytes, sine_samples};

#[test]
fn given_wav_bytes_when_inspecting_then_reports_stream_properties() {
    let wav = build_wav(16_000, &sine_samples(16_000, 440.0, 16_000));

    let info = SymphoniaInspector
        .inspect(&AudioPayload::from_bytes(wav))
        .unwrap();

    assert_eq!(info.sample_rate, 16_000);
    assert_eq!(info.channels, 1);
    assert_eq!(info.frames, 16_000);
    assert!((info.duration_secs - 1.0).abs() < 1e-6);
}

#[test]
fn given_wav_at_44100hz_when_inspecting_then_duration_uses_source_rate() {
    let wav = build_wav(44_100, &sine_samples(44_100, 220.0, 4_410));

    let info = SymphoniaInspector
        .inspect(&AudioPayload::from_bytes(wav))
        .unwrap();

    assert_eq!(info.sample_rate, 44_100);
    assert!((info.duration_secs - 0.1).abs() < 1e-6);
}

#[test]
fn given_non_audio_bytes_when_inspecting_then_returns_error() {
    // Clearing the top bit keeps the noise free of MPEG frame sync words.
    let bytes: Vec<u8> = noise_bytes(4096).into_iter().map(|b| b & 0x7F).collect();

    let result = SymphoniaInspector.inspect(&AudioPayload::from_bytes(bytes));

    assert!(result.is_err());
}

#[test]
fn given_empty_bytes_when_inspecting_then_returns_unsupported_format() {
    let result = SymphoniaInspector.inspect(&AudioPayload::from_bytes(Vec::new()));

    assert!(matches!(
        result,
        Err(AudioInspectionError::UnsupportedFormat(_))
    ));
}

#[test]
fn given_wav_header_without_samples_when_inspecting_then_returns_decoding_error() {
    let wav = build_wav(16_000, &[]);

    let result = SymphoniaInspector.inspect(&AudioPayload::from_bytes(wav));

    assert!(result.is_err());
}

#[test]
fn given_mp3_frames_when_inspecting_then_reports_mpeg_stream() {
    let mp3 = build_mp3(20);

    let info = SymphoniaInspector
        .inspect(&AudioPayload::from_bytes(mp3))
        .unwrap();

    assert_eq!(info.codec, "mp3");
    assert_eq!(info.sample_rate, 44_100);
    assert_eq!(info.channels, 1);
    assert!(info.frames > 0);
}
