use voxcheck::presentation::config::{ClassifierProvider, Environment, Settings};

#[test]
fn given_no_settings_file_when_loading_then_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();

    let settings = Settings::load_from(Environment::Test, dir.path()).unwrap();

    assert_eq!(settings.server.port, 3000);
    assert_eq!(settings.server.max_body_bytes, 10 * 1024 * 1024);
    assert_eq!(settings.detection.classifier, ClassifierProvider::Entropy);
    assert_eq!(settings.detection.entropy_threshold, 7.2);
    assert_eq!(settings.detection.min_audio_bytes, 1000);
    assert!(settings.detection.verify_audio);
    assert!(!settings.logging.enable_json);
}

#[test]
fn given_prod_environment_when_loading_defaults_then_enables_json_logs() {
    let dir = tempfile::tempdir().unwrap();

    let settings = Settings::load_from(Environment::Prod, dir.path()).unwrap();

    assert!(settings.logging.enable_json);
}

#[test]
fn given_settings_file_when_loading_then_file_overrides_defaults() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("appsettings.test.toml"),
        r#"
[server]
port = 8088

[detection]
classifier = "mock"
verify_audio = false
"#,
    )
    .unwrap();

    let settings = Settings::load_from(Environment::Test, dir.path()).unwrap();

    assert_eq!(settings.server.port, 8088);
    assert_eq!(settings.server.host, "0.0.0.0");
    assert_eq!(settings.detection.classifier, ClassifierProvider::Mock);
    assert!(!settings.detection.verify_audio);
}

#[test]
fn given_unknown_classifier_in_file_when_loading_then_returns_error() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("appsettings.test.toml"),
        "[detection]\nclassifier = \"neural\"\n",
    )
    .unwrap();

    let result = Settings::load_from(Environment::Test, dir.path());

    assert!(result.is_err());
}
