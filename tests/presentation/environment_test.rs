use voxcheck::presentation::config::Environment;

#[test]
fn given_known_names_when_parsing_then_returns_environment() {
    assert_eq!(
        Environment::try_from("local".to_string()).unwrap(),
        Environment::Local
    );
    assert_eq!(
        Environment::try_from("TEST".to_string()).unwrap(),
        Environment::Test
    );
    assert_eq!(
        Environment::try_from("production".to_string()).unwrap(),
        Environment::Prod
    );
}

#[test]
fn given_unknown_name_when_parsing_then_returns_error() {
    let result = Environment::try_from("staging".to_string());

    assert!(result.unwrap_err().contains("staging"));
}

#[test]
fn given_environment_when_building_settings_file_name_then_uses_lowercase_name() {
    assert_eq!(Environment::Prod.settings_file_name(), "appsettings.prod.toml");
}
