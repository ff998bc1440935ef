use voxcheck::domain::{AudioPayload, Classification};
use voxcheck::infrastructure::classifier::ClassifierFactory;
use voxcheck::presentation::config::ClassifierProvider;

#[test]
fn given_entropy_provider_with_valid_threshold_when_creating_then_succeeds() {
    let result = ClassifierFactory::create(ClassifierProvider::Entropy, 7.2);

    assert!(result.is_ok());
}

#[test]
fn given_entropy_provider_with_invalid_threshold_when_creating_then_returns_error() {
    let result = ClassifierFactory::create(ClassifierProvider::Entropy, 12.0);

    assert!(result.is_err());
}

#[tokio::test]
async fn given_mock_provider_when_classifying_then_returns_fixed_verdict() {
    let classifier = ClassifierFactory::create(ClassifierProvider::Mock, 7.2).unwrap();

    let verdict = classifier
        .classify(&AudioPayload::from_bytes(vec![0xAB; 2048]))
        .await
        .unwrap();

    assert_eq!(verdict.classification, Classification::HumanGenerated);
    assert_eq!(verdict.confidence.value(), 0.5);
}
