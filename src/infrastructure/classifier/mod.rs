mod classifier_factory;
mod entropy_classifier;
mod mock_classifier;

pub use classifier_factory::ClassifierFactory;
pub use entropy_classifier::{DEFAULT_ENTROPY_THRESHOLD, EntropyClassifier, shannon_entropy};
pub use mock_classifier::MockClassifier;
