mod detection_service;

pub use detection_service::{DetectionError, DetectionOptions, DetectionService};
