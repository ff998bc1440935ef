use std::sync::Arc;

use crate::application::ports::VoiceClassifier;
use crate::application::services::DetectionService;
use crate::presentation::config::Settings;

pub struct AppState<C>
where
    C: VoiceClassifier + ?Sized,
{
    pub detection_service: Arc<DetectionService<C>>,
    pub settings: Settings,
}

impl<C> Clone for AppState<C>
where
    C: VoiceClassifier + ?Sized,
{
    fn clone(&self) -> Self {
        Self {
            detection_service: Arc::clone(&self.detection_service),
            settings: self.settings.clone(),
        }
    }
}
