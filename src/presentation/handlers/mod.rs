mod detect;
mod health;
mod home;
mod json_body;

use serde::Serialize;

pub use detect::{DetectRequest, DetectResponse, detect_handler};
pub use health::health_handler;
pub use home::home_handler;
pub use json_body::JsonBody;

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
