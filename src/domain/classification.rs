use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Classification {
    #[serde(rename = "AI-generated")]
    AiGenerated,
    #[serde(rename = "Human-generated")]
    HumanGenerated,
}

impl Classification {
    pub fn as_str(&self) -> &'static str {
        match self {
            Classification::AiGenerated => "AI-generated",
            Classification::HumanGenerated => "Human-generated",
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
