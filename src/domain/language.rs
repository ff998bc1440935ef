use std::fmt;
use std::str::FromStr;

/// Languages with a localized explanation catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    English,
    Tamil,
    Hindi,
    Malayalam,
    Telugu,
}

impl Language {
    pub const ALL: [Language; 5] = [
        Language::English,
        Language::Tamil,
        Language::Hindi,
        Language::Malayalam,
        Language::Telugu,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Tamil => "Tamil",
            Language::Hindi => "Hindi",
            Language::Malayalam => "Malayalam",
            Language::Telugu => "Telugu",
        }
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "english" => Ok(Self::English),
            "tamil" => Ok(Self::Tamil),
            "hindi" => Ok(Self::Hindi),
            "malayalam" => Ok(Self::Malayalam),
            "telugu" => Ok(Self::Telugu),
            other => Err(format!("Unsupported language: {}", other)),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
