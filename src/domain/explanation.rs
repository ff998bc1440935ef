use super::classification::Classification;
use super::language::Language;

/// Localized explanation for a verdict. `None` selects the generic English text
/// used for languages outside the catalog.
pub fn explain(language: Option<Language>, classification: Classification) -> &'static str {
    use Classification::{AiGenerated, HumanGenerated};

    match (language, classification) {
        (Some(Language::English), AiGenerated) => {
            "The audio exhibits uniform pitch and synthesized speech patterns typical of AI-generated voices."
        }
        (Some(Language::English), HumanGenerated) => {
            "The audio shows natural variations in tone, rhythm, and emotion, indicating human speech."
        }
        (Some(Language::Tamil), AiGenerated) => {
            "இந்த தமிழ் குரலில் செயற்கை நுண்ணறிவுக்கான ஒரே மாதிரியான சுருதி மற்றும் இயந்திர பேச்சு தன்மைகள் காணப்படுகின்றன."
        }
        (Some(Language::Tamil), HumanGenerated) => {
            "இந்த தமிழ் குரலில் இயல்பான மனித பேச்சு மாற்றங்கள் மற்றும் உணர்ச்சி வெளிப்பாடுகள் கண்டறியப்பட்டன."
        }
        (Some(Language::Hindi), AiGenerated) => {
            "इस हिंदी ऑडियो में कृत्रिम आवाज़ के समान स्थिर स्वर और यांत्रिक पैटर्न पाए गए।"
        }
        (Some(Language::Hindi), HumanGenerated) => {
            "इस हिंदी ऑडियो में प्राकृतिक मानव स्वर परिवर्तन और भावनात्मक अभिव्यक्ति पाई गई।"
        }
        (Some(Language::Malayalam), AiGenerated) => {
            "ഈ മലയാളം ശബ്ദത്തിൽ കൃത്രിമ ശബ്ദത്തിനുള്ള ഏകീകൃത സ്വര മാതൃകകൾ കാണപ്പെടുന്നു."
        }
        (Some(Language::Malayalam), HumanGenerated) => {
            "ഈ മലയാളം ശബ്ദത്തിൽ സ്വാഭാവികമായ മനുഷ്യ ശബ്ദ വ്യതിയാനങ്ങൾ കണ്ടെത്തി."
        }
        (Some(Language::Telugu), AiGenerated) => {
            "ఈ తెలుగు ఆడియోలో కృత్రిమ స్వరాలకు సంబంధించిన స్థిరమైన పిచ్ నమూనాలు కనిపిస్తున్నాయి."
        }
        (Some(Language::Telugu), HumanGenerated) => {
            "ఈ తెలుగు ఆడియోలో సహజమైన మానవ స్వర మార్పులు గుర్తించబడ్డాయి."
        }
        (None, AiGenerated) => "The audio exhibits synthesized speech characteristics.",
        (None, HumanGenerated) => "The audio exhibits natural human speech patterns.",
    }
}
