use voxcheck::domain::{Classification, Language, explain};

#[test]
fn given_english_ai_verdict_when_explaining_then_mentions_synthesized_speech() {
    let text = explain(Some(Language::English), Classification::AiGenerated);
    assert!(text.contains("synthesized speech patterns"));
}

#[test]
fn given_each_language_when_explaining_then_verdicts_differ() {
    for language in Language::ALL {
        let ai = explain(Some(language), Classification::AiGenerated);
        let human = explain(Some(language), Classification::HumanGenerated);
        assert!(!ai.is_empty());
        assert_ne!(ai, human);
    }
}

#[test]
fn given_tamil_verdict_when_explaining_then_uses_tamil_script() {
    let text = explain(Some(Language::Tamil), Classification::HumanGenerated);
    assert!(text.contains("தமிழ்"));
}

#[test]
fn given_unknown_language_when_explaining_then_uses_generic_english() {
    assert_eq!(
        explain(None, Classification::HumanGenerated),
        "The audio exhibits natural human speech patterns."
    );
    assert_eq!(
        explain(None, Classification::AiGenerated),
        "The audio exhibits synthesized speech characteristics."
    );
}
