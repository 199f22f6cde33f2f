use ai_detector_lib::models::{AnalysisOutcome, AnalysisReport};
use ai_detector_lib::services::detection::{analyze, analyze_value, MAX_HIGHLIGHTS};
use proptest::prelude::*;
use serde_json::json;

const AI_LIKE: &str = "The platform improves the workflow significantly. \
    However the platform improves the process efficiently. \
    The workflow therefore supports the platform reliably. \
    The process improves the workflow significantly again. \
    The platform supports the workflow process reliably. \
    However the workflow improves the platform efficiently. \
    The process therefore supports the workflow reliably. \
    The platform improves the process significantly again. \
    The workflow supports the platform process reliably. \
    The process improves the platform workflow efficiently.";

const HUMAN_LIKE: &str = "I missed the bus. Again! So I walked the whole \
    way along the river, past the boarded-up bakery where my grandmother used \
    to buy rye bread every Saturday morning before anyone else was awake. \
    Cold. The ducks didn't care. By the time I reached the office, my socks \
    were soaked through and Priya had already eaten the last croissant, which \
    honestly felt personal? Whatever. Tomorrow I'm driving.";

fn report(text: &str) -> AnalysisReport {
    match analyze(text) {
        AnalysisOutcome::Report(r) => r,
        AnalysisOutcome::Failed { error } => panic!("unexpected error: {error}"),
    }
}

#[test]
fn uniform_transition_heavy_text_trends_ai() {
    let r = report(AI_LIKE);
    assert!(r.details.sentence_variety < 30, "variety {}", r.details.sentence_variety);
    assert!(r.details.word_repetition > 50, "repetition {}", r.details.word_repetition);
    assert!(r.details.transition_usage > 0, "transition {}", r.details.transition_usage);
    assert!(r.ai_percentage > 50, "ai {}", r.ai_percentage);
    assert!(!r.highlighted_sections.is_empty());
    assert!(r.highlighted_sections.len() <= MAX_HIGHLIGHTS);
}

#[test]
fn templated_text_breakdown_is_stable() {
    let r = report(AI_LIKE);
    assert_eq!(r.ai_percentage, 71);
    assert_eq!(r.details.sentence_variety, 24);
    assert_eq!(r.details.word_repetition, 100);
    assert_eq!(r.details.transition_usage, 57);
    assert_eq!(r.details.burstiness, 95);
    assert_eq!(
        r.highlighted_sections,
        vec![
            "However the platform improves the process efficiently",
            "The workflow therefore supports the platform reliably",
            "However the workflow improves the platform efficiently",
        ]
    );
}

#[test]
fn varied_prose_has_more_variety_and_less_uniform_burstiness() {
    let human = report(HUMAN_LIKE);
    let ai = report(AI_LIKE);
    assert_eq!(human.details.sentence_variety, 91);
    assert_eq!(human.details.transition_usage, 0);
    assert!(human.details.sentence_variety > ai.details.sentence_variety);
    assert!(human.details.burstiness < ai.details.burstiness);
    assert!(human.highlighted_sections.is_empty());
}

#[test]
fn equal_chunk_diversity_keeps_full_burstiness() {
    // every chunk has diversity 0.8, so the spread must be exactly zero
    let text = "meanwhile! system.HOWEVER? hence! the\na\nmeanwhile . likewise?!system . \
        well-known\tMoreover likewise?!we. über. ";
    let r = report(text);
    assert_eq!(r.details.burstiness, 100);
    assert_eq!(r.details.sentence_variety, 45);
    assert_eq!(r.details.word_repetition, 100);
    assert_eq!(r.details.transition_usage, 0);
    assert_eq!(r.ai_percentage, 66);
    assert!(r.highlighted_sections.is_empty());
}

#[test]
fn leading_transition_word_is_not_counted() {
    let r = report("However the cat sat on the mat for a very long and quiet afternoon.");
    assert_eq!(r.details.transition_usage, 0);
}

#[test]
fn transition_word_before_punctuation_is_not_counted() {
    let r = report("The cat sat on the mat for a very long and quiet afternoon, however.");
    assert_eq!(r.details.transition_usage, 0);
}

#[test]
fn padded_transition_word_is_counted() {
    let r = report("The cat sat on the mat however the dog stayed outside all afternoon.");
    assert_eq!(r.details.transition_usage, 76);
}

#[test]
fn few_sentences_keep_neutral_burstiness() {
    let r = report("This sentence is long enough to pass the minimum length check. It has two parts.");
    assert_eq!(r.details.burstiness, 50);
    assert_eq!(r.ai_percentage, 63);
    assert!(r.highlighted_sections.is_empty());
}

#[test]
fn non_string_json_text_is_error_object() {
    let outcome = analyze_value(&json!(3.5));
    let value = serde_json::to_value(&outcome).unwrap();
    assert!(value["error"].is_string());
    assert_eq!(value.as_object().unwrap().len(), 1);
}

#[test]
fn doubling_text_does_not_lower_repetition() {
    let doubled = format!("{} {}", HUMAN_LIKE, HUMAN_LIKE);
    assert!(report(&doubled).details.word_repetition >= report(HUMAN_LIKE).details.word_repetition);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn scores_stay_in_range(ref text in "[a-zA-Z ,.!?\n]{0,600}") {
        if let AnalysisOutcome::Report(r) = analyze(text) {
            prop_assert!(r.ai_percentage <= 100);
            prop_assert!(r.details.sentence_variety <= 100);
            prop_assert!(r.details.word_repetition <= 100);
            prop_assert!(r.details.transition_usage <= 100);
            prop_assert!(r.details.burstiness <= 100);
            prop_assert!(r.highlighted_sections.len() <= MAX_HIGHLIGHTS);
        }
    }

    #[test]
    fn short_input_is_zeroed(ref text in "\\PC{0,49}") {
        prop_assume!(text.trim().chars().count() < 50);
        prop_assert_eq!(analyze(text), AnalysisOutcome::Report(AnalysisReport::empty()));
    }

    #[test]
    fn analysis_is_deterministic(ref text in "\\PC{0,400}") {
        let a = serde_json::to_string(&analyze(text)).unwrap();
        let b = serde_json::to_string(&analyze(text)).unwrap();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn repetition_never_drops_when_doubled(ref text in "([a-z]{1,9}[ .]){10,80}") {
        let doubled = format!("{} {}", text, text);
        if let (AnalysisOutcome::Report(base), AnalysisOutcome::Report(twice)) =
            (analyze(text), analyze(&doubled))
        {
            prop_assert!(twice.details.word_repetition >= base.details.word_repetition);
        }
    }
}
