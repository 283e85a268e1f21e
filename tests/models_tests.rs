use hf_summarizer::ai::client::build_payload;
use hf_summarizer::core::models::{
    AR_MODEL_ID, EN_MODEL_ID, Language, MAX_NEW_TOKENS_MAX, MAX_NEW_TOKENS_MIN, MIN_LENGTH_MAX,
    MIN_LENGTH_MIN, SummaryParams,
};
use serde_json::json;

#[test]
fn language_maps_to_fixed_model() {
    assert_eq!(Language::Arabic.model_id(), AR_MODEL_ID);
    assert_eq!(Language::English.model_id(), EN_MODEL_ID);
    assert_eq!(EN_MODEL_ID, "facebook/bart-large-cnn");
    assert_eq!(AR_MODEL_ID, "ahmed0189/mT5-Arabic-text-summarization");
}

#[test]
fn language_parses_names_and_codes() {
    assert_eq!("English".parse::<Language>(), Ok(Language::English));
    assert_eq!(" arabic ".parse::<Language>(), Ok(Language::Arabic));
    assert_eq!("en".parse::<Language>(), Ok(Language::English));
    assert!("french".parse::<Language>().is_err());
}

#[test]
fn arabic_is_the_default_selection() {
    assert_eq!(Language::default(), Language::Arabic);
    assert_eq!(Language::ALL[0], Language::Arabic);
}

#[test]
fn params_default_to_slider_defaults() {
    let params = SummaryParams::default();
    assert_eq!(params.max_new_tokens(), 120);
    assert_eq!(params.min_length(), 30);
}

#[test]
fn params_are_clamped_into_range() {
    let low = SummaryParams::new(0, 0);
    assert_eq!(low.max_new_tokens(), MAX_NEW_TOKENS_MIN);
    assert_eq!(low.min_length(), MIN_LENGTH_MIN);

    let high = SummaryParams::new(10_000, 10_000);
    assert_eq!(high.max_new_tokens(), MAX_NEW_TOKENS_MAX);
    assert_eq!(high.min_length(), MIN_LENGTH_MAX);
}

#[test]
fn english_payload_matches_wire_contract() {
    let payload = build_payload("The quick brown fox jumps.", SummaryParams::new(120, 30));
    let body = serde_json::to_value(&payload).expect("serializable");

    assert_eq!(
        body,
        json!({
            "inputs": "The quick brown fox jumps.",
            "parameters": {"max_new_tokens": 120, "min_length": 30, "do_sample": false}
        })
    );
}
