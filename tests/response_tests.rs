use hf_summarizer::ai::SummaryResponse;
use serde_json::json;

#[test]
fn test_batch_shape_extracts_summary_exactly() {
    let body = json!([{"summary_text": "  A fox jumped.\n"}]);
    let response = SummaryResponse::from_value(body);

    assert!(matches!(response, SummaryResponse::Batch(_)));
    assert_eq!(response.into_text(), "  A fox jumped.\n");
}

#[test]
fn test_single_shape_extracts_summary_exactly() {
    let body = json!({"summary_text": "ملخص قصير", "extra": true});
    let response = SummaryResponse::from_value(body);

    assert!(matches!(response, SummaryResponse::Single(_)));
    assert_eq!(response.into_text(), "ملخص قصير");
}

#[test]
fn test_unknown_object_renders_whole_body() {
    let body = json!({"generated_text": "something else"});
    let response = SummaryResponse::from_value(body.clone());

    assert_eq!(response.clone(), SummaryResponse::Other(body.clone()));
    assert_eq!(response.into_text(), body.to_string());
}

#[test]
fn test_list_of_strings_renders_whole_body() {
    let body = json!(["a", "b"]);
    assert_eq!(SummaryResponse::from_value(body).into_text(), r#"["a","b"]"#);
}

#[test]
fn test_null_renders_as_null() {
    assert_eq!(SummaryResponse::from_value(json!(null)).into_text(), "null");
}
