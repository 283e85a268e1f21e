use hf_summarizer::errors::SummarizerError;
use std::error::Error;

#[test]
fn test_summarizer_error_implements_error_trait() {
    fn assert_error<T: Error>(_: &T) {}

    let error = SummarizerError::DecodeError("test error".to_string());
    assert_error(&error);
}

#[test]
fn test_summarizer_error_display() {
    let error = SummarizerError::ApiError {
        status: 503,
        detail: r#"{"error":"Model is loading"}"#.to_string(),
    };
    assert_eq!(format!("{error}"), r#"HTTP 503: {"error":"Model is loading"}"#);

    let error = SummarizerError::HttpError("Connection refused".to_string());
    assert_eq!(
        format!("{error}"),
        "Failed to send HTTP request: Connection refused"
    );

    assert_eq!(
        SummarizerError::EmptyInput.to_string(),
        "Please enter some text first."
    );
    assert!(SummarizerError::MissingToken.to_string().starts_with("HF_TOKEN is required."));
}

#[test]
fn test_status_only_for_api_errors() {
    let api = SummarizerError::ApiError {
        status: 401,
        detail: "Unauthorized".to_string(),
    };
    assert_eq!(api.status(), Some(401));
    assert_eq!(SummarizerError::EmptyInput.status(), None);
}

#[test]
fn test_summarizer_error_from_conversions() {
    #[allow(unused)]
    #[allow(clippy::items_after_statements)]
    fn _check_reqwest_conversion(err: reqwest::Error) -> SummarizerError {
        SummarizerError::from(err)
    }
}
