//! Decoding of inference router responses.
//!
//! Summarization models answer with `[{"summary_text": ...}]` most of the
//! time, some deployments answer with a bare `{"summary_text": ...}`, and
//! anything else is shown to the user as-is.

use serde_json::Value;

pub const SUMMARY_KEY: &str = "summary_text";

/// One variant per known response shape, plus a fallback.
#[derive(Debug, Clone, PartialEq)]
pub enum SummaryResponse {
    /// A sequence whose first element is an object carrying `summary_text`.
    Batch(Value),
    /// An object carrying `summary_text` directly.
    Single(Value),
    /// Any other body; rendered whole.
    Other(Value),
}

impl SummaryResponse {
    #[must_use]
    pub fn from_value(body: Value) -> Self {
        let batch_summary = body
            .as_array()
            .and_then(|items| items.first())
            .and_then(Value::as_object)
            .and_then(|first| first.get(SUMMARY_KEY))
            .cloned();
        if let Some(summary) = batch_summary {
            return SummaryResponse::Batch(summary);
        }

        if let Some(summary) = body.as_object().and_then(|obj| obj.get(SUMMARY_KEY)) {
            return SummaryResponse::Single(summary.clone());
        }

        SummaryResponse::Other(body)
    }

    /// Text shown to the user.
    #[must_use]
    pub fn into_text(self) -> String {
        match self {
            SummaryResponse::Batch(v) | SummaryResponse::Single(v) | SummaryResponse::Other(v) => {
                render_value(v)
            }
        }
    }
}

/// Strings render bare; everything else renders as compact JSON.
fn render_value(value: Value) -> String {
    match value {
        Value::String(s) => s,
        other => other.to_string(),
    }
}
