use tracing::{Instrument, error, info, info_span};
use uuid::Uuid;

use crate::ai::Summarize;
use crate::core::models::{Language, SummaryParams};
use crate::errors::SummarizerError;

/// Current form values for one user action.
#[derive(Debug, Clone, Default)]
pub struct SummarizeForm {
    pub language: Language,
    pub text: String,
    pub params: SummaryParams,
}

/// What the presentation layer should show after one action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Summary { summary: String, model_id: String },
    /// Nothing was sent; the user needs to fix the form.
    Warning(String),
    Failed(String),
}

/// Run one validate -> call -> render pass.
///
/// Blank input never reaches the client. Failures are not retried; the user
/// re-triggers the action.
pub async fn run<S: Summarize + ?Sized>(client: &S, form: &SummarizeForm) -> Outcome {
    if form.text.trim().is_empty() {
        return Outcome::Warning(SummarizerError::EmptyInput.to_string());
    }

    let model_id = form.language.model_id();
    let span = info_span!("summarize", correlation_id = %Uuid::new_v4(), model_id);

    async move {
        match client.summarize(model_id, &form.text, form.params).await {
            Ok(summary) => {
                info!(summary_chars = summary.chars().count(), "Summary generated");
                Outcome::Summary {
                    summary,
                    model_id: model_id.to_string(),
                }
            }
            Err(e) => {
                error!("Failed to generate summary: {}", e);
                Outcome::Failed(format!("Request failed: {e}"))
            }
        }
    }
    .instrument(span)
    .await
}
