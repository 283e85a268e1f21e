use dialoguer::{Input, Select};

use crate::core::models::{
    Language, MAX_NEW_TOKENS_MAX, MAX_NEW_TOKENS_MIN, MIN_LENGTH_MAX, MIN_LENGTH_MIN,
    SummaryParams,
};
use crate::features::summarize::{Outcome, SummarizeForm};

pub const APP_TITLE: &str = "Text Summarizer (Arabic / English)";

/// Shown while the inference call is in flight.
pub const BUSY_MESSAGE: &str = "Summarizing on Hugging Face servers...";

/// Render an outcome as plain terminal text.
///
/// A summary renders as a `Summary` heading, the text, and a caption naming
/// the model; warnings and failures render as a single banner line.
#[must_use]
pub fn render_outcome(outcome: &Outcome) -> String {
    match outcome {
        Outcome::Summary { summary, model_id } => render_summary(summary, model_id),
        Outcome::Warning(msg) => render_warning(msg),
        Outcome::Failed(msg) => render_error(msg),
    }
}

#[must_use]
pub fn render_summary(summary: &str, model_id: &str) -> String {
    format!("Summary\n-------\n{summary}\n\n{}", render_caption(model_id))
}

#[must_use]
pub fn render_caption(model_id: &str) -> String {
    format!("Model: {model_id}")
}

#[must_use]
pub fn render_warning(message: &str) -> String {
    format!("Warning: {message}")
}

#[must_use]
pub fn render_error(message: &str) -> String {
    format!("Error: {message}")
}

fn range_validator(min: u32, max: u32) -> impl FnMut(&u32) -> Result<(), String> {
    move |value: &u32| {
        if (min..=max).contains(value) {
            Ok(())
        } else {
            Err(format!("Enter a value between {min} and {max}"))
        }
    }
}

/// Fill the form interactively, starting from `prefill`.
///
/// The text prompt is skipped when `prefill` already carries text.
///
/// # Errors
///
/// Returns an error if the terminal cannot be read from.
pub fn prompt_form(prefill: &SummarizeForm) -> anyhow::Result<SummarizeForm> {
    let labels: Vec<&str> = Language::ALL.iter().map(|l| l.label()).collect();
    let default_idx = Language::ALL
        .iter()
        .position(|l| *l == prefill.language)
        .unwrap_or(0);

    let picked = Select::new()
        .with_prompt("Select input language")
        .items(&labels)
        .default(default_idx)
        .interact()?;
    let language = Language::ALL[picked];

    let text = if prefill.text.trim().is_empty() {
        Input::<String>::new()
            .with_prompt("Input text")
            .allow_empty(true)
            .interact_text()?
    } else {
        prefill.text.clone()
    };

    let max_new_tokens = Input::<u32>::new()
        .with_prompt(format!(
            "Max summary length ({MAX_NEW_TOKENS_MIN}-{MAX_NEW_TOKENS_MAX})"
        ))
        .default(prefill.params.max_new_tokens())
        .validate_with(range_validator(MAX_NEW_TOKENS_MIN, MAX_NEW_TOKENS_MAX))
        .interact_text()?;

    let min_length = Input::<u32>::new()
        .with_prompt(format!("Min summary length ({MIN_LENGTH_MIN}-{MIN_LENGTH_MAX})"))
        .default(prefill.params.min_length())
        .validate_with(range_validator(MIN_LENGTH_MIN, MIN_LENGTH_MAX))
        .interact_text()?;

    Ok(SummarizeForm {
        language,
        text,
        params: SummaryParams::new(max_new_tokens, min_length),
    })
}
