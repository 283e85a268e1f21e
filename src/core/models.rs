use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub const AR_MODEL_ID: &str = "ahmed0189/mT5-Arabic-text-summarization";
pub const EN_MODEL_ID: &str = "facebook/bart-large-cnn";

pub const MAX_NEW_TOKENS_MIN: u32 = 30;
pub const MAX_NEW_TOKENS_MAX: u32 = 250;
pub const MAX_NEW_TOKENS_DEFAULT: u32 = 120;

pub const MIN_LENGTH_MIN: u32 = 5;
pub const MIN_LENGTH_MAX: u32 = 150;
pub const MIN_LENGTH_DEFAULT: u32 = 30;

/// Input language; decides which hosted model is used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Language {
    #[default]
    Arabic,
    English,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::Arabic, Language::English];

    #[must_use]
    pub fn model_id(self) -> &'static str {
        match self {
            Language::Arabic => AR_MODEL_ID,
            Language::English => EN_MODEL_ID,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Language::Arabic => "Arabic",
            Language::English => "English",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "arabic" | "ar" => Ok(Language::Arabic),
            "english" | "en" => Ok(Language::English),
            other => Err(format!("unsupported language: {other} (expected arabic or english)")),
        }
    }
}

/// Generation limits sent along with the text. Always within the slider ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SummaryParams {
    max_new_tokens: u32,
    min_length: u32,
}

impl SummaryParams {
    /// Builds params, clamping each value into its allowed range.
    #[must_use]
    pub fn new(max_new_tokens: u32, min_length: u32) -> Self {
        Self {
            max_new_tokens: max_new_tokens.clamp(MAX_NEW_TOKENS_MIN, MAX_NEW_TOKENS_MAX),
            min_length: min_length.clamp(MIN_LENGTH_MIN, MIN_LENGTH_MAX),
        }
    }

    #[must_use]
    pub fn max_new_tokens(&self) -> u32 {
        self.max_new_tokens
    }

    #[must_use]
    pub fn min_length(&self) -> u32 {
        self.min_length
    }
}

impl Default for SummaryParams {
    fn default() -> Self {
        Self::new(MAX_NEW_TOKENS_DEFAULT, MIN_LENGTH_DEFAULT)
    }
}

/// JSON body posted to the inference router.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummarizationPayload {
    pub inputs: String,
    pub parameters: GenerationParameters,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationParameters {
    pub max_new_tokens: u32,
    pub min_length: u32,
    pub do_sample: bool,
}

impl SummarizationPayload {
    /// Greedy decoding is always requested (`do_sample: false`).
    #[must_use]
    pub fn new(text: &str, params: SummaryParams) -> Self {
        Self {
            inputs: text.to_string(),
            parameters: GenerationParameters {
                max_new_tokens: params.max_new_tokens(),
                min_length: params.min_length(),
                do_sample: false,
            },
        }
    }
}
