use thiserror::Error;

#[derive(Debug, Error)]
pub enum SummarizerError {
    #[error(
        "HF_TOKEN is required. Add it to the secrets file or set it as an environment variable named HF_TOKEN."
    )]
    MissingToken,

    #[error("Please enter some text first.")]
    EmptyInput,

    #[error("Failed to send HTTP request: {0}")]
    HttpError(String),

    #[error("HTTP {status}: {detail}")]
    ApiError { status: u16, detail: String },

    #[error("Failed to decode response body: {0}")]
    DecodeError(String),

    #[error("Invalid configuration: {0}")]
    ConfigError(String),
}

impl SummarizerError {
    /// Status code of a non-success inference response, if this is one.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            SummarizerError::ApiError { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for SummarizerError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            return SummarizerError::HttpError(format!("request timed out: {error}"));
        }
        SummarizerError::HttpError(error.to_string())
    }
}
