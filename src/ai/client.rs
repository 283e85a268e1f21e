//! Hugging Face inference router client
//!
//! Encapsulates the single outbound call used to produce a summary.

use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use serde_json::Value;
use tracing::{debug, info, warn};
use url::Url;

use super::response::SummaryResponse;
use crate::core::config::{AppConfig, HfToken};
use crate::core::models::{SummarizationPayload, SummaryParams};
use crate::errors::SummarizerError;

/// Longest raw error body excerpt kept in an `ApiError`.
pub const ERROR_BODY_EXCERPT_CHARS: usize = 500;

/// Anything that can turn text into a summary with a given model.
#[async_trait]
pub trait Summarize: Send + Sync {
    async fn summarize(
        &self,
        model_id: &str,
        text: &str,
        params: SummaryParams,
    ) -> Result<String, SummarizerError>;
}

#[must_use]
pub fn build_payload(text: &str, params: SummaryParams) -> SummarizationPayload {
    SummarizationPayload::new(text, params)
}

/// `{base}/hf-inference/models/{model_id}`
///
/// # Errors
///
/// Returns `ConfigError` when the base URL does not parse.
pub fn endpoint_url(base: &str, model_id: &str) -> Result<Url, SummarizerError> {
    let mut base = base.to_string();
    if !base.ends_with('/') {
        base.push('/');
    }
    let base = Url::parse(&base)
        .map_err(|e| SummarizerError::ConfigError(format!("HF_API_BASE_URL {base}: {e}")))?;
    base.join(&format!("hf-inference/models/{model_id}"))
        .map_err(|e| SummarizerError::ConfigError(format!("model id {model_id}: {e}")))
}

/// Turns a non-success body into the detail part of an `ApiError`: compact
/// JSON when it parses, otherwise the first 500 characters of the raw text.
#[must_use]
pub fn error_detail(body: &str) -> String {
    match serde_json::from_str::<Value>(body) {
        Ok(json) => json.to_string(),
        Err(_) => body.chars().take(ERROR_BODY_EXCERPT_CHARS).collect(),
    }
}

/// Client for the hosted summarization models
pub struct HfClient {
    http: Client,
    token: HfToken,
    api_base_url: String,
}

impl HfClient {
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(config: &AppConfig) -> Result<Self, SummarizerError> {
        let http = Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| SummarizerError::HttpError(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            token: config.hf_token.clone(),
            api_base_url: config.api_base_url.clone(),
        })
    }

    fn headers(&self) -> Result<HeaderMap, SummarizerError> {
        let mut headers = HeaderMap::new();
        let auth_value = HeaderValue::from_str(&format!("Bearer {}", self.token.expose()))
            .map_err(|e| {
                SummarizerError::ConfigError(format!("Invalid Authorization header: {e}"))
            })?;
        headers.insert(AUTHORIZATION, auth_value);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        Ok(headers)
    }
}

#[async_trait]
impl Summarize for HfClient {
    async fn summarize(
        &self,
        model_id: &str,
        text: &str,
        params: SummaryParams,
    ) -> Result<String, SummarizerError> {
        let url = endpoint_url(&self.api_base_url, model_id)?;
        let payload = build_payload(text, params);

        #[cfg(feature = "debug-logs")]
        debug!("Inference payload: {:?}", payload);

        info!(
            model_id,
            input_chars = text.chars().count(),
            max_new_tokens = params.max_new_tokens(),
            min_length = params.min_length(),
            "Requesting summary"
        );

        let response = self
            .http
            .post(url)
            .headers(self.headers()?)
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            let body = response.text().await.unwrap_or_else(|e| {
                format!("Failed to read error response body (status {status}): {e}")
            });
            warn!(status = status.as_u16(), "Inference request rejected");
            return Err(SummarizerError::ApiError {
                status: status.as_u16(),
                detail: error_detail(&body),
            });
        }

        let body: Value = response.json().await.map_err(|e| {
            SummarizerError::DecodeError(format!("Failed to parse inference response: {e}"))
        })?;

        let decoded = SummaryResponse::from_value(body);
        if matches!(decoded, SummaryResponse::Other(_)) {
            debug!("Unrecognised response shape, rendering body as-is");
        }

        Ok(decoded.into_text())
    }
}
