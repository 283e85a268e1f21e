/// HF Summarizer - a small front end for hosted Hugging Face summarization models.
///
/// The crate takes a piece of text, a language and two length limits, sends
/// them to the Hugging Face inference router and hands back the summary.
///
/// # Architecture
///
/// - `core` resolves the `HF_TOKEN` credential and endpoint settings once at startup
/// - `ai` owns the HTTP call and the decoding of the model response
/// - `features` runs one validate -> call -> render pass per user action
/// - `views` renders the outcome as plain text for the terminal
///
/// # Example
///
/// ```no_run
/// use hf_summarizer::ai::HfClient;
/// use hf_summarizer::core::config::AppConfig;
/// use hf_summarizer::core::models::{Language, SummaryParams};
/// use hf_summarizer::features::summarize::{SummarizeForm, run};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     hf_summarizer::setup_logging();
///
///     let config = AppConfig::load()?;
///     let client = HfClient::new(&config)?;
///
///     let form = SummarizeForm {
///         language: Language::English,
///         text: "The quick brown fox jumps over the lazy dog.".to_string(),
///         params: SummaryParams::default(),
///     };
///
///     let outcome = run(&client, &form).await;
///     println!("{}", hf_summarizer::views::render_outcome(&outcome));
///     Ok(())
/// }
/// ```
pub mod ai;
pub mod core;
pub mod errors;
pub mod features;
pub mod views;

pub use errors::SummarizerError;

/// Configure structured logging with JSON format.
///
/// Log lines go to stderr so stdout only ever carries the rendered summary.
/// The max level is INFO, or DEBUG when built with the `debug-logs` feature.
///
/// # Example
///
/// ```
/// hf_summarizer::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;

    #[cfg(feature = "debug-logs")]
    let max_level = tracing_subscriber::filter::LevelFilter::DEBUG;
    #[cfg(not(feature = "debug-logs"))]
    let max_level = tracing_subscriber::filter::LevelFilter::INFO;

    let fmt_layer = tracing_subscriber::fmt::layer()
        .json()
        .with_target(true)
        .with_writer(std::io::stderr)
        .with_filter(max_level);

    // A subscriber may already be installed (tests, embedding apps); keep it.
    let _ = tracing_subscriber::registry().with(fmt_layer).try_init();
}
