use std::io::{IsTerminal, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use hf_summarizer::ai::HfClient;
use hf_summarizer::core::config::AppConfig;
use hf_summarizer::core::models::{
    Language, MAX_NEW_TOKENS_DEFAULT, MAX_NEW_TOKENS_MAX, MAX_NEW_TOKENS_MIN, MIN_LENGTH_DEFAULT,
    MIN_LENGTH_MAX, MIN_LENGTH_MIN, SummaryParams,
};
use hf_summarizer::features::{Outcome, SummarizeForm, run};
use hf_summarizer::views;
use tracing::error;

/// Summarize Arabic or English text with hosted Hugging Face models.
#[derive(Parser, Debug)]
#[command(name = "hf-summarize", version, long_about = None)]
struct Args {
    /// Input language (arabic or english)
    #[arg(short, long, default_value = "arabic")]
    language: Language,

    /// Max summary length
    #[arg(
        long,
        default_value_t = MAX_NEW_TOKENS_DEFAULT,
        value_parser = clap::value_parser!(u32)
            .range(i64::from(MAX_NEW_TOKENS_MIN)..=i64::from(MAX_NEW_TOKENS_MAX))
    )]
    max_new_tokens: u32,

    /// Min summary length
    #[arg(
        long,
        default_value_t = MIN_LENGTH_DEFAULT,
        value_parser = clap::value_parser!(u32)
            .range(i64::from(MIN_LENGTH_MIN)..=i64::from(MIN_LENGTH_MAX))
    )]
    min_length: u32,

    /// Read the input text from a file
    #[arg(short, long, conflicts_with = "text")]
    file: Option<PathBuf>,

    /// Fill the form through interactive prompts
    #[arg(short, long)]
    interactive: bool,

    /// Input text; read from stdin when omitted and stdin is piped
    text: Option<String>,
}

fn read_text(args: &Args) -> anyhow::Result<Option<String>> {
    if let Some(text) = &args.text {
        return Ok(Some(text.clone()));
    }
    if let Some(path) = &args.file {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        return Ok(Some(text));
    }
    if std::io::stdin().is_terminal() {
        return Ok(None);
    }
    let mut text = String::new();
    std::io::stdin()
        .read_to_string(&mut text)
        .context("Failed to read text from stdin")?;
    Ok(Some(text))
}

fn exit_code(outcome: &Outcome) -> ExitCode {
    match outcome {
        Outcome::Summary { .. } => ExitCode::SUCCESS,
        Outcome::Warning(_) => ExitCode::from(2),
        Outcome::Failed(_) => ExitCode::FAILURE,
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    hf_summarizer::setup_logging();

    let args = Args::parse();

    // The credential is a startup precondition: no prompt is shown without it.
    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            error!("Config error: {}", e);
            eprintln!("{}", views::render_error(&e.to_string()));
            return ExitCode::FAILURE;
        }
    };

    let client = match HfClient::new(&config) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("{}", views::render_error(&e.to_string()));
            return ExitCode::FAILURE;
        }
    };

    let text = match read_text(&args) {
        Ok(text) => text,
        Err(e) => {
            eprintln!("{}", views::render_error(&format!("{e:#}")));
            return ExitCode::FAILURE;
        }
    };

    let mut form = SummarizeForm {
        language: args.language,
        text: text.clone().unwrap_or_default(),
        params: SummaryParams::new(args.max_new_tokens, args.min_length),
    };

    if args.interactive || text.is_none() {
        println!("{}\n", views::APP_TITLE);
        form = match views::prompt_form(&form) {
            Ok(form) => form,
            Err(e) => {
                eprintln!("{}", views::render_error(&format!("{e:#}")));
                return ExitCode::FAILURE;
            }
        };
    }

    if !form.text.trim().is_empty() {
        eprintln!("{}", views::BUSY_MESSAGE);
    }
    let outcome = run(&client, &form).await;

    match &outcome {
        Outcome::Summary { .. } => println!("{}", views::render_outcome(&outcome)),
        _ => eprintln!("{}", views::render_outcome(&outcome)),
    }

    exit_code(&outcome)
}
