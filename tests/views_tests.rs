use hf_summarizer::features::Outcome;
use hf_summarizer::views::{BUSY_MESSAGE, render_caption, render_outcome};

#[test]
fn summary_renders_heading_text_and_model_caption() {
    let outcome = Outcome::Summary {
        summary: "A fox jumped.".to_string(),
        model_id: "facebook/bart-large-cnn".to_string(),
    };
    let rendered = render_outcome(&outcome);

    let lines: Vec<&str> = rendered.lines().collect();
    assert_eq!(lines[0], "Summary");
    assert!(rendered.contains("A fox jumped."));
    assert_eq!(lines.last().copied(), Some("Model: facebook/bart-large-cnn"));
}

#[test]
fn warning_and_error_render_as_banners() {
    assert_eq!(
        render_outcome(&Outcome::Warning("Please enter some text first.".into())),
        "Warning: Please enter some text first."
    );
    assert_eq!(
        render_outcome(&Outcome::Failed("Request failed: HTTP 500: oops".into())),
        "Error: Request failed: HTTP 500: oops"
    );
}

#[test]
fn caption_and_busy_text() {
    assert_eq!(render_caption("x/y"), "Model: x/y");
    assert_eq!(BUSY_MESSAGE, "Summarizing on Hugging Face servers...");
}
