use hf_summarizer::setup_logging;

#[test]
fn test_logging_setup() {
    let result = std::panic::catch_unwind(|| {
        setup_logging();
    });

    assert!(result.is_ok(), "setup_logging function should not panic");
}

#[test]
fn test_logging_setup_is_idempotent() {
    setup_logging();
    setup_logging();
}
