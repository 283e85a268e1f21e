pub mod summarize;

// Re-exports for the thin bin
pub use summarize::{Outcome, SummarizeForm, run};
