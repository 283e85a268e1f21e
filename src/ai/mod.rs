//! All remote inference functionality

pub mod client;
pub mod response;

// Re-export main types for convenience
pub use client::{HfClient, Summarize};
pub use response::SummaryResponse;
