//! # Saga Summarizer
//!
//! Recursive, cache-backed summarization of chapter ranges.
//!
//! ## Architecture
//!
//! ```text
//! ChapterRange
//!     │
//!     ├──> Load chapters (missing files skipped)
//!     │
//!     ├──> Concatenate with blank-line separators
//!     │
//!     ├──> Under threshold? ──> single generator call
//!     │
//!     └──> Over threshold
//!          ├─> Paragraph-aligned chunks (saga-chunker)
//!          ├─> Per-chunk generator call, in order
//!          │     └─> failure degrades to an excerpt placeholder
//!          ├─> Combine chunk summaries
//!          └─> Still over threshold? one reduction pass,
//!              falling back to the combined text on failure
//! ```
//!
//! Every generator invocation is keyed by its exact input text in an LRU
//! cache, so identical text is summarized at most once per session. Summary
//! artifacts are idempotent by range: an existing file is reported, never
//! overwritten.

mod cache;
mod config;
mod error;
mod prompt;
mod summarizer;

pub use cache::SummaryCache;
pub use config::SummarizerConfig;
pub use error::{Result, SummarizeError};
pub use prompt::build_summary_prompt;
pub use summarizer::{Summarizer, SummaryOutcome};
