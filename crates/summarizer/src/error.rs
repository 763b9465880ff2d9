use saga_store::ChapterRange;
use thiserror::Error;

/// Result type for summarizer operations
pub type Result<T> = std::result::Result<T, SummarizeError>;

/// Errors that can escape a summarization request.
///
/// Most generator failures are degraded into placeholder text instead of
/// surfacing here; only pre-flight budget rejections propagate.
#[derive(Error, Debug)]
pub enum SummarizeError {
    /// No chapter file resolved anywhere in the requested range
    #[error("No chapter files found in range {range}")]
    NoChapters { range: ChapterRange },

    /// Store error
    #[error("Store error: {0}")]
    Store(#[from] saga_store::StoreError),

    /// Chunker error
    #[error("Chunker error: {0}")]
    Chunker(#[from] saga_chunker::ChunkerError),

    /// Generator failure that must not be degraded (budget exhaustion)
    #[error("Generator error: {0}")]
    Generator(#[from] saga_generator::GeneratorError),
}
