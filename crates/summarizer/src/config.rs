use serde::{Deserialize, Serialize};

/// Configuration for the recursive summarizer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummarizerConfig {
    /// Character length above which text is chunked before summarization,
    /// and above which combined chunk summaries get a second reduction pass
    pub chunk_threshold: usize,

    /// Chapters per summary window in smart mode
    pub window_size: u32,

    /// Characters of source text quoted in a failure placeholder
    pub excerpt_chars: usize,

    /// Maximum entries held by the summary cache
    pub cache_capacity: usize,
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self {
            chunk_threshold: 4_000,
            window_size: 10,
            excerpt_chars: 100,
            cache_capacity: 256,
        }
    }
}

impl SummarizerConfig {
    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.chunk_threshold == 0 {
            return Err("chunk_threshold must be > 0".to_string());
        }
        if self.window_size == 0 {
            return Err("window_size must be > 0".to_string());
        }
        if self.cache_capacity == 0 {
            return Err("cache_capacity must be > 0".to_string());
        }
        Ok(())
    }
}
