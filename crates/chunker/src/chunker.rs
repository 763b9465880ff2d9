use crate::config::ChunkerConfig;
use crate::error::{ChunkerError, Result};
use crate::types::{ChunkingStats, TextChunk};
use once_cell::sync::Lazy;
use regex::Regex;

static PARAGRAPH_BREAK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n\s*\n").expect("valid paragraph break pattern"));

/// Split text into paragraphs on blank-line boundaries.
///
/// Runs of whitespace-only lines count as a single break; empty fragments
/// are dropped.
#[must_use]
pub fn split_paragraphs(text: &str) -> Vec<&str> {
    PARAGRAPH_BREAK
        .split(text)
        .filter(|p| !p.trim().is_empty())
        .collect()
}

/// Paragraph-aligned chunker for chapter prose
pub struct Chunker {
    config: ChunkerConfig,
}

impl Chunker {
    /// Create a new chunker with configuration
    #[must_use]
    pub fn new(config: ChunkerConfig) -> Self {
        config
            .validate()
            .expect("Invalid chunker configuration provided");
        Self { config }
    }

    /// Split text into chunks of whole paragraphs.
    ///
    /// Paragraphs accumulate into the current chunk until appending the
    /// next one would push it past `max_chunk_chars`; the chunk is then
    /// flushed and the paragraph starts a new one. A paragraph that alone
    /// exceeds the limit becomes its own oversized chunk.
    pub fn split(&self, text: &str) -> Result<Vec<TextChunk>> {
        if text.trim().is_empty() {
            return Err(ChunkerError::EmptyContent);
        }

        let max = self.config.max_chunk_chars;
        let mut chunks = Vec::new();
        let mut buffer = String::new();

        for paragraph in split_paragraphs(text) {
            let para_chars = paragraph.chars().count();
            let buffer_chars = buffer.chars().count();
            let candidate = if buffer.is_empty() {
                para_chars
            } else {
                // Account for the blank-line separator between paragraphs.
                buffer_chars + 2 + para_chars
            };

            if candidate <= max || buffer.is_empty() {
                if para_chars > max {
                    log::debug!("Oversized paragraph ({para_chars} chars) passes through whole");
                }
                if !buffer.is_empty() {
                    buffer.push_str("\n\n");
                }
                buffer.push_str(paragraph);
            } else {
                chunks.push(TextChunk::new(chunks.len(), std::mem::take(&mut buffer)));
                buffer.push_str(paragraph);
            }
        }

        if !buffer.is_empty() {
            chunks.push(TextChunk::new(chunks.len(), buffer));
        }

        Ok(chunks)
    }

    /// Get configuration
    #[must_use]
    pub const fn config(&self) -> &ChunkerConfig {
        &self.config
    }

    /// Get statistics about chunking
    #[must_use]
    pub fn get_stats(chunks: &[TextChunk]) -> ChunkingStats {
        ChunkingStats::from_chunks(chunks)
    }
}

impl Default for Chunker {
    fn default() -> Self {
        Self::new(ChunkerConfig::default())
    }
}
