use serde::{Deserialize, Serialize};

/// A paragraph-aligned slice of concatenated chapter text.
///
/// Chunks are produced in source order; joining their contents with blank
/// lines reconstructs the input modulo blank-line normalization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextChunk {
    /// Position of this chunk within the source text (0-based)
    pub index: usize,

    /// Chunk content: one or more whole paragraphs joined by blank lines
    pub content: String,
}

impl TextChunk {
    #[must_use]
    pub fn new(index: usize, content: String) -> Self {
        Self { index, content }
    }

    /// Character count of the chunk content
    #[must_use]
    pub fn char_count(&self) -> usize {
        self.content.chars().count()
    }

    /// Number of paragraphs in this chunk
    #[must_use]
    pub fn paragraph_count(&self) -> usize {
        crate::split_paragraphs(&self.content).len()
    }
}

/// Statistics about chunking results
#[derive(Debug, Clone)]
pub struct ChunkingStats {
    pub total_chunks: usize,
    pub total_chars: usize,
    pub avg_chars_per_chunk: usize,
    pub min_chars: usize,
    pub max_chars: usize,
}

impl ChunkingStats {
    #[must_use]
    pub fn from_chunks(chunks: &[TextChunk]) -> Self {
        Self {
            total_chunks: chunks.len(),
            total_chars: chunks.iter().map(TextChunk::char_count).sum(),
            avg_chars_per_chunk: if chunks.is_empty() {
                0
            } else {
                chunks.iter().map(TextChunk::char_count).sum::<usize>() / chunks.len()
            },
            min_chars: chunks.iter().map(TextChunk::char_count).min().unwrap_or(0),
            max_chars: chunks.iter().map(TextChunk::char_count).max().unwrap_or(0),
        }
    }
}

impl std::fmt::Display for ChunkingStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Chunks: {} | Chars: {} | Avg: {} | Range: {}-{}",
            self.total_chunks,
            self.total_chars,
            self.avg_chars_per_chunk,
            self.min_chars,
            self.max_chars
        )
    }
}
