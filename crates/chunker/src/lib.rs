//! # Saga Chunker
//!
//! Paragraph-aligned chunking of chapter prose for the summarization
//! pipeline.
//!
//! ## Philosophy
//!
//! Chunk boundaries never fall inside a paragraph: a chunk is a run of
//! whole paragraphs whose joined length stays under the configured
//! character limit. A single paragraph that alone exceeds the limit passes
//! through as its own oversized chunk rather than being split mid-thought.
//!
//! ## Example
//!
//! ```rust
//! use saga_chunker::{Chunker, ChunkerConfig};
//!
//! let chunker = Chunker::new(ChunkerConfig { max_chunk_chars: 40 });
//! let chunks = chunker.split("First paragraph.\n\nSecond paragraph.\n\nThird.").unwrap();
//! assert!(chunks.len() >= 1);
//! ```

mod chunker;
mod config;
mod error;
mod types;

pub use chunker::{split_paragraphs, Chunker};
pub use config::ChunkerConfig;
pub use error::{ChunkerError, Result};
pub use types::{ChunkingStats, TextChunk};
