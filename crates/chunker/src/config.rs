use serde::{Deserialize, Serialize};

/// Configuration for paragraph-aligned chunking
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChunkerConfig {
    /// Maximum chunk size in characters (soft limit: a single oversized
    /// paragraph may still exceed it)
    pub max_chunk_chars: usize,
}

impl Default for ChunkerConfig {
    fn default() -> Self {
        Self {
            max_chunk_chars: 4_000,
        }
    }
}

impl ChunkerConfig {
    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.max_chunk_chars == 0 {
            return Err("max_chunk_chars must be > 0".to_string());
        }
        Ok(())
    }
}
