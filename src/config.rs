use serde::{Deserialize, Serialize};

use crate::error::ChunkError;

/// Tokenizer fetched from the HuggingFace hub when no model is named
pub const DEFAULT_TOKENIZER: &str = "Qwen/Qwen3-0.6B";

/// Token budgets for the packer
///
/// `chunk_size` is a soft limit: a single sentence whose own token count
/// exceeds it is still emitted whole as its own chunk rather than split
/// or dropped.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChunkerConfig {
    /// Maximum tokens per chunk
    #[serde(default = "default_chunk_size")]
    pub chunk_size: usize,
    /// Maximum tokens of trailing context repeated at the start of the
    /// next chunk
    #[serde(default = "default_overlap")]
    pub overlap: usize,
}

fn default_chunk_size() -> usize {
    8000
}

fn default_overlap() -> usize {
    500
}

impl Default for ChunkerConfig {
    fn default() -> Self {
        Self {
            chunk_size: default_chunk_size(),
            overlap: default_overlap(),
        }
    }
}

impl ChunkerConfig {
    pub fn new(chunk_size: usize, overlap: usize) -> Self {
        Self { chunk_size, overlap }
    }

    /// Reject budgets the packing loop has no sane semantics for:
    /// a zero chunk budget, or an overlap window as large as the chunks
    /// it is carried between
    pub fn validate(&self) -> Result<(), ChunkError> {
        if self.chunk_size == 0 {
            return Err(ChunkError::ZeroChunkSize);
        }
        if self.overlap >= self.chunk_size {
            return Err(ChunkError::OverlapTooLarge {
                overlap: self.overlap,
                chunk_size: self.chunk_size,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ChunkerConfig::default();
        assert_eq!(config.chunk_size, 8000);
        assert_eq!(config.overlap, 500);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_zero_chunk_size() {
        let config = ChunkerConfig::new(0, 0);
        assert!(matches!(config.validate(), Err(ChunkError::ZeroChunkSize)));
    }

    #[test]
    fn test_rejects_overlap_at_or_above_chunk_size() {
        assert!(ChunkerConfig::new(100, 100).validate().is_err());
        assert!(ChunkerConfig::new(100, 150).validate().is_err());
        assert!(ChunkerConfig::new(100, 99).validate().is_ok());
    }
}
