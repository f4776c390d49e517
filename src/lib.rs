// Public API exports
pub mod chunker;
pub mod config;
pub mod error;
pub mod segmenter;
pub mod token_counter;

// Re-export main types for convenience
pub use chunker::{Chunk, ChunkPacker, Metadata, TextChunker};

pub use config::{ChunkerConfig, DEFAULT_TOKENIZER};

pub use error::ChunkError;

pub use segmenter::{SentenceSplit, UnicodeSegmenter};

pub use token_counter::{HfTokenCounter, TokenCounter};
