use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChunkError {
    #[error(
        "Failed to load tokenizer '{model}': {reason}. \
         Check network access to the HuggingFace hub, or load a local \
         tokenizer.json with HfTokenCounter::from_file"
    )]
    TokenizerLoad { model: String, reason: String },

    #[error("chunk_size must be greater than zero")]
    ZeroChunkSize,

    #[error("overlap ({overlap}) must be smaller than chunk_size ({chunk_size})")]
    OverlapTooLarge { overlap: usize, chunk_size: usize },
}
