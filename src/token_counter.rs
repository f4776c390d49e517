use std::path::Path;

use tokenizers::Tokenizer;
use tracing::{error, info};

use crate::error::ChunkError;

/// Opaque length function over a fixed token encoding
///
/// Implementations must be deterministic: the packer compares sums of
/// per-sentence counts against the whole-text count at the packing
/// boundary.
pub trait TokenCounter: Send + Sync {
    /// Number of tokens in `text`, including any special tokens the
    /// encoding adds
    fn count(&self, text: &str) -> usize;
}

/// Token counting backed by a HuggingFace tokenizer
///
/// Construction is the expensive step (vocabulary load, possibly a hub
/// fetch); counting is cheap and read-only thereafter, so one instance
/// can be shared across calls.
pub struct HfTokenCounter {
    tokenizer: Tokenizer,
}

impl HfTokenCounter {
    /// Fetch the tokenizer for `model` from the HuggingFace hub, using
    /// the local cache when the artifacts are already present.
    ///
    /// This is the opt-in acquisition path with network side effects; a
    /// failure is a construction-time error, never a per-call one.
    pub fn from_pretrained(model: &str) -> Result<Self, ChunkError> {
        info!("Loading tokenizer '{}'", model);
        let tokenizer =
            Tokenizer::from_pretrained(model, None).map_err(|e| ChunkError::TokenizerLoad {
                model: model.to_string(),
                reason: e.to_string(),
            })?;
        info!("Tokenizer '{}' ready", model);
        Ok(Self { tokenizer })
    }

    /// Load a local `tokenizer.json`; no network access
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ChunkError> {
        let path = path.as_ref();
        let tokenizer = Tokenizer::from_file(path).map_err(|e| ChunkError::TokenizerLoad {
            model: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Ok(Self { tokenizer })
    }
}

impl TokenCounter for HfTokenCounter {
    fn count(&self, text: &str) -> usize {
        // add_special_tokens=true so the count matches what a model
        // consuming the chunk would actually receive
        match self.tokenizer.encode(text, true) {
            Ok(encoding) => encoding.len(),
            Err(e) => {
                error!("Tokenizer failed to encode text: {}", e);
                0
            }
        }
    }
}
