use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{info, warn};

use crate::config::ChunkerConfig;
use crate::error::ChunkError;
use crate::segmenter::{SentenceSplit, UnicodeSegmenter};
use crate::token_counter::{HfTokenCounter, TokenCounter};

/// Caller-supplied metadata, copied unchanged into every chunk of one call
pub type Metadata = Map<String, Value>;

/// A bounded, sentence-aligned segment of the input text
///
/// The field set is the data contract consumed downstream (embedding and
/// indexing pipelines) and is preserved key-for-key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chunk {
    /// Constituent sentences joined with single spaces
    pub text: String,
    /// Echo of the metadata passed to `chunk()`
    pub metadata: Metadata,
    /// Zero-based position within the output sequence
    pub chunk_index: usize,
    /// Number of chunks the call produced, identical across the sequence
    pub total_chunks: usize,
    /// Token count of `text` at construction time
    pub tokens: usize,
}

/// Accumulator for the chunk currently being filled: sentences paired
/// with their token counts, plus the running total
#[derive(Debug, Default)]
struct WorkingChunk {
    sentences: Vec<(String, usize)>,
    tokens: usize,
}

impl WorkingChunk {
    fn push(&mut self, sentence: String, tokens: usize) {
        self.sentences.push((sentence, tokens));
        self.tokens += tokens;
    }

    fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }

    fn join(&self) -> String {
        self.sentences
            .iter()
            .map(|(sentence, _)| sentence.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Greedy sentence packer
///
/// Groups sentences into chunks of at most `chunk_size` tokens, splitting
/// only at sentence boundaries, and seeds each chunk after the first with
/// up to `overlap` tokens of the previous chunk's trailing sentences so
/// context survives the boundary.
///
/// Generic over the two collaborators so the algorithm can be driven by
/// deterministic test doubles.
pub struct ChunkPacker<C, S> {
    counter: C,
    segmenter: S,
    config: ChunkerConfig,
}

impl<C: TokenCounter, S: SentenceSplit> ChunkPacker<C, S> {
    /// Validates the config; collaborator construction failures belong to
    /// the collaborators' own constructors
    pub fn new(counter: C, segmenter: S, config: ChunkerConfig) -> Result<Self, ChunkError> {
        config.validate()?;
        Ok(Self {
            counter,
            segmenter,
            config,
        })
    }

    pub fn config(&self) -> &ChunkerConfig {
        &self.config
    }

    /// Split `text` into an ordered sequence of bounded chunks
    ///
    /// Infallible: inputs the collaborators can answer never make the
    /// packer raise. Text within budget comes back as a single chunk
    /// untouched; text the segmenter cannot split falls back to a single
    /// oversized chunk rather than losing content.
    pub fn chunk(&self, text: &str, metadata: Option<Metadata>) -> Vec<Chunk> {
        let metadata = metadata.unwrap_or_default();

        let total_tokens = self.counter.count(text);
        if total_tokens <= self.config.chunk_size {
            return vec![Self::single(text, metadata, total_tokens)];
        }

        let sentences = self.segmenter.split(text);
        if sentences.is_empty() {
            warn!(
                "Segmenter found no sentences in {} tokens of text; emitting one oversized chunk",
                total_tokens
            );
            return vec![Self::single(text, metadata, total_tokens)];
        }

        let mut finalized: Vec<WorkingChunk> = Vec::new();
        let mut current = WorkingChunk::default();

        for sentence in sentences {
            let tokens = self.counter.count(&sentence);

            // A sentence that alone exceeds the budget is emitted whole as
            // its own chunk, never split or dropped
            if tokens > self.config.chunk_size {
                if !current.is_empty() {
                    finalized.push(std::mem::take(&mut current));
                }
                let mut oversized = WorkingChunk::default();
                oversized.push(sentence, tokens);
                finalized.push(oversized);
                continue;
            }

            if current.tokens + tokens > self.config.chunk_size && !current.is_empty() {
                let overlap = self.overlap_window(&current, tokens);
                finalized.push(std::mem::replace(&mut current, overlap));
            }

            current.push(sentence, tokens);
        }

        if !current.is_empty() {
            finalized.push(current);
        }

        let total_chunks = finalized.len();
        finalized
            .into_iter()
            .enumerate()
            .map(|(chunk_index, chunk)| Chunk {
                text: chunk.join(),
                metadata: metadata.clone(),
                chunk_index,
                total_chunks,
                tokens: chunk.tokens,
            })
            .collect()
    }

    /// Trailing sentences of the just-finalized chunk that seed the next
    /// one, in original order
    ///
    /// The backward fill stops at the first sentence that would exceed the
    /// overlap budget. The window is additionally capped so the incoming
    /// `next_tokens` sentence still fits under `chunk_size` once appended.
    fn overlap_window(&self, chunk: &WorkingChunk, next_tokens: usize) -> WorkingChunk {
        let budget = self
            .config
            .overlap
            .min(self.config.chunk_size - next_tokens);

        let mut window = WorkingChunk::default();
        for (sentence, tokens) in chunk.sentences.iter().rev() {
            if window.tokens + tokens > budget {
                break;
            }
            window.push(sentence.clone(), *tokens);
        }
        window.sentences.reverse();
        window
    }

    fn single(text: &str, metadata: Metadata, tokens: usize) -> Chunk {
        Chunk {
            text: text.to_string(),
            metadata,
            chunk_index: 0,
            total_chunks: 1,
            tokens,
        }
    }
}

/// Packer over the default collaborators: a hub-fetched HuggingFace
/// tokenizer and the UAX #29 segmenter
pub type TextChunker = ChunkPacker<HfTokenCounter, UnicodeSegmenter>;

impl TextChunker {
    /// Build a ready-to-use chunker, fetching (or reusing the cached copy
    /// of) the named tokenizer from the HuggingFace hub
    pub fn from_pretrained(model: &str, config: ChunkerConfig) -> Result<Self, ChunkError> {
        let counter = HfTokenCounter::from_pretrained(model)?;
        let packer = Self::new(counter, UnicodeSegmenter, config)?;
        info!(
            "Chunker initialized (size={}, overlap={})",
            packer.config.chunk_size, packer.config.overlap
        );
        Ok(packer)
    }
}
