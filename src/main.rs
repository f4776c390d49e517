use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use textchunk::{ChunkPacker, ChunkerConfig, HfTokenCounter, UnicodeSegmenter, DEFAULT_TOKENIZER};

/// Split text into sentence-aligned, token-bounded chunks
#[derive(Parser, Debug)]
#[command(name = "textchunk", version)]
struct Args {
    /// File to chunk; a built-in demo text is used when omitted
    input: Option<PathBuf>,

    /// Maximum tokens per chunk
    #[arg(long, default_value_t = 8000)]
    chunk_size: usize,

    /// Tokens of trailing context repeated in the next chunk
    #[arg(long, default_value_t = 500)]
    overlap: usize,

    /// Tokenizer model id on the HuggingFace hub
    #[arg(long, default_value = DEFAULT_TOKENIZER)]
    tokenizer: String,

    /// Load the tokenizer from a local tokenizer.json instead of the hub
    #[arg(long)]
    tokenizer_file: Option<PathBuf>,

    /// Print the chunk records as JSON instead of a summary
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let text = match &args.input {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => demo_text(),
    };

    let load_start = Instant::now();
    let counter = match &args.tokenizer_file {
        Some(path) => HfTokenCounter::from_file(path)?,
        None => HfTokenCounter::from_pretrained(&args.tokenizer)?,
    };
    let config = ChunkerConfig::new(args.chunk_size, args.overlap);
    let packer = ChunkPacker::new(counter, UnicodeSegmenter, config)?;
    println!(
        "✓ Chunker ready (size={}, overlap={}) [{:.2}s]\n",
        args.chunk_size,
        args.overlap,
        load_start.elapsed().as_secs_f64()
    );

    let chunks = packer.chunk(&text, None);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&chunks)?);
        return Ok(());
    }

    println!("Num chunks: {}", chunks.len());
    for chunk in &chunks {
        println!(
            "Chunk {} contains {} tokens",
            chunk.chunk_index, chunk.tokens
        );
    }

    Ok(())
}

/// The 50-sentence sample used when no input file is given
fn demo_text() -> String {
    (0..50)
        .map(|i| format!("This is sentence number {}.", i))
        .collect::<Vec<_>>()
        .join(" ")
}
