mod packer;


pub use packer::{Chunk, ChunkPacker, Metadata, TextChunker};
