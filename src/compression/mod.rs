//! The compression module manages both directions of the Rust universal code compressor.
//!
//! Compression happens in the following steps:
//! - Frequency ranking: Count each byte value and order the distinct values by count, ties going to the value seen first.
//! - Dictionary: Hand the n-th ranked value the n-th codeword of the chosen universal code table.
//! - Bit packing: Write every input byte's codeword, in order, and close the stream with the padding trailer.
//!
//! The ranked byte values are the dictionary. They are not part of the stream and must be stored beside it.
//!
//! Decompression follows the inverse of the compression process.
//! - Trailer: Read the final byte to find how many padding bits to strip.
//! - Tree walk: Follow the remaining bits through a binary trie of the code table, one edge per bit.
//! - Dictionary lookup: Turn each rank found back into its byte value.
//!
//! Every step is a pure, single threaded computation over in-memory buffers.
//!

pub mod compress;
pub mod decompress;
pub mod dictionary;
