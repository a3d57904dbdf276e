//! Rust universal code compressor.
//!
//! Version 0.1.0
//!
//! Compresses data by giving each distinct byte value a codeword from a universal code, the most frequent values
//! getting the shortest codewords. Two code families are available:
//! - Elias omega (method 111)
//! - Levenshtein (method 222)
//!
//! Compression produces two artifacts: the packed stream, and a dictionary holding the byte values in rank order.
//! Both, and the method, are needed to decompress. The method is not recorded in the stream; the command line tool
//! carries it in the file extension.
//!
//! Basic usage to compress a file is as follows:
//!
//! `$> unizip -m omega photo.bmp`
//!
//! This will create photo.bmp.eoc and its dictionary photo.bmp.eod. The original file is kept.
//!
//! `$> unizip -d photo.bmp.eoc`
//!
//! restores photo.bmp.
//!
pub mod bitstream;
pub mod compression;
pub mod error;
pub mod tools;
pub mod universal_codes;

pub use compression::compress::{compress, Compressed};
pub use compression::decompress::{decompress, Decompressed};
pub use compression::dictionary::Dictionary;
pub use error::{Error, Malformed, Result};
pub use tools::report::Report;
pub use universal_codes::Method;
