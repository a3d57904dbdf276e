//! The bitstream module forms the I/O subsystem for the Rust universal code compressor.
//!
//! Compressed streams are a plain run of codewords, packed most significant bit first, and closed by a padding trailer
//! that brings the stream to a byte boundary and records how many bits to strip again.
//!
//! This I/O subsystem is designed to efficiently interface with the other modules of the compressor. It is not intended
//! for more general use.
//!
pub mod bitpacker;
pub mod bitreader;
pub mod trailer;
