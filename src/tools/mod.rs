//! The tools module provides several helper functions for the Rust universal code compressor.
//!
//! The tools are:
//! - cli: Command line interface.
//! - freq_count: Frequency count and first-occurrence ranking of byte values.
//! - paths: Naming of the compressed, dictionary and restored files.
//! - report: Running time and size ratios of a compress or decompress call.
//!
pub mod cli;
pub mod freq_count;
pub mod paths;
pub mod report;
