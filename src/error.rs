//! Errors reported by the codec and by the file-level wrappers around it.
//!
//! Every failure is a plain value handed back to the caller. None of them are fatal, and
//! the codec never retries: the same input always produces the same error.

/// Why a compressed stream could not be decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Malformed {
    /// There is not even a trailer byte to read.
    #[error("the stream is empty")]
    EmptyStream,

    /// The final byte does not hold a trailer value the encoder can produce, or the
    /// marker bit and zero run in front of it are wrong.
    #[error("invalid padding trailer value {0}")]
    InvalidTrailer(u8),

    /// The trailer asks for more bits to be stripped than the stream contains.
    #[error("trailer of {trailer_bits} bits exceeds a stream of {stream_bits} bits")]
    TrailerTooLong {
        trailer_bits: usize,
        stream_bits: usize,
    },

    /// No codeword of the table starts with the bits read at this offset.
    #[error("no codeword matches the bits ending at offset {0}")]
    UnknownCodeword(usize),

    /// A codeword decoded to a rank the dictionary has no byte for.
    #[error("rank {rank} is outside a dictionary of {dictionary_len} bytes")]
    RankOutOfRange { rank: usize, dictionary_len: usize },

    /// The stream ended part way through a codeword.
    #[error("{0} bits left over after the last complete codeword")]
    DanglingBits(usize),
}

/// Errors returned by this crate.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Compression was requested on a zero-length buffer.
    #[error("the input is empty")]
    EmptyInput,

    /// The method identifier names neither code family.
    #[error("unknown compression method: {0}")]
    UnknownMethod(String),

    /// Decoding was requested without the dictionary written at compression time.
    #[error("the dictionary is missing")]
    MissingDictionary,

    /// The compressed stream is truncated or corrupt.
    #[error("malformed stream: {0}")]
    MalformedStream(#[from] Malformed),

    /// The assignment handed to the encoder has no codeword for a byte of the buffer.
    #[error("no codeword assigned to byte {0:#04x}")]
    UnassignedByte(u8),

    /// Reading or writing one of the artifacts failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
