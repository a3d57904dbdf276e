use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use log::{debug, info, trace};

use super::dictionary::{build, Assignment, Dictionary};
use crate::bitstream::bitpacker::BitPacker;
use crate::error::{Error, Result};
use crate::tools::cli::UzOpts;
use crate::tools::paths::{append_extension, check_overwrite, dictionary_path};
use crate::tools::report::Report;
use crate::universal_codes::Method;

/// Output of compress(): the packed stream, the dictionary needed to decode it, and the
/// statistics of the run.
#[derive(Debug, Clone)]
pub struct Compressed {
    pub stream: Vec<u8>,
    pub dictionary: Dictionary,
    pub report: Report,
}

/// Write the codeword of every byte of `data`, in order, and close the stream with the
/// padding trailer.
pub fn encode(data: &[u8], assignment: &Assignment) -> Result<Vec<u8>> {
    // Most codes used for skewed data are short, so start with half the input size.
    let mut bp = BitPacker::new(data.len() / 2 + 2);
    for &byte in data {
        let code = assignment.get(byte).ok_or(Error::UnassignedByte(byte))?;
        bp.out24(code.to_out24());
    }
    trace!("\r\x1b[43mData ends at {}.     \x1b[0m", bp.loc());
    let stream = bp.finish();
    debug!("Packed {} bytes into {} bytes.", data.len(), stream.len());
    Ok(stream)
}

/// Compress `data` with the chosen code family.
pub fn compress(data: &[u8], method: Method) -> Result<Compressed> {
    let start = Instant::now();
    let (dictionary, assignment) = build(data, method)?;
    let stream = encode(data, &assignment)?;
    let report = Report::new(start.elapsed(), data.len(), stream.len());
    info!(
        "Compressed {} bytes to {} bytes with {} ({} symbols).",
        data.len(),
        stream.len(),
        method,
        dictionary.len()
    );
    Ok(Compressed {
        stream,
        dictionary,
        report,
    })
}

/// Compress `file`, writing the stream and its dictionary next to it (or to the output
/// named in opts). The input file is left in place.
pub fn compress_file(opts: &UzOpts, file: &str) -> Result<Report> {
    let method = opts.method.unwrap_or_default();
    let path = Path::new(file);
    let stream_path = match &opts.output {
        Some(output) => PathBuf::from(output),
        None => append_extension(path, method.stream_extension()),
    };
    let dict_path = dictionary_path(&stream_path, method);
    check_overwrite(&stream_path, opts.force_overwrite)?;
    check_overwrite(&dict_path, opts.force_overwrite)?;

    let data = fs::read(path)?;
    info!("Read {} bytes from {}.", data.len(), file);

    let compressed = compress(&data, method)?;
    fs::write(&stream_path, &compressed.stream)?;
    fs::write(&dict_path, compressed.dictionary.as_bytes())?;
    info!(
        "Wrote {} and {}.",
        stream_path.display(),
        dict_path.display()
    );
    Ok(compressed.report)
}

#[cfg(test)]
mod test {
    use super::{compress, encode};
    use crate::compression::dictionary::{build, Assignment};
    use crate::error::Error;
    use crate::universal_codes::Method;

    #[test]
    fn two_symbol_stream_test() {
        // "0" + "0" + "10", then three zeros, the marker, and 9 - 4 = 5
        let compressed = compress(&[0x41, 0x41, 0x42], Method::Levenshtein).unwrap();
        assert_eq!(compressed.stream, vec![0b0010_0001, 0b0000_0101]);
        assert_eq!(compressed.dictionary.as_bytes(), &[0x41, 0x42]);
        assert_eq!(compressed.report.init_size, 3);
        assert_eq!(compressed.report.result_size, 2);
    }

    #[test]
    fn omega_stream_test() {
        // "0" + "0" + "100" + "0" = 6 bits, then a zero, the marker, and 9 - 6 = 3
        let compressed = compress(b"aaba", Method::EliasOmega).unwrap();
        assert_eq!(compressed.stream, vec![0b0010_0001, 0b0000_0011]);
        assert_eq!(compressed.dictionary.as_bytes(), b"ab");
    }

    #[test]
    fn aligned_stream_test() {
        // Eight single-bit codes fill exactly one byte, so the trailer is 00000001
        let compressed = compress(&[7; 8], Method::EliasOmega).unwrap();
        assert_eq!(compressed.stream, vec![0x00, 0x01]);
        let compressed = compress(&[7; 16], Method::Levenshtein).unwrap();
        assert_eq!(compressed.stream, vec![0x00, 0x00, 0x01]);
    }

    #[test]
    fn empty_input_test() {
        assert!(matches!(
            compress(&[], Method::EliasOmega),
            Err(Error::EmptyInput)
        ));
    }

    #[test]
    fn unassigned_byte_test() {
        let (_, assignment) = build(b"abc", Method::EliasOmega).unwrap();
        assert!(matches!(
            encode(b"abcd", &assignment),
            Err(Error::UnassignedByte(b'd'))
        ));
        assert!(matches!(
            encode(b"a", &Assignment::default()),
            Err(Error::UnassignedByte(b'a'))
        ));
    }

    #[test]
    fn encode_empty_test() {
        // Nothing to write still gets a trailer
        assert_eq!(encode(&[], &Assignment::default()).unwrap(), vec![0x01]);
    }
}
