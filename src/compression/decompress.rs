use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Instant;

use log::{debug, error, info, trace};

use super::dictionary::Dictionary;
use crate::bitstream::{bitreader::BitReader, trailer};
use crate::error::{Error, Malformed, Result};
use crate::tools::cli::UzOpts;
use crate::tools::paths::{check_overwrite, dictionary_path, method_from_path, restored_path};
use crate::tools::report::Report;
use crate::universal_codes::{
    code_table::CodeTable,
    decode_tree::{DecodeTree, Step},
    Method,
};

/// Output of decompress(): the restored data and the statistics of the run.
#[derive(Debug, Clone)]
pub struct Decompressed {
    pub data: Vec<u8>,
    pub report: Report,
}

/// Restore the bytes of a stream written by encode(), given the dictionary of that run
/// and the same code family.
pub fn decode(stream: &[u8], dictionary: &Dictionary, method: Method) -> Result<Vec<u8>> {
    if dictionary.is_empty() {
        return Err(Error::MissingDictionary);
    }
    // Strip the padding trailer
    let data_bits = trailer::data_bits(stream)?;
    trace!(
        "\r{} data bits, {} trailer bits.",
        data_bits,
        stream.len() * 8 - data_bits
    );

    let tree = DecodeTree::new(&CodeTable::generate(method, CodeTable::MAX_SIZE));
    let mut br = BitReader::new(stream).with_limit(data_bits);
    // Every code is at least one bit long
    let mut out = Vec::with_capacity(data_bits);

    /*
    Walk the tree one bit at a time. Because the code is prefix-free, the first leaf we
    reach is the only codeword these bits can be, so emit its byte and start over at the
    root.
    */
    let mut node = DecodeTree::ROOT;
    let mut pending = 0;
    while let Some(bit) = br.bool_bit() {
        match tree.step(node, bit) {
            Step::Inner(next) => {
                node = next;
                pending += 1;
            }
            Step::Rank(rank) => {
                let byte = method
                    .index_of(rank)
                    .and_then(|idx| dictionary.get(idx))
                    .ok_or(Malformed::RankOutOfRange {
                        rank,
                        dictionary_len: dictionary.len(),
                    })?;
                out.push(byte);
                node = DecodeTree::ROOT;
                pending = 0;
            }
            Step::Dead => {
                debug!("No codeword continues the bits ending at {}.", br.loc());
                return Err(Malformed::UnknownCodeword(br.position()).into());
            }
        }
    }
    if pending > 0 {
        return Err(Malformed::DanglingBits(pending).into());
    }
    Ok(out)
}

/// Decompress `stream` with the chosen code family.
pub fn decompress(stream: &[u8], dictionary: &Dictionary, method: Method) -> Result<Decompressed> {
    let start = Instant::now();
    let data = decode(stream, dictionary, method)?;
    let report = Report::new(start.elapsed(), stream.len(), data.len());
    info!(
        "Decompressed {} bytes to {} bytes with {}.",
        stream.len(),
        data.len(),
        method
    );
    Ok(Decompressed { data, report })
}

/// Decompress `file`, reading its dictionary from beside it. The method comes from opts,
/// or failing that from the file extension.
pub fn decompress_file(opts: &UzOpts, file: &str) -> Result<Report> {
    let path = Path::new(file);
    let method = match opts.method.or_else(|| method_from_path(path)) {
        Some(method) => method,
        None => {
            error!("Can't tell which method compressed {}. Use -m.", file);
            let ext = path.extension().map(|e| e.to_string_lossy().into_owned());
            return Err(Error::UnknownMethod(ext.unwrap_or_default()));
        }
    };
    let out_path = match &opts.output {
        Some(output) => PathBuf::from(output),
        None => restored_path(path, method),
    };
    check_overwrite(&out_path, opts.force_overwrite)?;

    let dict_path = dictionary_path(path, method);
    let dictionary = match fs::read(&dict_path) {
        Ok(bytes) => Dictionary::from_bytes(&bytes),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            error!("Dictionary {} not found.", dict_path.display());
            return Err(Error::MissingDictionary);
        }
        Err(e) => return Err(e.into()),
    };
    let stream = fs::read(path)?;
    info!(
        "Read {} bytes from {} and a {} byte dictionary.",
        stream.len(),
        file,
        dictionary.len()
    );

    let decompressed = decompress(&stream, &dictionary, method)?;
    fs::write(&out_path, &decompressed.data)?;
    info!("Wrote {}.", out_path.display());
    Ok(decompressed.report)
}
