use log::{debug, trace};
use rustc_hash::FxHashMap;

use crate::error::{Error, Result};
use crate::tools::freq_count::rank_by_frequency;
use crate::universal_codes::{code_table::CodeTable, codeword::Codeword, Method};

/// Distinct byte values of a buffer, most frequent first (ties in order of first
/// appearance). Position n holds the byte that was given the n-th code of the table.
///
/// This is the only way back from a decoded rank to a byte, so it is written out next to
/// the compressed stream, one byte per entry.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Dictionary(Vec<u8>);

impl Dictionary {
    /// Wrap dictionary bytes read back from storage.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self(bytes.to_vec())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Byte at dictionary position `idx`.
    pub fn get(&self, idx: usize) -> Option<u8> {
        self.0.get(idx).copied()
    }
}

/// Codeword to write for each byte value of one buffer.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Assignment(FxHashMap<u8, Codeword>);

impl Assignment {
    pub fn get(&self, byte: u8) -> Option<Codeword> {
        self.0.get(&byte).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn insert(&mut self, byte: u8, code: Codeword) {
        self.0.insert(byte, code);
    }
}

/// Rank the bytes of `data` by frequency and give each one a codeword of `method`.
pub fn build(data: &[u8], method: Method) -> Result<(Dictionary, Assignment)> {
    if data.is_empty() {
        return Err(Error::EmptyInput);
    }
    let ranked = rank_by_frequency(data);
    let table = CodeTable::generate(method, ranked.len());

    let mut assignment = Assignment::default();
    for (&byte, &code) in ranked.iter().zip(table.iter()) {
        trace!("\r{:#04x} -> {}", byte, code);
        assignment.insert(byte, code);
    }
    debug!(
        "Built a {} dictionary of {} symbols from {} bytes.",
        method,
        ranked.len(),
        data.len()
    );
    Ok((Dictionary(ranked), assignment))
}

#[cfg(test)]
mod test {
    use super::{build, Dictionary};
    use crate::error::Error;
    use crate::universal_codes::Method;

    #[test]
    fn empty_input_test() {
        for method in [Method::EliasOmega, Method::Levenshtein] {
            assert!(matches!(build(&[], method), Err(Error::EmptyInput)));
        }
    }

    #[test]
    fn single_value_test() {
        for len in [1, 2, 100, 10_000] {
            let data = vec![0x7f; len];
            let (dict, assignment) = build(&data, Method::EliasOmega).unwrap();
            assert_eq!(dict.as_bytes(), &[0x7f]);
            assert_eq!(assignment.get(0x7f).unwrap().to_string(), "0");
            let (dict, assignment) = build(&data, Method::Levenshtein).unwrap();
            assert_eq!(dict.as_bytes(), &[0x7f]);
            assert_eq!(assignment.get(0x7f).unwrap().to_string(), "0");
        }
    }

    #[test]
    fn two_value_test() {
        let (dict, assignment) = build(&[0x41, 0x41, 0x42], Method::Levenshtein).unwrap();
        assert_eq!(dict, Dictionary::from_bytes(&[0x41, 0x42]));
        assert_eq!(assignment.len(), 2);
        assert_eq!(assignment.get(0x41).unwrap().to_string(), "0");
        assert_eq!(assignment.get(0x42).unwrap().to_string(), "10");
        assert_eq!(assignment.get(0x43), None);
    }

    #[test]
    fn all_values_test() {
        let data: Vec<u8> = (0..=255).rev().chain(0..=10).collect();
        let (dict, assignment) = build(&data, Method::EliasOmega).unwrap();
        assert_eq!(dict.len(), 256);
        assert_eq!(assignment.len(), 256);
        // 0..=10 appear twice; the rest once, in order of first appearance
        assert_eq!(&dict.as_bytes()[..3], &[10, 9, 8]);
        assert_eq!(dict.get(11), Some(255));
        assert_eq!(dict.get(255), Some(11));
    }
}
