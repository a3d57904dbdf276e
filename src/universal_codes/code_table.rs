use log::trace;

use super::{codeword::Codeword, Method};

/// The first `len` codewords of one method, in rank order. Position 0 holds the code for
/// the method's first rank, which is the shortest code.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CodeTable {
    method: Method,
    codes: Vec<Codeword>,
}

impl CodeTable {
    /// One code per possible byte value.
    pub const MAX_SIZE: usize = 256;

    /// Generate the table for `method` with `count` entries (capped at 256). A count of 0
    /// gives an empty table.
    pub fn generate(method: Method, count: usize) -> Self {
        let count = count.min(Self::MAX_SIZE);
        let first = method.first_rank();
        let codes: Vec<Codeword> = (first..first + count).map(|rank| method.encode(rank)).collect();
        trace!(
            "Generated {} {} codes, longest is {} bits.",
            codes.len(),
            method,
            codes.last().map_or(0, |code| code.len())
        );
        Self { method, codes }
    }

    pub fn method(&self) -> Method {
        self.method
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Codeword at dictionary position `idx`.
    pub fn get(&self, idx: usize) -> Option<&Codeword> {
        self.codes.get(idx)
    }

    /// Rank carried by the codeword at position `idx`.
    pub fn rank_of(&self, idx: usize) -> usize {
        idx + self.method.first_rank()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Codeword> {
        self.codes.iter()
    }
}
