//! The universal_codes module generates the prefix-free code tables used by the Rust universal code compressor.
//!
//! Two code families are supported, each selected by a method identifier that travels with the compressed file:
//! - Elias omega (method 111), numbering its codes from 1.
//! - Levenshtein (method 222), numbering its codes from 0.
//!
//! Both families give short codes to small numbers. The compressor ranks the byte values of the input by frequency
//! and hands rank n the n-th code of the table, so the commonest byte gets the shortest code.
//!
//! Tables are pure functions of the method and the size. Nothing is cached between calls, so any number of threads
//! may generate tables at the same time.
//!
pub mod code_table;
pub mod codeword;
pub mod decode_tree;
pub mod elias_omega;
pub mod levenshtein;

use std::{fmt::Display, fmt::Formatter, str::FromStr};

use crate::error::Error;
use codeword::Codeword;

/// The two code families. Which one was used must be carried alongside the compressed
/// stream; the stream itself does not say.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Method {
    /// Self-delimiting recursive code, ranks start at 1.
    EliasOmega,
    /// Unary group count followed by binary groups, ranks start at 0.
    Levenshtein,
}

impl Method {
    /// Look up a method by its numeric identifier.
    pub fn from_code(code: u32) -> Result<Self, Error> {
        match code {
            elias_omega::METHOD_CODE => Ok(Method::EliasOmega),
            levenshtein::METHOD_CODE => Ok(Method::Levenshtein),
            other => Err(Error::UnknownMethod(other.to_string())),
        }
    }

    /// Numeric identifier of this method.
    pub fn code(self) -> u32 {
        match self {
            Method::EliasOmega => elias_omega::METHOD_CODE,
            Method::Levenshtein => levenshtein::METHOD_CODE,
        }
    }

    /// Rank carried by the first (shortest) code of the table.
    pub fn first_rank(self) -> usize {
        match self {
            Method::EliasOmega => 1,
            Method::Levenshtein => 0,
        }
    }

    /// Codeword for a rank. Ranks below `first_rank` are not valid.
    pub fn encode(self, rank: usize) -> Codeword {
        match self {
            Method::EliasOmega => elias_omega::encode(rank),
            Method::Levenshtein => levenshtein::encode(rank),
        }
    }

    /// Rank of a single complete codeword, or None if it is not one.
    pub fn decode(self, code: &Codeword) -> Option<usize> {
        match self {
            Method::EliasOmega => elias_omega::decode(code),
            Method::Levenshtein => levenshtein::decode(code),
        }
    }

    /// Dictionary position of a rank, or None for a rank below the first one.
    pub fn index_of(self, rank: usize) -> Option<usize> {
        rank.checked_sub(self.first_rank())
    }

    /// File extension used for streams compressed with this method.
    pub fn stream_extension(self) -> &'static str {
        match self {
            Method::EliasOmega => "eoc",
            Method::Levenshtein => "lc",
        }
    }

    /// File extension used for the matching dictionary.
    pub fn dictionary_extension(self) -> &'static str {
        match self {
            Method::EliasOmega => "eod",
            Method::Levenshtein => "ld",
        }
    }

    /// Recognise a compressed stream by its file extension.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext {
            "eoc" => Some(Method::EliasOmega),
            "lc" => Some(Method::Levenshtein),
            _ => None,
        }
    }
}

impl Default for Method {
    fn default() -> Self {
        Method::EliasOmega
    }
}

impl Display for Method {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Method::EliasOmega => write!(f, "Elias omega ({})", self.code()),
            Method::Levenshtein => write!(f, "Levenshtein ({})", self.code()),
        }
    }
}

impl FromStr for Method {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        match name.as_str() {
            "omega" | "elias-omega" | "eo" => Ok(Method::EliasOmega),
            "levenshtein" | "lev" | "l" => Ok(Method::Levenshtein),
            other => match other.parse::<u32>() {
                Ok(code) => Method::from_code(code),
                Err(_) => Err(Error::UnknownMethod(s.to_string())),
            },
        }
    }
}

#[cfg(test)]
mod test {
    use super::Method;
    use crate::error::Error;

    #[test]
    fn method_code_test() {
        assert_eq!(Method::from_code(111).unwrap(), Method::EliasOmega);
        assert_eq!(Method::from_code(222).unwrap(), Method::Levenshtein);
        assert!(matches!(Method::from_code(0), Err(Error::UnknownMethod(_))));
        assert!(matches!(Method::from_code(112), Err(Error::UnknownMethod(_))));
        assert_eq!(Method::Levenshtein.code(), 222);
    }

    #[test]
    fn method_parse_test() {
        assert_eq!("omega".parse::<Method>().unwrap(), Method::EliasOmega);
        assert_eq!("Levenshtein".parse::<Method>().unwrap(), Method::Levenshtein);
        assert_eq!("111".parse::<Method>().unwrap(), Method::EliasOmega);
        assert_eq!(" 222 ".parse::<Method>().unwrap(), Method::Levenshtein);
        assert!(matches!(
            "huffman".parse::<Method>(),
            Err(Error::UnknownMethod(name)) if name == "huffman"
        ));
        assert!(matches!("333".parse::<Method>(), Err(Error::UnknownMethod(_))));
    }

    #[test]
    fn extension_test() {
        for method in [Method::EliasOmega, Method::Levenshtein] {
            assert_eq!(Method::from_extension(method.stream_extension()), Some(method));
            assert_eq!(Method::from_extension(method.dictionary_extension()), None);
        }
    }

    #[test]
    fn first_codes_test() {
        assert_eq!(Method::EliasOmega.encode(1).to_string(), "0");
        assert_eq!(Method::Levenshtein.encode(0).to_string(), "0");
        assert_eq!(Method::EliasOmega.index_of(1), Some(0));
        assert_eq!(Method::EliasOmega.index_of(0), None);
        assert_eq!(Method::Levenshtein.index_of(0), Some(0));
        assert_eq!(Method::Levenshtein.index_of(5), Some(5));
    }
}
