//! Levenshtein code (method 222). Values start at 0.
//!
//! Zero is the single bit "0". Any other value is written as its binary form without the
//! leading 1, preceded by the length of that form written the same way, and so on until
//! a length of zero is reached. The number of groups `c` goes in front as a run of `c`
//! 1 bits closed by a 0.
//!
//! | value | codeword         |
//! |-------|------------------|
//! | 0     | 0                |
//! | 1     | 10               |
//! | 2     | 1100             |
//! | 4     | 1110000          |
//! | 16    | 111100000000     |

use super::codeword::{bit_width, Codeword};

pub const METHOD_CODE: u32 = 222;

/// Encode any value from 0 up.
pub fn encode(value: usize) -> Codeword {
    if value == 0 {
        return Codeword::new(0, 1);
    }
    let mut code = Codeword::empty();
    let mut groups = 1_u8;
    let mut m = value;
    loop {
        // Drop the leading 1
        let width = bit_width(m) - 1;
        code.prepend(m as u32, width);
        if width == 0 {
            break;
        }
        groups += 1;
        m = width as usize;
    }
    code.prepend(0, 1);
    code.prepend(u32::MAX, groups);
    code
}

/// Decode exactly one codeword. Returns None unless `code` is one complete Levenshtein
/// codeword with nothing after it.
pub fn decode(code: &Codeword) -> Option<usize> {
    let groups = code.iter().take_while(|&bit| bit).count();
    if groups == code.len() {
        return None;
    }
    if groups == 0 {
        return (code.len() == 1).then(|| 0);
    }
    let mut n = 1_usize;
    let mut idx = groups + 1;
    for _ in 1..groups {
        let width = n;
        // field() fails first for any width past the end of the codeword
        let rest = code.field(idx, width)? as usize;
        n = (1 << width) | rest;
        idx += width;
    }
    (idx == code.len()).then(|| n)
}

#[cfg(test)]
mod test {
    use super::{decode, encode};
    use crate::universal_codes::codeword::Codeword;

    #[test]
    fn known_codes_test() {
        let expected = [
            (0, "0"),
            (1, "10"),
            (2, "1100"),
            (3, "1101"),
            (4, "1110000"),
            (7, "1110011"),
            (8, "11101000"),
            (16, "111100000000"),
            (255, "111100111111111"),
        ];
        for (value, code) in expected {
            assert_eq!(encode(value).to_string(), code, "value {}", value);
        }
    }

    #[test]
    fn decode_test() {
        for value in 0..=1000 {
            assert_eq!(decode(&encode(value)), Some(value));
        }
    }

    #[test]
    fn decode_rejects_partial_test() {
        let cut: Codeword = "11100".parse().unwrap();
        assert_eq!(decode(&cut), None);
        let extra: Codeword = "100".parse().unwrap();
        assert_eq!(decode(&extra), None);
        let ones: Codeword = "111".parse().unwrap();
        assert_eq!(decode(&ones), None);
        assert_eq!(decode(&Codeword::empty()), None);
        // Group widths 1, 2, 7 and then 255, far past the end
        let wide: Codeword = "11111100111111111".parse().unwrap();
        assert_eq!(decode(&wide), None);
        for len in 1..=Codeword::MAX_LEN {
            let all_ones = Codeword::new(u32::MAX, len);
            assert_eq!(decode(&all_ones), None);
        }
    }
}
