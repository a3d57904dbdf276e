//! Elias omega code (method 111). Values start at 1.
//!
//! A codeword is built back to front. Start with the terminating "0", then while the
//! value is above 1, put its binary form in front and carry on with that form's length
//! minus one. Each group therefore announces the width of the group after it, and the
//! terminating 0 can only appear where a group would otherwise have to start with a 1.
//!
//! | value | codeword     |
//! |-------|--------------|
//! | 1     | 0            |
//! | 2     | 100          |
//! | 3     | 110          |
//! | 4     | 101000       |
//! | 16    | 10100100000  |

use super::codeword::{bit_width, Codeword};

pub const METHOD_CODE: u32 = 111;

/// Encode a value of 1 or more. (0 has no omega code; it is treated as 1.)
pub fn encode(value: usize) -> Codeword {
    let mut code = Codeword::new(0, 1);
    let mut n = value;
    while n > 1 {
        let width = bit_width(n);
        code.prepend(n as u32, width);
        n = width as usize - 1;
    }
    code
}

/// Decode exactly one codeword. Returns None unless `code` is one complete omega codeword
/// with nothing after it.
pub fn decode(code: &Codeword) -> Option<usize> {
    let mut n = 1_usize;
    let mut idx = 0;
    loop {
        if idx >= code.len() {
            return None;
        }
        // A 0 where a group would start ends the code.
        if !code.bit(idx) {
            return (idx + 1 == code.len()).then(|| n);
        }
        let width = n + 1;
        n = code.field(idx, width)? as usize;
        idx += width;
    }
}
