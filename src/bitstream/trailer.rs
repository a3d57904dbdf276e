//! The padding trailer closes every compressed stream.
//!
//! With `last` data bits in the final partial byte, the encoder appends:
//! - `last == 0`: the byte 00000001.
//! - otherwise: `7 - last` zero bits, a 1 marker bit, then the byte `9 - last`.
//!
//! The final byte `p` is therefore always in 1..=8, and the trailer is `7 + p` bits long
//! in both cases. The decoder reads `p`, checks the marker and zero run, and strips them.

use super::{bitpacker::BitPacker, bitreader::BitReader};
use crate::error::Malformed;

/// Write the trailer for a stream whose final partial byte holds `last_bits` bits.
pub fn write(bp: &mut BitPacker, last_bits: u8) {
    debug_assert!(last_bits < 8);
    if last_bits == 0 {
        bp.out8(0b0000_0001);
    } else {
        // 7 - last_bits zeros followed by the marker is the value 1 in 8 - last_bits bits
        bp.out24(((8 - last_bits as u32) << 24) | 1);
        bp.out8(9 - last_bits);
    }
}

/// Number of bits the trailer ending in `p` occupies.
pub fn len(p: u8) -> usize {
    7 + p as usize
}

/// Validate the trailer of `stream` and return how many bits precede it.
pub fn data_bits(stream: &[u8]) -> Result<usize, Malformed> {
    let p = *stream.last().ok_or(Malformed::EmptyStream)?;
    let stream_bits = stream.len() * 8;
    let trailer_bits = len(p);
    if trailer_bits > stream_bits {
        return Err(Malformed::TrailerTooLong {
            trailer_bits,
            stream_bits,
        });
    }
    if !(1..=8).contains(&p) {
        return Err(Malformed::InvalidTrailer(p));
    }
    let data_bits = stream_bits - trailer_bits;
    if p > 1 {
        // The zero run and marker in front of the final byte must read as the value 1.
        let mut br = BitReader::new(stream);
        br.seek(data_bits);
        if br.bint(trailer_bits - 8) != Some(1) {
            return Err(Malformed::InvalidTrailer(p));
        }
    }
    Ok(data_bits)
}
