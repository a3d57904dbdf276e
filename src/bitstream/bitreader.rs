//! BitReader: A module for the Rust universal code compressor.
//!
//! Reads a packed bitstream, most significant bit of each byte first.
//!
//! NOTE: The whole compressed stream is held in memory, so this reads from a slice. A limit
//! can be set so the padding trailer at the end is never handed out as data.
//!

const BIT_MASK: u8 = 0x80;

/// Reads bits from a byte slice.
#[derive(Debug)]
pub struct BitReader<'a> {
    buffer: &'a [u8],
    /// Absolute position of the next bit to read.
    position: usize,
    /// Number of bits that may be read. Never more than buffer.len() * 8.
    limit: usize,
}

impl<'a> BitReader<'a> {
    /// Creates a new BitReader over every bit of `buffer`.
    pub fn new(buffer: &'a [u8]) -> Self {
        Self {
            buffer,
            position: 0,
            limit: buffer.len() * 8,
        }
    }

    /// Stop reading after `bits` bits. (Cannot be used to extend past the buffer.)
    pub fn with_limit(mut self, bits: usize) -> Self {
        self.limit = bits.min(self.buffer.len() * 8);
        self
    }

    /// Move to an absolute bit position.
    pub fn seek(&mut self, position: usize) {
        self.position = position.min(self.limit);
    }

    /// Return bit as Option<usize> (1 or 0), or None if there is no more data to read
    pub fn bit(&mut self) -> Option<usize> {
        if self.position >= self.limit {
            return None;
        }
        let byte = self.buffer[self.position / 8];
        let bit = (byte & (BIT_MASK >> (self.position % 8))) != 0;
        self.position += 1;
        Some(bit as usize)
    }

    /// Return Option<Bool> *true* if the next bit is 1, *false* if 0, consuming the bit,
    /// or None if there is no more data to read
    pub fn bool_bit(&mut self) -> Option<bool> {
        self.bit().map(|bit| bit == 1)
    }

    /// Return Option<usize> of the next n bits, or None if fewer than n bits remain. Nothing
    /// is consumed when None is returned.
    pub fn bint(&mut self, n: usize) -> Option<usize> {
        if n > self.remaining() || n > usize::BITS as usize {
            return None;
        }
        /*
        Take whatever is left of the current byte first, then whole bytes, then the top
        bits of the final byte.
        */
        let mut result = 0_usize;
        let mut n = n;
        while n > 0 {
            let offset = self.position % 8;
            let take = n.min(8 - offset);
            let byte = self.buffer[self.position / 8] as usize;
            let bits = (byte >> (8 - offset - take)) & ((1 << take) - 1);
            result = result << take | bits;
            self.position += take;
            n -= take;
        }
        Some(result)
    }

    /// Returns a byte as an Option<u8>, or None if there is no more data to read. This is
    /// a convenience function, and calls bint(8).
    pub fn byte(&mut self) -> Option<u8> {
        self.bint(8).map(|byte| byte as u8)
    }

    /// Bits left before the limit.
    pub fn remaining(&self) -> usize {
        self.limit - self.position
    }

    /// Absolute position of the next bit.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Debugging function. Report current position in the buffer.
    pub fn loc(&self) -> String {
        format!("[{}.{}]", self.position / 8, self.position % 8)
    }
}

#[cfg(test)]
mod test {
    use super::BitReader;

    #[test]
    fn basic_test() {
        let x = [0b10000001_u8];
        let mut br = BitReader::new(&x);
        assert_eq!(br.bit(), Some(1));
        assert_eq!(br.bit(), Some(0));
        assert_eq!(br.bit(), Some(0));
        assert_eq!(br.bit(), Some(0));
        assert_eq!(br.bit(), Some(0));
        assert_eq!(br.bit(), Some(0));
        assert_eq!(br.bit(), Some(0));
        assert_eq!(br.bit(), Some(1));
        assert_eq!(br.bit(), None);
    }

    #[test]
    fn bint_test() {
        let x = [0b00011011];
        let mut br = BitReader::new(&x);
        assert_eq!(br.bint(5), Some(3));
        assert_eq!(br.bint(1), Some(0));
        assert_eq!(br.bint(2), Some(3));
        assert_eq!(br.bint(1), None);
    }

    #[test]
    fn bint_across_bytes_test() {
        let x = [0b0000_0111, 0b1111_1111, 0b1100_0000];
        let mut br = BitReader::new(&x);
        assert_eq!(br.bint(5), Some(0));
        assert_eq!(br.bint(13), Some(0x1fff));
        assert_eq!(br.bint(6), Some(0));
        assert_eq!(br.remaining(), 0);
    }

    #[test]
    fn byte_test() {
        let x = "Hello, world!".as_bytes();
        let mut br = BitReader::new(x);
        assert_eq!(br.byte(), Some(b'H'));
        assert_eq!(br.byte(), Some(b'e'));
        assert_eq!(br.byte(), Some(b'l'));
        assert_eq!(br.byte(), Some(b'l'));
    }

    #[test]
    fn limit_test() {
        let x = [0xff, 0xff];
        let mut br = BitReader::new(&x).with_limit(10);
        assert_eq!(br.byte(), Some(0xff));
        assert_eq!(br.bint(3), None);
        assert_eq!(br.bint(2), Some(3));
        assert_eq!(br.bit(), None);
        let br = BitReader::new(&x).with_limit(100);
        assert_eq!(br.remaining(), 16);
    }

    #[test]
    fn seek_and_loc_test() {
        let x = "Hello, world!".as_bytes();
        let mut br = BitReader::new(x);
        br.seek(41);
        assert_eq!(br.loc(), "[5.1]");
        assert_eq!(br.position(), 41);
    }

    #[test]
    fn bool_bit_test() {
        let x = [0b01010000];
        let mut br = BitReader::new(&x);
        assert_eq!(br.bool_bit(), Some(false));
        assert_eq!(br.bool_bit(), Some(true));
        assert_eq!(br.bool_bit(), Some(false));
        assert_eq!(br.bool_bit(), Some(true));
        assert_eq!(br.bool_bit(), Some(false));
        assert_eq!(br.bool_bit(), Some(false));
        assert_eq!(br.bool_bit(), Some(false));
        assert_eq!(br.bool_bit(), Some(false));
    }
}
