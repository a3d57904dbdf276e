use rayon::prelude::*;

/// Marks a byte value that never occurs in first_seen() output.
pub const NOT_SEEN: usize = usize::MAX;

/// Returns a frequency count of the input data. Uses parallelism when data set is over 64k.
pub fn freqs(data: &[u8]) -> Vec<usize> {
    if data.len() > 64_000 {
        // 16k is pretty much the sweet spot for chunk size.
        data.par_chunks(16_000)
            .fold(
                || vec![0_usize; 256],
                |mut freqs, chunk| {
                    chunk.iter().for_each(|&el| freqs[el as usize] += 1);
                    freqs
                },
            )
            .reduce(
                || vec![0_usize; 256],
                |s, f| s.iter().zip(&f).map(|(a, b)| a + b).collect::<Vec<usize>>(),
            )
    } else {
        let mut freqs = vec![0_usize; 256];
        data.iter().for_each(|&el| freqs[el as usize] += 1);
        freqs
    }
}

/// Returns the index of the first occurrence of each byte value, or NOT_SEEN. Stops
/// scanning as soon as every value counted in `freqs` has been found.
pub fn first_seen(data: &[u8], freqs: &[usize]) -> Vec<usize> {
    let mut first = vec![NOT_SEEN; 256];
    let mut missing = freqs.iter().filter(|&&f| f > 0).count();
    for (idx, &el) in data.iter().enumerate() {
        if missing == 0 {
            break;
        }
        if first[el as usize] == NOT_SEEN {
            first[el as usize] = idx;
            missing -= 1;
        }
    }
    first
}

/// Returns the distinct byte values of `data`, most frequent first. Equal counts keep the
/// order in which the values first appear.
pub fn rank_by_frequency(data: &[u8]) -> Vec<u8> {
    let freqs = freqs(data);
    let first = first_seen(data, &freqs);
    let mut ranked: Vec<u8> = (0..=255_u8).filter(|&b| freqs[b as usize] > 0).collect();
    ranked.sort_unstable_by(|&a, &b| {
        freqs[b as usize]
            .cmp(&freqs[a as usize])
            .then(first[a as usize].cmp(&first[b as usize]))
    });
    ranked
}

#[cfg(test)]
mod test {
    use super::{first_seen, freqs, rank_by_frequency, NOT_SEEN};

    #[test]
    fn freqs_test() {
        let f = freqs(b"abracadabra");
        assert_eq!(f[b'a' as usize], 5);
        assert_eq!(f[b'b' as usize], 2);
        assert_eq!(f[b'r' as usize], 2);
        assert_eq!(f[b'c' as usize], 1);
        assert_eq!(f.iter().sum::<usize>(), 11);
    }

    #[test]
    fn parallel_freqs_test() {
        let data: Vec<u8> = (0..200_000_u32).map(|i| (i % 7) as u8).collect();
        let f = freqs(&data);
        assert_eq!(f.iter().sum::<usize>(), 200_000);
        assert_eq!(f[0], 28_572);
        assert_eq!(f[6], 28_571);
        assert_eq!(f[7], 0);
    }

    #[test]
    fn first_seen_test() {
        let data = b"hello";
        let first = first_seen(data, &freqs(data));
        assert_eq!(first[b'h' as usize], 0);
        assert_eq!(first[b'l' as usize], 2);
        assert_eq!(first[b'o' as usize], 4);
        assert_eq!(first[b'z' as usize], NOT_SEEN);
    }

    #[test]
    fn rank_test() {
        assert_eq!(rank_by_frequency(b"abracadabra"), b"abrcd".to_vec());
        // Ties keep first-appearance order, not byte order
        assert_eq!(rank_by_frequency(b"zyxxyz"), b"zyx".to_vec());
        assert_eq!(rank_by_frequency(&[0x41, 0x41, 0x42]), vec![0x41, 0x42]);
        assert!(rank_by_frequency(&[]).is_empty());
    }
}
