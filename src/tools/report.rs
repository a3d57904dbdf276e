use std::{fmt::Display, fmt::Formatter, time::Duration};

/// Statistics for one compress or decompress call. Every ratio is derived from the two
/// buffer sizes alone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Report {
    /// Wall time spent inside the call.
    pub elapsed: Duration,
    /// Size of the buffer handed in.
    pub init_size: usize,
    /// Size of the buffer handed back.
    pub result_size: usize,
}

impl Report {
    pub fn new(elapsed: Duration, init_size: usize, result_size: usize) -> Self {
        Self {
            elapsed,
            init_size,
            result_size,
        }
    }

    /// Result size as a percentage of the initial size (RC).
    pub fn retained_ratio(&self) -> f64 {
        self.result_size as f64 / self.init_size as f64 * 100.0
    }

    /// Initial size over result size (CR).
    pub fn compression_ratio(&self) -> f64 {
        self.init_size as f64 / self.result_size as f64
    }

    /// Percentage of the initial size saved (SS).
    pub fn space_savings(&self) -> f64 {
        (1.0 - self.result_size as f64 / self.init_size as f64) * 100.0
    }

    /// Result bits per initial byte (BR).
    pub fn bit_rate(&self) -> f64 {
        self.result_size as f64 * 8.0 / self.init_size as f64
    }
}

impl Display for Report {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Running time: {:.3}s", self.elapsed.as_secs_f64())?;
        writeln!(f, "Size: {} -> {} bytes", self.init_size, self.result_size)?;
        writeln!(f, "RC: {:.2}%", self.retained_ratio())?;
        writeln!(f, "CR: {:.4}", self.compression_ratio())?;
        writeln!(f, "SS: {:.4}%", self.space_savings())?;
        write!(f, "BR: {:.4} bits", self.bit_rate())
    }
}
