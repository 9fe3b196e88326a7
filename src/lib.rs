//! Streaming loudness measurement in LUFS-like units.
//!
//! Blocks of mono PCM samples go in; momentary, short-term, integrated, and
//! range loudness readings come out. Each ~100 ms block is frequency weighted
//! and reduced to a single loudness value, the values accumulate in three
//! sliding windows, and a two-pass absolute/relative gate discards silent and
//! outlier blocks before averaging.
//!
//! ```
//! use lufs_meter::LufsMeter;
//!
//! # fn main() -> lufs_meter::Result<()> {
//! let mut meter = LufsMeter::new(48000)?;
//!
//! // Live use: ingest blocks as they arrive, snapshot whenever a reading
//! // is wanted. (A silent block never clears the gate.)
//! let block = vec![0.0f64; meter.block_size()];
//! meter.ingest(&block)?;
//! assert_eq!(meter.snapshot().integrated, f64::NEG_INFINITY);
//!
//! // Whole-file use: one call over the full decoded signal.
//! let signal = vec![0.0f64; 48000];
//! let measurement = meter.process_buffer(&signal)?;
//! assert_eq!(measurement.range, 0.0);
//! # Ok(())
//! # }
//! ```
//!
//! The frequency weighting is a single-stage approximation, one channel is
//! read, and the peak field is a placeholder: this is a practical meter for
//! matching platform loudness targets, not a compliant reference meter.

pub mod constants;
pub mod error;
pub mod filter;
pub mod gating;
mod history;
pub mod loudness;
pub mod meter;
pub mod target;
pub mod util;

#[cfg(test)]
mod wave;

pub use error::{Error, Result};
pub use meter::{measure_block, LufsMeter, Measurement};
pub use target::{Deviation, Severity, Target};

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::wave::{WaveGen, WaveKind};
    use super::LufsMeter;

    #[test]
    fn nominal_sine_reading() {
        // A 1 kHz sine at amplitude 0.1 has a mean square of 0.005, which on
        // its own reads as -23.70. The weighting filter takes roughly another
        // 9.6 dB off at 1 kHz, landing the meter at -33.31.
        let sample_rate: u32 = 48000;
        let signal: Vec<f64> = WaveGen::new(WaveKind::Sine, sample_rate as usize, 1000, 0.1)
            .take(sample_rate as usize * 5)
            .collect();

        let mut meter = LufsMeter::new(sample_rate).unwrap();
        let measurement = meter.process_buffer(&signal).unwrap();

        assert_abs_diff_eq!(measurement.integrated, -33.314571704507586, epsilon = 1.0e-6);
    }
}
