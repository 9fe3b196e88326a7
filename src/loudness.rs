use crate::filter;
use crate::util::Util;

/// Reduces one block of samples to a single loudness value.
///
/// The block is frequency weighted, collapsed to the arithmetic mean of its
/// squared samples, and mapped onto the decibel-like loudness scale. A block
/// with no energy (including the empty block) reads as `NEG_INFINITY`, the
/// sentinel for true silence.
///
/// Pure: the result depends only on the block contents and the sample rate.
pub fn block_loudness(block: &[f64], sample_rate: u32) -> f64 {
    let filtered = filter::filter_block(block, sample_rate);
    let mean_sq = mean_square(&filtered);

    if mean_sq <= 0.0 {
        return f64::NEG_INFINITY;
    }

    Util::lufs(mean_sq)
}

fn mean_square(samples: &[f64]) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }

    samples.iter().map(|&s| s * s).sum::<f64>() / samples.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_abs_diff_eq;

    use crate::wave::{WaveGen, WaveKind};

    #[test]
    fn silent_block_is_negative_infinity() {
        let block = vec![0.0f64; 4800];
        assert_eq!(block_loudness(&block, 48000), f64::NEG_INFINITY);

        assert_eq!(block_loudness(&[], 48000), f64::NEG_INFINITY);
    }

    #[test]
    fn sine_loudness_grows_with_amplitude() {
        let amplitudes = [0.01, 0.05, 0.1, 0.5, 1.0];

        let readings: Vec<f64> = amplitudes
            .iter()
            .map(|&a| {
                let block: Vec<f64> = WaveGen::new(WaveKind::Sine, 48000, 1000, a)
                    .take(4800)
                    .collect();
                block_loudness(&block, 48000)
            })
            .collect();

        for pair in readings.windows(2) {
            assert!(pair[0] < pair[1], "{} !< {}", pair[0], pair[1]);
        }
    }

    #[test]
    fn sine_block_reference_reading() {
        let block: Vec<f64> = WaveGen::new(WaveKind::Sine, 48000, 1000, 0.1)
            .take(4800)
            .collect();

        assert_abs_diff_eq!(
            block_loudness(&block, 48000),
            -33.31457170450756,
            epsilon = 1.0e-6
        );

        // The same wave sampled at 44.1 kHz lands elsewhere: the scaled
        // denominator coefficients change the frequency response.
        let block: Vec<f64> = WaveGen::new(WaveKind::Sine, 44100, 1000, 0.1)
            .take(4410)
            .collect();

        assert_abs_diff_eq!(
            block_loudness(&block, 44100),
            -39.97229554902526,
            epsilon = 1.0e-6
        );
    }

    #[test]
    fn block_loudness_is_deterministic() {
        let block: Vec<f64> = WaveGen::new(WaveKind::Sawtooth, 48000, 440, 0.3)
            .take(4800)
            .collect();

        let first = block_loudness(&block, 48000);
        let second = block_loudness(&block, 48000);

        assert_eq!(first.to_bits(), second.to_bits());
    }

    #[test]
    fn mean_square_of_known_samples() {
        assert_abs_diff_eq!(mean_square(&[1.0, -1.0, 1.0, -1.0]), 1.0);
        assert_abs_diff_eq!(mean_square(&[0.5, -0.5]), 0.25);
        assert_abs_diff_eq!(mean_square(&[]), 0.0);
    }
}
