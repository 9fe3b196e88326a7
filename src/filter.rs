use crate::constants::REFERENCE_SAMPLE_RATE;

/// Coefficients for a biquad digital filter at a particular sample rate.
/// It is assumed that the `a0` coefficient is always normalized to 1.0, and
/// thus not included here.
#[derive(Copy, Clone, Debug, PartialEq)]
struct Params {
    a1: f64,
    a2: f64,
    b0: f64,
    b1: f64,
    b2: f64,
}

// High-pass coefficients given at the reference rate of 48000 Hz. The
// denominator coefficients are scaled linearly by the sample rate ratio;
// there is no analog requantization. The numeric outputs of the whole meter
// depend on this exact scaling, so it must not be replaced with a proper
// filter redesign.
const REFERENCE_A1: f64 = -1.69065929318241;
const REFERENCE_A2: f64 = 0.73248077421585;
const REFERENCE_B0: f64 = 0.85319059207939;
const REFERENCE_B1: f64 = -1.70638118415879;
const REFERENCE_B2: f64 = 0.85319059207939;

impl Params {
    fn new(sample_rate: u32) -> Self {
        let ratio = sample_rate as f64 / REFERENCE_SAMPLE_RATE as f64;

        Self {
            a1: REFERENCE_A1 * ratio,
            a2: REFERENCE_A2 * ratio,
            b0: REFERENCE_B0,
            b1: REFERENCE_B1,
            b2: REFERENCE_B2,
        }
    }
}

/// Applies the frequency weighting filter to one block of samples, producing
/// a filtered block of identical length.
///
/// Filter memory starts at zero on every call and is dropped at the end:
/// each block is weighted independently, with no continuity from the block
/// before it. Filter state must never be threaded across blocks.
pub fn filter_block(block: &[f64], sample_rate: u32) -> Vec<f64> {
    let ps = Params::new(sample_rate);

    let (mut x1, mut x2) = (0.0f64, 0.0f64);
    let (mut y1, mut y2) = (0.0f64, 0.0f64);

    let mut filtered = Vec::with_capacity(block.len());

    for &x in block {
        // Direct-form difference equation.
        let y = ps.b0 * x + ps.b1 * x1 + ps.b2 * x2 - ps.a1 * y1 - ps.a2 * y2;

        x2 = x1;
        x1 = x;
        y2 = y1;
        y1 = y;

        filtered.push(y);
    }

    filtered
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_abs_diff_eq;

    #[test]
    fn params_at_reference_rate() {
        let ps = Params::new(48000);

        assert_abs_diff_eq!(ps.a1, -1.69065929318241);
        assert_abs_diff_eq!(ps.a2, 0.73248077421585);
        assert_abs_diff_eq!(ps.b0, 0.85319059207939);
        assert_abs_diff_eq!(ps.b1, -1.70638118415879);
        assert_abs_diff_eq!(ps.b2, 0.85319059207939);
    }

    #[test]
    fn params_scale_with_sample_rate() {
        let ps = Params::new(44100);

        // Only the denominator scales; the numerator is rate-independent.
        assert_abs_diff_eq!(ps.a1, -1.5532932256113392, epsilon = 1.0e-12);
        assert_abs_diff_eq!(ps.a2, 0.6729667113108122, epsilon = 1.0e-12);
        assert_abs_diff_eq!(ps.b0, 0.85319059207939);
        assert_abs_diff_eq!(ps.b1, -1.70638118415879);
        assert_abs_diff_eq!(ps.b2, 0.85319059207939);
    }

    #[test]
    fn filtered_block_has_input_length() {
        let block = vec![0.25f64; 480];
        assert_eq!(filter_block(&block, 48000).len(), 480);

        assert!(filter_block(&[], 48000).is_empty());
    }

    #[test]
    fn silence_stays_silent() {
        let block = vec![0.0f64; 4800];

        for y in filter_block(&block, 48000) {
            assert_abs_diff_eq!(y, 0.0);
        }
    }

    #[test]
    fn blocks_are_filtered_independently() {
        let block: Vec<f64> = (0..4800)
            .map(|i| (i as f64 * 0.013).sin() * 0.5)
            .collect();

        // Same block in, same block out; no state survives a call.
        let first = filter_block(&block, 48000);
        let second = filter_block(&block, 48000);
        assert_eq!(first, second);

        // The front of a longer run matches a standalone run of the same
        // samples, since both start from zeroed memory.
        let doubled: Vec<f64> = block.iter().chain(block.iter()).copied().collect();
        let front = &filter_block(&doubled, 48000)[..block.len()];
        assert_eq!(front, first.as_slice());
    }
}
