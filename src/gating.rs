use tracing::trace;

use crate::constants::{ABSOLUTE_GATE, RELATIVE_GATE};
use crate::util::Util;

/// Energy-domain mean of a set of loudness values: the values are mapped back
/// to linear energy, averaged, and mapped to a loudness again. The input must
/// be non-empty; callers turn the empty case into a sentinel first.
pub fn energy_mean(values: &[f64]) -> f64 {
    let mean = values.iter().map(|&v| Util::energy(v)).sum::<f64>() / values.len() as f64;

    10.0 * mean.log10()
}

/// Two-pass absolute/relative gate over a set of block loudness values.
///
/// The first pass keeps only values strictly above the absolute gate. The
/// second pass computes the energy mean of those survivors and keeps the ones
/// strictly above `mean - 10`. Returns the surviving values in input order;
/// empty when everything sits at or below the absolute gate.
pub fn gate(values: &[f64]) -> Vec<f64> {
    let absolutely_loud: Vec<f64> = values
        .iter()
        .copied()
        .filter(|&v| v > ABSOLUTE_GATE)
        .collect();

    if absolutely_loud.is_empty() {
        return absolutely_loud;
    }

    let mean_loudness = energy_mean(&absolutely_loud);
    let relative_threshold = mean_loudness + RELATIVE_GATE;

    let survivors: Vec<f64> = absolutely_loud
        .into_iter()
        .filter(|&v| v > relative_threshold)
        .collect();

    trace!(
        blocks = values.len(),
        survivors = survivors.len(),
        mean_loudness,
        relative_threshold,
        "gated block loudness values"
    );

    survivors
}
