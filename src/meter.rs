use std::fmt;

use tracing::{debug, trace};

use crate::constants::{
    ABSOLUTE_GATE, BLOCK_MS, PEAK_PLACEHOLDER, RANGE_LOWER_BOUND, RANGE_MIN_BLOCKS,
    RANGE_UPPER_BOUND,
};
use crate::error::{Error, Result};
use crate::gating;
use crate::history::History;
use crate::loudness;
use crate::util::Util;

/// One reading of the meter.
///
/// The fields are computed independently over buffers with different
/// horizons, so they are not required to be mutually consistent at a single
/// instant.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Measurement {
    /// Loudness over roughly the last 4.8 seconds, absolute-gated only.
    /// `NEG_INFINITY` when nothing in the window clears the gate.
    pub momentary: f64,

    /// Loudness over the last 3 seconds, absolute-gated only.
    /// `NEG_INFINITY` when nothing in the window clears the gate.
    pub short_term: f64,

    /// Fully gated loudness over everything processed since the last reset.
    /// `NEG_INFINITY` when no block survives the gate.
    pub integrated: f64,

    /// Spread between the 95th and 10th percentile of the gated block
    /// loudness values, in loudness units. `0.0` covers both "under 3 s of
    /// history" and "nothing survived the gate"; it is not a measured zero
    /// dynamic range.
    pub range: f64,

    /// Placeholder: oversampled peak detection is not implemented, and this
    /// field always carries [`PEAK_PLACEHOLDER`]. Do not present it as a
    /// measured peak.
    pub peak: f64,
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn lufs(value: f64) -> String {
            if value.is_finite() {
                format!("{:.1}", value)
            } else {
                "--".to_string()
            }
        }

        write!(
            f,
            "M {} LUFS | S {} LUFS | I {} LUFS | LRA {:.1} LU",
            lufs(self.momentary),
            lufs(self.short_term),
            lufs(self.integrated),
            self.range,
        )
    }
}

/// Block-based loudness calculator for one analysis session.
///
/// Feed it ~100 ms blocks of mono samples in [-1, 1] as they arrive
/// ([`ingest`](Self::ingest)), or hand it a whole finite signal at once
/// ([`process_buffer`](Self::process_buffer)); both paths share the same
/// aggregation. A meter holds no locks and suspends on nothing; callers
/// serialize access to an instance themselves, one meter per session.
///
/// The integrated history grows by one value per block (10 per second of
/// audio) and is never trimmed by default; long-lived live sessions either
/// call [`reset`](Self::reset) periodically or bound memory up front with
/// [`with_integrated_cap`](Self::with_integrated_cap).
#[derive(Debug)]
pub struct LufsMeter {
    sample_rate: u32,
    block_size: usize,
    history: History,
}

impl LufsMeter {
    pub fn new(sample_rate: u32) -> Result<Self> {
        if sample_rate == 0 {
            return Err(Error::InvalidSampleRate(sample_rate));
        }

        let block_size = Util::ms_to_samples(BLOCK_MS, sample_rate) as usize;

        Ok(Self {
            sample_rate,
            block_size,
            history: History::new(),
        })
    }

    /// Bounds the integrated history to the `cap` most recent block loudness
    /// values; the oldest are dropped as new ones arrive. Integrated and
    /// range readings then only see the retained horizon. The default is
    /// unbounded.
    pub fn with_integrated_cap(mut self, cap: usize) -> Self {
        self.history.set_integrated_cap(cap);
        self
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Nominal block length in samples: 100 ms at the configured rate.
    pub fn block_size(&self) -> usize {
        self.block_size
    }

    /// Feeds one block of mono samples.
    ///
    /// The block is reduced to a single loudness value and appended to all
    /// three histories. A block containing a NaN or infinite sample is
    /// rejected whole; the histories are left untouched.
    pub fn ingest(&mut self, block: &[f64]) -> Result<()> {
        if let Some(index) = block.iter().position(|s| !s.is_finite()) {
            return Err(Error::NonFiniteSample { index });
        }

        let value = loudness::block_loudness(block, self.sample_rate);
        trace!(value, samples = block.len(), "ingested block");

        self.history.push(value);

        Ok(())
    }

    /// Produces the current measurement without mutating any state.
    pub fn snapshot(&self) -> Measurement {
        Measurement {
            momentary: Self::windowed(self.history.momentary()),
            short_term: Self::windowed(self.history.shortterm()),
            integrated: self.integrated(),
            range: self.range(),
            peak: PEAK_PLACEHOLDER,
        }
    }

    // Windowed readings gate on the absolute threshold only; the relative
    // pass applies to the integrated horizon alone.
    fn windowed(values: impl Iterator<Item = f64>) -> f64 {
        let loud: Vec<f64> = values.filter(|&v| v > ABSOLUTE_GATE).collect();

        if loud.is_empty() {
            return f64::NEG_INFINITY;
        }

        gating::energy_mean(&loud)
    }

    fn integrated(&self) -> f64 {
        let survivors = gating::gate(self.history.integrated());

        if survivors.is_empty() {
            return f64::NEG_INFINITY;
        }

        gating::energy_mean(&survivors)
    }

    fn range(&self) -> f64 {
        let integrated = self.history.integrated();

        if integrated.len() < RANGE_MIN_BLOCKS {
            return 0.0;
        }

        let mut survivors = gating::gate(integrated);

        if survivors.is_empty() {
            return 0.0;
        }

        survivors.sort_by(f64::total_cmp);

        let n = survivors.len();
        let lower = (n as f64 * RANGE_LOWER_BOUND).floor() as usize;
        let upper = (n as f64 * RANGE_UPPER_BOUND).floor() as usize;

        if upper >= n {
            return 0.0;
        }

        survivors[upper] - survivors[lower]
    }

    /// Clears all history. The sample rate and window configuration stay.
    pub fn reset(&mut self) {
        self.history.clear();
    }

    /// Analyzes one whole finite signal: resets, slices the signal into
    /// nominal blocks (the final block may be short), ingests each in order,
    /// and returns the resulting snapshot. Streaming callers use
    /// [`ingest`](Self::ingest) per block instead.
    pub fn process_buffer(&mut self, signal: &[f64]) -> Result<Measurement> {
        if let Some(index) = signal.iter().position(|s| !s.is_finite()) {
            return Err(Error::NonFiniteSample { index });
        }

        self.reset();

        for block in signal.chunks(self.block_size) {
            self.ingest(block)?;
        }

        debug!(
            samples = signal.len(),
            blocks = self.history.integrated().len(),
            sample_rate = self.sample_rate,
            "analyzed buffer"
        );

        Ok(self.snapshot())
    }
}

/// Measures a single block in isolation: a fresh meter, one ingest, one
/// snapshot. Only the momentary/short-term fields are meaningful for such a
/// short history.
pub fn measure_block(block: &[f64], sample_rate: u32) -> Result<Measurement> {
    let mut meter = LufsMeter::new(sample_rate)?;
    meter.ingest(block)?;

    Ok(meter.snapshot())
}
