/// Absolute gate threshold, in LUFS-like units. Block loudness values at or
/// below this level are treated as silence and never contribute to a reading.
pub const ABSOLUTE_GATE: f64 = -70.0;

/// Relative gate offset, applied below the energy mean of the blocks that
/// survive the absolute gate.
pub const RELATIVE_GATE: f64 = -10.0;

/// Nominal block length in milliseconds.
pub const BLOCK_MS: u64 = 100;

/// Momentary window capacity, in blocks (4.8 s at 100 ms blocks).
pub const MOMENTARY_BLOCKS: usize = 48;

/// Short-term window capacity, in blocks (3 s at 100 ms blocks).
pub const SHORTTERM_BLOCKS: usize = 30;

/// Minimum integrated history, in blocks, before a loudness range is reported.
pub const RANGE_MIN_BLOCKS: usize = 30;

pub const RANGE_LOWER_BOUND: f64 = 0.10;
pub const RANGE_UPPER_BOUND: f64 = 0.95;

/// Sample rate at which the filter coefficients are given; coefficients for
/// other rates are scaled relative to this.
pub const REFERENCE_SAMPLE_RATE: u32 = 48000;

/// Stand-in peak reading. Oversampled peak detection is not implemented, and
/// this constant is reported in its place; callers must treat it as "no peak
/// data", never as a measured value.
pub const PEAK_PLACEHOLDER: f64 = -6.0;
