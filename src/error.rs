use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Genuine fault conditions. "No usable data" outcomes (silence, not enough
/// history) are not errors; they are reported as sentinel values in the
/// measurement itself.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// A meter cannot be constructed without a positive sample rate.
    #[error("invalid sample rate: {0} Hz")]
    InvalidSampleRate(u32),

    /// A NaN or infinite input sample would silently corrupt the mean square
    /// and every reading derived from it, so the block is rejected outright.
    #[error("non-finite sample at index {index}")]
    NonFiniteSample { index: usize },
}
