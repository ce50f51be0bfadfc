use crate::core::Range;
use thiserror::Error;

#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum RangeError {
    #[error("range minimum {min} exceeds maximum {max}")]
    Inverted { min: i128, max: i128 },
}

#[derive(Clone, Debug, PartialEq, Error)]
pub enum HistogramError {
    #[error("invalid histogram range: {0}")]
    InvalidRange(#[from] RangeError),
    #[error("range needs {bins} bins, more than a counts array may hold")]
    ExcessiveRange { bins: u64 },
    #[error("value {value} lies outside histogram range {range}")]
    OutOfRange { value: i64, range: Range<i64> },
    #[error("lower bound {lo} exceeds upper bound {hi}")]
    InvalidBounds { lo: i64, hi: i64 },
    #[error("percentile {0} is not within [0, 100]")]
    InvalidPercentile(f64),
    #[error("histogram holds no observations")]
    EmptyHistogram,
    #[error("count at value {value} overflowed its counter")]
    CountOverflow { value: i64 },
}

#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum DataSetError {
    #[error("data set holds no points")]
    EmptyDataSet,
    #[error("required {0} was absent")]
    NullInput(&'static str),
    #[error("buffer holds {actual} slots but data set has {expected} points")]
    SizeMismatch { expected: usize, actual: usize },
    #[error("{0} is not supported on a read-only data set")]
    UnsupportedOperation(&'static str),
    #[error("invalid bounds: {0}")]
    InvalidRange(#[from] RangeError),
}
