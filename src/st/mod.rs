pub mod histogram;
pub mod builder;

pub use self::builder::HistogramBuilder;
pub use self::histogram::Histogram;
