//! Exact statistics over bounded integer observations, and 2-D point sets with tracked
//! extents.
//!
//! - [`st::HistogramBuilder`] accumulates values over a fixed [`Range`] and freezes them
//!   into an immutable [`st::Histogram`] answering mean, variance, median, percentile,
//!   mode and range-count queries.
//! - [`dataset::MutableDataSet`] holds a set of [`dataset::Point`]s and keeps its
//!   bounding box current; [`dataset::ImmutableDataSet`] is a read-only live view over a
//!   shared one.

extern crate num_traits as num;

mod core;
pub use crate::core::{Counter, DataSetError, HistogramError, Range, RangeError, ReadableHistogram};
pub mod st;
pub mod iteration;
pub mod dataset;

#[cfg(test)]
pub mod tests;
