use crate::core::constants::MAX_COUNTS_BYTES;
use crate::core::*;
use crate::iteration::*;
use crate::st::Histogram;
use std::mem;
use tracing::debug;

/// Running totals over every recorded observation, as offsets from `range.min()`.
#[derive(Clone, Copy, Debug, Default)]
struct Tally {
    total_count: u64,
    sum_of_offsets: u128,
    sum_of_squared_offsets: u128,
}

impl Tally {
    /// The totals after adding `count` observations at `offset`, or `None` on overflow.
    fn with(self, offset: usize, count: u64) -> Option<Tally> {
        let offset = offset as u128;
        let weighted = offset.checked_mul(u128::from(count))?;
        Some(Tally {
            total_count: self.total_count.checked_add(count)?,
            sum_of_offsets: self.sum_of_offsets.checked_add(weighted)?,
            sum_of_squared_offsets: self
                .sum_of_squared_offsets
                .checked_add(weighted.checked_mul(offset)?)?,
        })
    }
}

/// Accumulates integer observations over a fixed range, then freezes them into a
/// [`Histogram`].
///
/// `build` copies the accumulated state, so the builder can keep recording (or be
/// [`reset`](HistogramBuilder::reset)) without affecting histograms it already produced.
#[derive(Clone, Debug)]
pub struct HistogramBuilder<T: Counter = u64> {
    range: Range<i64>,
    counts: Vec<T>,
    tally: Tally,
    observed: Option<Range<i64>>,
}

impl<T: Counter> HistogramBuilder<T> {
    pub fn new(range_min: i64, range_max: i64) -> Result<HistogramBuilder<T>, HistogramError> {
        HistogramBuilder::with_range(Range::new(range_min, range_max)?)
    }

    pub fn with_range(range: Range<i64>) -> Result<HistogramBuilder<T>, HistogramError> {
        let bins = range.width();
        let bytes = bins.checked_mul(mem::size_of::<T>() as u64);
        if bytes.map_or(true, |bytes| bytes > MAX_COUNTS_BYTES) {
            return Err(HistogramError::ExcessiveRange { bins });
        }
        let mut counts = Vec::new();
        counts
            .try_reserve_exact(bins as usize)
            .map_err(|_| HistogramError::ExcessiveRange { bins })?;
        counts.resize(bins as usize, T::zero());
        Ok(HistogramBuilder {
            range,
            counts,
            tally: Tally::default(),
            observed: None,
        })
    }

    pub fn range(&self) -> Range<i64> {
        self.range
    }

    pub fn total_count(&self) -> u64 {
        self.tally.total_count
    }

    #[inline(always)]
    pub fn add_value(&mut self, value: i64) -> Result<(), HistogramError> {
        self.add_value_with_count(value, T::one())
    }

    pub fn add_value_with_count(&mut self, value: i64, count: T) -> Result<(), HistogramError> {
        let idx = self.counts_array_index(value)?;
        if count == T::zero() {
            return Ok(());
        }
        let overflow = || HistogramError::CountOverflow { value };
        let slot = self.counts[idx].checked_add(&count).ok_or_else(overflow)?;
        let tally = self.tally.with(idx, count.as_u64()).ok_or_else(overflow)?;
        self.counts[idx] = slot;
        self.tally = tally;
        self.observe(value);
        Ok(())
    }

    /// Records every value, or none of them if any lies outside the range.
    pub fn add_values(&mut self, values: &[i64]) -> Result<(), HistogramError> {
        if let Some(&value) = values.iter().find(|v| !self.range.contains(**v)) {
            return Err(HistogramError::OutOfRange {
                value,
                range: self.range,
            });
        }
        for &value in values {
            self.add_value(value)?;
        }
        Ok(())
    }

    /// Adds every observation of `other`, which may have a different range as long as its
    /// observed values fit into this one.
    pub fn add_histogram(&mut self, other: &Histogram<T>) -> Result<(), HistogramError> {
        let observed = match other.get_observed_range() {
            Ok(observed) => observed,
            Err(_) => return Ok(()),
        };
        for value in [observed.min(), observed.max()] {
            if !self.range.contains(value) {
                return Err(HistogramError::OutOfRange {
                    value,
                    range: self.range,
                });
            }
        }

        // check every bin before touching any so an overflow leaves us unchanged
        let mut merged = Vec::new();
        let mut tally = self.tally;
        for iteration_value in other.recorded_values() {
            let value = iteration_value.value_iterated_to;
            let overflow = || HistogramError::CountOverflow { value };
            let idx = self.counts_array_index(value)?;
            let added = other.get_magnitude_at(value)?;
            let sum = self.counts[idx].checked_add(&added).ok_or_else(overflow)?;
            tally = tally.with(idx, added.as_u64()).ok_or_else(overflow)?;
            merged.push((idx, sum));
        }
        for (idx, sum) in merged {
            self.counts[idx] = sum;
        }
        self.tally = tally;
        self.observe(observed.min());
        self.observe(observed.max());
        Ok(())
    }

    pub fn reset(&mut self) {
        debug!(range = %self.range, discarded = self.tally.total_count, "resetting histogram builder");
        for count in self.counts.iter_mut() {
            *count = T::zero();
        }
        self.tally = Tally::default();
        self.observed = None;
    }

    /// Freezes a copy of the current state.
    pub fn build(&self) -> Histogram<T> {
        debug!(range = %self.range, total_count = self.tally.total_count, "building histogram");
        Histogram::from_parts(
            self.range,
            self.counts.clone(),
            self.tally.total_count,
            self.tally.sum_of_offsets,
            self.tally.sum_of_squared_offsets,
            self.observed,
        )
    }

    pub fn recorded_values(&self) -> RecordedValuesIterator<'_, Self> {
        RecordedValuesIterator::new(self)
    }

    fn observe(&mut self, value: i64) {
        self.observed = Some(match self.observed {
            Some(current) => current.expand_to(value),
            None => Range::singleton(value),
        });
    }

    #[inline(always)]
    fn counts_array_index(&self, value: i64) -> Result<usize, HistogramError> {
        self.range.offset_of(value).ok_or(HistogramError::OutOfRange {
            value,
            range: self.range,
        })
    }
}

impl<T: Counter> ReadableHistogram for HistogramBuilder<T> {
    fn range(&self) -> Range<i64> {
        self.range
    }
    #[inline(always)]
    fn array_length(&self) -> usize {
        self.counts.len()
    }
    #[inline(always)]
    fn get_total_count(&self) -> u64 {
        self.tally.total_count
    }
    #[inline(always)]
    fn get_count_at_index(&self, idx: usize) -> u64 {
        self.counts[idx].as_u64()
    }
}
