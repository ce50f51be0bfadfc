use crate::core::*;
use crate::iteration::*;
use lazycell::LazyCell;
use std::fmt;

/// Values sharing the highest bin count, and that count.
#[derive(Clone, Debug, PartialEq)]
struct Modes<T> {
    values: Vec<i64>,
    count: T,
}

/// A frozen frequency table over the integers of a fixed [`Range`].
///
/// Counts live in a dense array indexed by `value - range.min()`. A prefix-sum array is
/// computed once when the histogram is built, so range counts are O(1) and percentiles
/// are a binary search. Histograms are produced by
/// [`HistogramBuilder::build`](crate::st::HistogramBuilder::build) and never change
/// afterwards.
pub struct Histogram<T: Counter = u64> {
    range: Range<i64>,
    counts: Vec<T>,
    cumulative: Vec<u64>,
    total_count: u64,
    // moments of (value - range.min), exact and independent of where the range sits
    sum_of_offsets: u128,
    sum_of_squared_offsets: u128,
    observed: Option<Range<i64>>,
    modes: LazyCell<Modes<T>>,
}

// construction
impl<T: Counter> Histogram<T> {
    pub(crate) fn from_parts(
        range: Range<i64>,
        counts: Vec<T>,
        total_count: u64,
        sum_of_offsets: u128,
        sum_of_squared_offsets: u128,
        observed: Option<Range<i64>>,
    ) -> Histogram<T> {
        let cumulative = util::cumulative_counts(counts.iter().map(Counter::as_u64));
        Histogram {
            range,
            counts,
            cumulative,
            total_count,
            sum_of_offsets,
            sum_of_squared_offsets,
            observed,
            modes: LazyCell::new(),
        }
    }
}

// read methods
impl<T: Counter> Histogram<T> {
    /// The range the histogram was built over, not the observed one.
    pub fn get_range(&self) -> Range<i64> {
        self.range
    }

    /// Tightest range holding every observation.
    pub fn get_observed_range(&self) -> Result<Range<i64>, HistogramError> {
        self.observed.ok_or(HistogramError::EmptyHistogram)
    }

    pub fn get_min(&self) -> Result<i64, HistogramError> {
        self.get_observed_range().map(|observed| observed.min())
    }

    pub fn get_max(&self) -> Result<i64, HistogramError> {
        self.get_observed_range().map(|observed| observed.max())
    }

    pub fn get_num_values(&self) -> u64 {
        self.total_count
    }

    pub fn is_empty(&self) -> bool {
        self.total_count == 0
    }

    pub fn get_counts(&self) -> &[T] {
        &self.counts
    }

    /// Number of observations equal to `value`.
    pub fn get_magnitude_at(&self, value: i64) -> Result<T, HistogramError> {
        let idx = self.counts_array_index(value)?;
        Ok(self.counts[idx])
    }

    /// Number of observations `v` with `lo <= v <= hi`.
    ///
    /// The query may extend past either end of the histogram's range; only the overlap
    /// is counted.
    pub fn get_num_values_between(&self, lo: i64, hi: i64) -> Result<u64, HistogramError> {
        let query = Range::new(lo, hi).map_err(|_| HistogramError::InvalidBounds { lo, hi })?;
        Ok(match self.range.intersect(&query) {
            Some(clipped) => self.cumulative_through(clipped.max()) - self.cumulative_below(clipped.min()),
            None => 0,
        })
    }

    pub fn get_mean(&self) -> Result<f64, HistogramError> {
        self.ensure_not_empty()?;
        Ok(self.range.min() as f64 + self.sum_of_offsets as f64 / self.total_count as f64)
    }

    /// Population variance, `E[x^2] - E[x]^2`.
    pub fn get_variance(&self) -> Result<f64, HistogramError> {
        self.ensure_not_empty()?;
        let n = u128::from(self.total_count);
        // n * sum(d^2) - sum(d)^2 is exact in integers while it fits
        let numerator = n.checked_mul(self.sum_of_squared_offsets).and_then(|scaled| {
            self.sum_of_offsets
                .checked_mul(self.sum_of_offsets)
                .and_then(|square| scaled.checked_sub(square))
        });
        let n = self.total_count as f64;
        Ok(match numerator {
            Some(numerator) => numerator as f64 / (n * n),
            None => {
                let mean_offset = self.sum_of_offsets as f64 / n;
                (self.sum_of_squared_offsets as f64 / n - mean_offset * mean_offset).max(0.0)
            }
        })
    }

    pub fn get_std_dev(&self) -> Result<f64, HistogramError> {
        self.get_variance().map(f64::sqrt)
    }

    pub fn get_median(&self) -> Result<i64, HistogramError> {
        self.get_percentile(50.0)
    }

    /// Smallest value whose cumulative count reaches `percentile` percent of all
    /// observations (at least one observation).
    ///
    /// No interpolation between bins takes place; both 0 and, for fewer than a hundred
    /// observations, 1 resolve to the observed minimum.
    pub fn get_percentile(&self, percentile: f64) -> Result<i64, HistogramError> {
        if !(0.0..=100.0).contains(&percentile) {
            return Err(HistogramError::InvalidPercentile(percentile));
        }
        self.ensure_not_empty()?;
        let count_at_percentile = util::count_at_percentile(percentile, self.total_count);
        let idx = self.cumulative.partition_point(|&total| total < count_at_percentile);
        Ok(self.value_from_index(idx))
    }

    /// Percentage of observations at or below `value`.
    pub fn get_percentile_at_or_below_value(&self, value: i64) -> f64 {
        if self.total_count == 0 {
            return 100.0;
        }
        if value < self.range.min() {
            return 0.0;
        }
        let total_to_value = self.cumulative_through(value.min(self.range.max()));
        (100.0 * total_to_value as f64) / self.total_count as f64
    }

    /// Every value sharing the highest count, in ascending order.
    pub fn get_modes(&self) -> Result<&[i64], HistogramError> {
        self.modes().map(|modes| modes.values.as_slice())
    }

    /// The highest count held by any single value.
    pub fn get_number_mode_instances(&self) -> Result<T, HistogramError> {
        self.modes().map(|modes| modes.count)
    }

    pub fn recorded_values(&self) -> RecordedValuesIterator<'_, Self> {
        RecordedValuesIterator::new(self)
    }

    pub fn all_values(&self) -> AllValuesIterator<'_, Self> {
        AllValuesIterator::new(self)
    }

    pub fn linear_bucket_values(&self, value_units_per_bucket: usize) -> LinearIterator<'_, Self> {
        LinearIterator::new(self, value_units_per_bucket)
    }

    #[inline(always)]
    fn counts_array_index(&self, value: i64) -> Result<usize, HistogramError> {
        self.range.offset_of(value).ok_or(HistogramError::OutOfRange {
            value,
            range: self.range,
        })
    }

    #[inline(always)]
    fn value_from_index(&self, idx: usize) -> i64 {
        self.range.min() + idx as i64
    }

    // observations <= value, for value inside the range
    fn cumulative_through(&self, value: i64) -> u64 {
        self.range.offset_of(value).map_or(0, |idx| self.cumulative[idx])
    }

    // observations < value, for value inside the range
    fn cumulative_below(&self, value: i64) -> u64 {
        match self.range.offset_of(value) {
            Some(0) | None => 0,
            Some(idx) => self.cumulative[idx - 1],
        }
    }

    fn ensure_not_empty(&self) -> Result<(), HistogramError> {
        if self.total_count == 0 {
            return Err(HistogramError::EmptyHistogram);
        }
        Ok(())
    }

    fn modes(&self) -> Result<&Modes<T>, HistogramError> {
        self.ensure_not_empty()?;
        Ok(self.modes.borrow_with(|| {
            let count = self.counts.iter().copied().max().unwrap_or_else(T::zero);
            let values = self
                .counts
                .iter()
                .enumerate()
                .filter(|(_, c)| **c == count)
                .map(|(idx, _)| self.value_from_index(idx))
                .collect();
            Modes { values, count }
        }))
    }
}

impl<T: Counter> ReadableHistogram for Histogram<T> {
    fn range(&self) -> Range<i64> {
        self.range
    }
    #[inline(always)]
    fn array_length(&self) -> usize {
        self.counts.len()
    }
    #[inline(always)]
    fn get_total_count(&self) -> u64 {
        self.total_count
    }
    #[inline(always)]
    fn get_count_at_index(&self, idx: usize) -> u64 {
        self.counts[idx].as_u64()
    }
}

impl<T: Counter> Clone for Histogram<T> {
    fn clone(&self) -> Self {
        Histogram::from_parts(
            self.range,
            self.counts.clone(),
            self.total_count,
            self.sum_of_offsets,
            self.sum_of_squared_offsets,
            self.observed,
        )
    }
}

impl<T: Counter> PartialEq for Histogram<T> {
    fn eq(&self, other: &Self) -> bool {
        if std::ptr::eq(self, other) {
            return true;
        }
        self.range == other.range && self.total_count == other.total_count && self.counts == other.counts
    }
}

impl<T: Counter> fmt::Debug for Histogram<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Histogram")
            .field("range", &self.range)
            .field("total_count", &self.total_count)
            .field("observed", &self.observed)
            .finish()
    }
}
