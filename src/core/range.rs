use crate::core::errors::RangeError;
use num::PrimInt;
use std::cmp;
use std::fmt;

/// A closed interval `[min, max]` of integers.
///
/// Ranges are immutable: every operation that would change the extent returns a new
/// range instead. `min <= max` holds for every constructed value.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct Range<T> {
    min: T,
    max: T,
}

impl<T: PrimInt> Range<T> {
    pub fn new(min: T, max: T) -> Result<Range<T>, RangeError> {
        if min > max {
            return Err(RangeError::Inverted {
                min: widen(min),
                max: widen(max),
            });
        }
        Ok(Range { min, max })
    }

    /// The one-value range `[value, value]`.
    pub fn singleton(value: T) -> Range<T> {
        Range { min: value, max: value }
    }

    #[inline(always)]
    pub fn min(&self) -> T {
        self.min
    }

    #[inline(always)]
    pub fn max(&self) -> T {
        self.max
    }

    #[inline(always)]
    pub fn contains(&self, value: T) -> bool {
        self.min <= value && value <= self.max
    }

    pub fn contains_range(&self, other: &Range<T>) -> bool {
        self.min <= other.min && other.max <= self.max
    }

    pub fn intersect(&self, other: &Range<T>) -> Option<Range<T>> {
        let min = cmp::max(self.min, other.min);
        let max = cmp::min(self.max, other.max);
        if min > max {
            None
        } else {
            Some(Range { min, max })
        }
    }

    /// Smallest range covering both `self` and `value`.
    pub fn expand_to(&self, value: T) -> Range<T> {
        Range {
            min: cmp::min(self.min, value),
            max: cmp::max(self.max, value),
        }
    }

    /// Number of integers in the interval, saturating at `u64::MAX`.
    pub fn width(&self) -> u64 {
        let width = widen(self.max) - widen(self.min) + 1;
        u64::try_from(width).unwrap_or(u64::MAX)
    }

    /// Position of `value` relative to `min`; `None` when outside the range.
    pub(crate) fn offset_of(&self, value: T) -> Option<usize> {
        if !self.contains(value) {
            return None;
        }
        usize::try_from(widen(value) - widen(self.min)).ok()
    }
}

impl<T: fmt::Display> fmt::Display for Range<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.min, self.max)
    }
}

// every primitive integer below 128 bits fits
#[inline(always)]
fn widen<T: PrimInt>(value: T) -> i128 {
    value.to_i128().unwrap_or(i128::MAX)
}
