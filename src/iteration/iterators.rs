use crate::core::ReadableHistogram;
use crate::iteration::*;
use crate::iteration::histogram_iterator::HistogramIterator;
use crate::iteration::iteration_strategy::*;

/// Newtype wrappers for HistogramIterator with concrete strategies

pub struct AllValuesIterator<'a, T: 'a>(HistogramIterator<'a, T, AllValuesStrategy>);

impl<'a, T: 'a + ReadableHistogram> AllValuesIterator<'a, T> {
    pub fn new(histogram: &'a T) -> AllValuesIterator<'a, T> {
        let strategy = AllValuesStrategy { visited_index: None };
        let state = IterationState::new(histogram);
        AllValuesIterator(HistogramIterator {
            histogram,
            state,
            strategy,
        })
    }
    pub fn reset(&mut self) {
        self.0.state.reset(self.0.histogram);
        self.0.strategy.visited_index = None;
    }
}

impl<'a, T: 'a + ReadableHistogram> Iterator for AllValuesIterator<'a, T> {
    type Item = IterationValue;
    fn next(&mut self) -> Option<IterationValue> {
        self.0.next_value()
    }
}

pub struct RecordedValuesIterator<'a, T: 'a>(HistogramIterator<'a, T, RecordedValuesStrategy>);

impl<'a, T: 'a + ReadableHistogram> RecordedValuesIterator<'a, T> {
    pub fn new(histogram: &'a T) -> RecordedValuesIterator<'a, T> {
        let strategy = RecordedValuesStrategy { visited_index: None };
        let state = IterationState::new(histogram);
        RecordedValuesIterator(HistogramIterator {
            histogram,
            state,
            strategy,
        })
    }
    pub fn reset(&mut self) {
        self.0.state.reset(self.0.histogram);
        self.0.strategy.visited_index = None;
    }

    pub fn get_mean(iterator: &mut Self) -> f64 {
        iterator.reset();
        RecordedValuesIterator::get_mean_without_reset(iterator)
    }

    pub fn get_mean_without_reset(iterator: &mut Self) -> f64 {
        let total_count = iterator.0.histogram.get_total_count();
        if total_count == 0 {
            return 0.0;
        }
        let mut total_value = 0_i128;
        for value in iterator {
            total_value += value.value_iterated_to as i128 * value.count_at_value_iterated_to as i128;
        }
        total_value as f64 / total_count as f64
    }

    pub fn get_std_deviation(iterator: &mut Self) -> f64 {
        iterator.reset();
        RecordedValuesIterator::get_std_deviation_without_reset(iterator)
    }

    /// Population standard deviation, computed in two passes around the mean.
    pub fn get_std_deviation_without_reset(iterator: &mut Self) -> f64 {
        let total_count = iterator.0.histogram.get_total_count();
        if total_count == 0 {
            return 0.0;
        }
        let mean = RecordedValuesIterator::get_mean_without_reset(iterator);
        iterator.reset();
        let mut geometric_deviation_total = 0.0;
        for value in iterator {
            let deviation = value.value_iterated_to as f64 - mean;
            geometric_deviation_total += (deviation * deviation) * value.count_added_in_this_iteration_step as f64;
        }
        (geometric_deviation_total / total_count as f64).sqrt()
    }
}

impl<'a, T: 'a + ReadableHistogram> Iterator for RecordedValuesIterator<'a, T> {
    type Item = IterationValue;
    fn next(&mut self) -> Option<IterationValue> {
        self.0.next_value()
    }
}

pub struct LinearIterator<'a, T: 'a>(HistogramIterator<'a, T, LinearStrategy>);

impl<'a, T: 'a + ReadableHistogram> LinearIterator<'a, T> {
    /// `value_units_per_bucket` of zero is treated as one.
    pub fn new(histogram: &'a T, value_units_per_bucket: usize) -> LinearIterator<'a, T> {
        let strategy = LinearStrategy {
            value_units_per_bucket: value_units_per_bucket.max(1),
            visited_index: None,
        };
        let state = IterationState::new(histogram);
        LinearIterator(HistogramIterator {
            histogram,
            state,
            strategy,
        })
    }

    pub fn reset(&mut self, value_units_per_bucket: usize) {
        self.0.state.reset(self.0.histogram);
        self.0.strategy.value_units_per_bucket = value_units_per_bucket.max(1);
        self.0.strategy.visited_index = None;
    }
}

impl<'a, T: 'a + ReadableHistogram> Iterator for LinearIterator<'a, T> {
    type Item = IterationValue;
    fn next(&mut self) -> Option<IterationValue> {
        self.0.next_value()
    }
}
