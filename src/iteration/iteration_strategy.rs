use crate::core::ReadableHistogram;
use crate::iteration::*;

pub trait IterationStrategy<T: ReadableHistogram>: Sized {
    fn reached_iteration_level(&mut self, state: &IterationState, histogram: &T) -> bool;

    fn increment_iteration_level(&mut self, state: &IterationState, histogram: &T);

    fn has_next(&mut self, state: &IterationState, _histogram: &T) -> bool {
        default_has_next(state)
    }

    fn get_value_iterated_to(&mut self, state: &IterationState, histogram: &T) -> i64 {
        state.value_at_current_index(histogram)
    }

    fn get_percentile_iterated_to(&mut self, state: &IterationState) -> f64 {
        if state.array_total_count == 0 {
            return 100.0;
        }
        100.0 * (state.total_count_to_current_index as f64 / state.array_total_count as f64)
    }
}

fn default_has_next(state: &IterationState) -> bool {
    state.total_count_to_current_index < state.array_total_count
}

fn has_unvisited_index<T: ReadableHistogram>(visited_index: Option<usize>, histogram: &T) -> bool {
    visited_index.map_or(true, |visited| visited + 1 < histogram.array_length())
}

pub struct AllValuesStrategy {
    pub(in crate::iteration) visited_index: Option<usize>,
}

impl<T: ReadableHistogram> IterationStrategy<T> for AllValuesStrategy {
    fn reached_iteration_level(&mut self, state: &IterationState, _: &T) -> bool {
        self.visited_index != Some(state.current_index)
    }
    fn increment_iteration_level(&mut self, state: &IterationState, _: &T) {
        self.visited_index = Some(state.current_index)
    }
    fn has_next(&mut self, _: &IterationState, histogram: &T) -> bool {
        has_unvisited_index(self.visited_index, histogram)
    }
}

pub struct RecordedValuesStrategy {
    pub(in crate::iteration) visited_index: Option<usize>,
}

impl<T: ReadableHistogram> IterationStrategy<T> for RecordedValuesStrategy {
    fn reached_iteration_level(&mut self, state: &IterationState, _: &T) -> bool {
        state.count_at_this_value != 0 && self.visited_index != Some(state.current_index)
    }

    fn increment_iteration_level(&mut self, state: &IterationState, _: &T) {
        self.visited_index = Some(state.current_index);
    }
}

/// Groups consecutive bins into buckets of `value_units_per_bucket` values, reporting each
/// bucket at its highest value. The last bucket may be narrower.
pub struct LinearStrategy {
    pub(in crate::iteration) value_units_per_bucket: usize,
    pub(in crate::iteration) visited_index: Option<usize>,
}

impl<T: ReadableHistogram> IterationStrategy<T> for LinearStrategy {
    fn reached_iteration_level(&mut self, state: &IterationState, histogram: &T) -> bool {
        let closes_bucket = (state.current_index + 1) % self.value_units_per_bucket == 0
            || state.current_index + 1 == histogram.array_length();
        closes_bucket && self.visited_index != Some(state.current_index)
    }

    fn increment_iteration_level(&mut self, state: &IterationState, _: &T) {
        self.visited_index = Some(state.current_index);
    }

    fn has_next(&mut self, _: &IterationState, histogram: &T) -> bool {
        has_unvisited_index(self.visited_index, histogram)
    }
}
