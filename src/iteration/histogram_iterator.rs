use crate::core::ReadableHistogram;
use crate::iteration::*;

pub struct HistogramIterator<'a, T: 'a, S> {
    pub(in crate::iteration) histogram: &'a T,
    pub(in crate::iteration) state: IterationState,
    pub(in crate::iteration) strategy: S,
}

impl<'a, T: ReadableHistogram, S: IterationStrategy<T>> HistogramIterator<'a, T, S> {
    pub fn next_value(&mut self) -> Option<IterationValue> {
        let state = &mut self.state;
        let strategy = &mut self.strategy;
        let histogram = self.histogram;
        if !strategy.has_next(state, histogram) {
            return None;
        }
        while state.current_index < histogram.array_length() {
            state.count_at_this_value = histogram.get_count_at_index(state.current_index);
            if state.fresh_bin {
                state.total_count_to_current_index += state.count_at_this_value;
                state.fresh_bin = false;
            }
            if strategy.reached_iteration_level(state, histogram) {
                let value_iterated_to = strategy.get_value_iterated_to(state, histogram);
                let iteration_value = IterationValue {
                    value_iterated_to,
                    value_iterated_from: state.prev_value_iterated_to,
                    count_at_value_iterated_to: state.count_at_this_value,
                    count_added_in_this_iteration_step: state.total_count_to_current_index
                        - state.total_count_to_prev_index,
                    total_count_to_this_value: state.total_count_to_current_index,
                    percentile: strategy.get_percentile_iterated_to(state),
                };

                state.prev_value_iterated_to = value_iterated_to;
                state.total_count_to_prev_index = state.total_count_to_current_index;
                strategy.increment_iteration_level(state, histogram);

                return Some(iteration_value);
            }
            Self::increment_bin(state);
        }
        None
    }

    fn increment_bin(state: &mut IterationState) {
        state.fresh_bin = true;
        state.current_index += 1;
    }
}
