use crate::core::ReadableHistogram;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IterationState {
    pub array_total_count: u64,
    pub count_at_this_value: u64,
    pub current_index: usize,
    pub fresh_bin: bool,
    pub prev_value_iterated_to: i64,
    pub total_count_to_prev_index: u64,
    pub total_count_to_current_index: u64,
}

impl IterationState {
    pub fn new<T: ReadableHistogram>(histogram: &T) -> IterationState {
        IterationState {
            array_total_count: histogram.get_total_count(),
            count_at_this_value: 0,
            current_index: 0,
            fresh_bin: true,
            prev_value_iterated_to: histogram.range().min().saturating_sub(1),
            total_count_to_prev_index: 0,
            total_count_to_current_index: 0,
        }
    }

    pub fn reset<T: ReadableHistogram>(&mut self, histogram: &T) {
        *self = IterationState::new(histogram);
    }

    pub fn value_at_current_index<T: ReadableHistogram>(&self, histogram: &T) -> i64 {
        histogram.range().min() + self.current_index as i64
    }
}
