/// One step of a histogram iteration.
///
/// `value_iterated_from` is the value reported by the previous step (or the bin just below
/// the range on the first step), so `(value_iterated_from, value_iterated_to]` is the
/// span of values covered by this step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IterationValue {
    pub value_iterated_to: i64,
    pub value_iterated_from: i64,
    pub count_at_value_iterated_to: u64,
    pub count_added_in_this_iteration_step: u64,
    pub total_count_to_this_value: u64,
    pub percentile: f64,
}
