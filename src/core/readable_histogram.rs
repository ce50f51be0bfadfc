use crate::core::Range;

pub trait ReadableHistogram {
    // required for iteration
    fn range(&self) -> Range<i64>;
    fn array_length(&self) -> usize;
    fn get_total_count(&self) -> u64;
    fn get_count_at_index(&self, idx: usize) -> u64;
}
