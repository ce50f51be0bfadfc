use crate::core::{HistogramError, Range, RangeError};
use crate::st::HistogramBuilder;
use crate::tests::util::*;

#[test]
fn new_rejects_inverted_range() {
    assert_eq!(
        Err(HistogramError::InvalidRange(RangeError::Inverted { min: 5, max: 4 })),
        HistogramBuilder::<u64>::new(5, 4).map(|b| b.range())
    );
}

#[test]
fn new_rejects_unindexable_range() {
    let err = HistogramBuilder::<u64>::new(i64::MIN, i64::MAX).unwrap_err();
    assert_eq!(HistogramError::ExcessiveRange { bins: u64::MAX }, err);
}

#[test]
fn new_rejects_oversized_counts_array() {
    // 2^29 + 1 bins of u64 are just over 4 GiB
    let err = HistogramBuilder::<u64>::new(0, 1 << 29).unwrap_err();
    assert_eq!(HistogramError::ExcessiveRange { bins: (1 << 29) + 1 }, err);
}

#[test]
fn single_value_range() {
    init_tracing();
    let mut builder = HistogramBuilder::<u32>::new(7, 7).unwrap();
    succ!(builder.add_value(7));
    succ!(builder.add_value(7));
    let histogram = builder.build();
    assert_eq!(Ok(7), histogram.get_min());
    assert_eq!(Ok(7), histogram.get_max());
    assert_eq!(Ok(2), histogram.get_magnitude_at(7));
    assert_eq!(Ok(7), histogram.get_percentile(100.0));
}

#[test]
fn add_value_out_of_range() {
    let mut builder = HistogramBuilder::<u64>::new(-13, 52).unwrap();
    assert_eq!(
        Err(HistogramError::OutOfRange {
            value: 53,
            range: Range::new(-13, 52).unwrap(),
        }),
        builder.add_value(53)
    );
    assert!(builder.add_value(-14).is_err());
    assert_eq!(0, builder.total_count());
}

#[test]
fn add_values_records_nothing_on_failure() {
    let mut builder = HistogramBuilder::<u64>::new(0, 10).unwrap();
    assert!(builder.add_values(&[1, 2, 11, 3]).is_err());
    assert_eq!(0, builder.total_count());
    assert!(builder.build().is_empty());
}

#[test]
fn add_value_with_count() {
    let mut builder = HistogramBuilder::<u64>::new(0, 10).unwrap();
    succ!(builder.add_value_with_count(4, 5));
    succ!(builder.add_value_with_count(9, 0));
    let histogram = builder.build();
    assert_eq!(5, histogram.get_num_values());
    assert_eq!(Ok(4), histogram.get_max());
    assert_eq!(Ok(0), histogram.get_magnitude_at(9));
}

#[test]
fn counter_overflow_is_reported() {
    let mut builder = HistogramBuilder::<u32>::new(0, 3).unwrap();
    succ!(builder.add_value_with_count(2, u32::MAX));
    assert_eq!(
        Err(HistogramError::CountOverflow { value: 2 }),
        builder.add_value(2)
    );
    assert_eq!(u64::from(u32::MAX), builder.total_count());
}

#[test]
fn total_count_overflow_is_reported() {
    let mut builder = HistogramBuilder::<u64>::new(0, 3).unwrap();
    succ!(builder.add_value_with_count(0, u64::MAX));
    assert_eq!(
        Err(HistogramError::CountOverflow { value: 1 }),
        builder.add_value(1)
    );
    assert_eq!(u64::MAX, builder.total_count());

    let histogram = builder.build();
    assert_eq!(Ok(0), histogram.get_magnitude_at(1));
    assert_eq!(Ok(0), histogram.get_max());
}

#[test]
fn add_histogram_total_overflow_leaves_target_unchanged() {
    let mut source = HistogramBuilder::<u64>::new(0, 3).unwrap();
    succ!(source.add_value_with_count(3, u64::MAX / 2 + 1));
    let source = source.build();

    let mut target = HistogramBuilder::<u64>::new(0, 3).unwrap();
    succ!(target.add_value_with_count(1, u64::MAX / 2 + 1));
    let before = target.build();

    assert_eq!(
        Err(HistogramError::CountOverflow { value: 3 }),
        target.add_histogram(&source)
    );
    assert_eq!(before, target.build());
    assert_eq!(before.get_observed_range(), target.build().get_observed_range());
}

#[test]
fn build_is_a_snapshot() {
    let mut builder = HistogramBuilder::<u64>::new(0, 10).unwrap();
    succ!(builder.add_values(&[1, 2, 3]));
    let first = builder.build();
    succ!(builder.add_values(&[9, 9]));
    let second = builder.build();

    assert_eq!(3, first.get_num_values());
    assert_eq!(Ok(3), first.get_max());
    assert_eq!(Ok(0), first.get_magnitude_at(9));
    assert_eq!(5, second.get_num_values());
    assert_eq!(Ok(9), second.get_max());
}

#[test]
fn reset_keeps_range() {
    let mut builder = HistogramBuilder::<u64>::new(-5, 5).unwrap();
    succ!(builder.add_values(&[-5, 0, 5]));
    let before = builder.build();
    builder.reset();
    assert_eq!(0, builder.total_count());
    assert_eq!(Range::new(-5, 5).unwrap(), builder.range());
    assert!(builder.build().is_empty());
    assert_eq!(3, before.get_num_values());
}

#[test]
fn add_histogram_merges_counts_and_moments() {
    let mut narrow = HistogramBuilder::<u64>::new(0, 10).unwrap();
    succ!(narrow.add_values(&[2, 4, 4, 10]));
    let narrow = narrow.build();

    let mut wide = HistogramBuilder::<u64>::new(-20, 20).unwrap();
    succ!(wide.add_values(&[-20, 4]));
    succ!(wide.add_histogram(&narrow));
    let merged = wide.build();

    let mut expected = HistogramBuilder::<u64>::new(-20, 20).unwrap();
    succ!(expected.add_values(&[-20, 4, 2, 4, 4, 10]));
    let expected = expected.build();

    assert_eq!(expected, merged);
    assert_eq!(Ok(3), merged.get_magnitude_at(4));
    assert_eq!(expected.get_mean(), merged.get_mean());
    assert_eq!(expected.get_variance(), merged.get_variance());
    assert_eq!(Ok(-20), merged.get_min());
    assert_eq!(Ok(10), merged.get_max());
}

#[test]
fn add_histogram_rejects_observations_outside_range() {
    let mut source = HistogramBuilder::<u64>::new(0, 100).unwrap();
    succ!(source.add_values(&[5, 50]));
    let source = source.build();

    let mut target = HistogramBuilder::<u64>::new(0, 10).unwrap();
    assert_eq!(
        Err(HistogramError::OutOfRange {
            value: 50,
            range: Range::new(0, 10).unwrap(),
        }),
        target.add_histogram(&source)
    );
    assert_eq!(0, target.total_count());
}

#[test]
fn add_empty_histogram_is_a_no_op() {
    let empty = HistogramBuilder::<u64>::new(100, 200).unwrap().build();
    let mut target = HistogramBuilder::<u64>::new(0, 10).unwrap();
    succ!(target.add_histogram(&empty));
    assert_eq!(0, target.total_count());
}

#[test]
fn builder_values_can_be_iterated() {
    let mut builder = HistogramBuilder::<u64>::new(0, 10).unwrap();
    succ!(builder.add_values(&[3, 3, 8]));
    let recorded: Vec<(i64, u64)> = builder
        .recorded_values()
        .map(|v| (v.value_iterated_to, v.count_at_value_iterated_to))
        .collect();
    assert_eq!(vec![(3, 2), (8, 1)], recorded);
}
