use crate::core::constants::F64_SIGN_MASK;
use std::cmp;

// this will work for two's complement floats if ints have the same endianness on the platform as floats
pub fn next_below(value: f64) -> f64 {
    if value.is_nan() {
        return value;
    } else {
        let mut transient = value.to_bits();

        if value > 0.0 {
            transient -= 1;
        } else if value < 0.0 {
            transient += 1;
        } else {
            transient = F64_SIGN_MASK | 1;
        }

        f64::from_bits(transient)
    }
}

/// Number of observations that must lie at or below the value reported for `percentile`.
///
/// The percentile is nudged one ulp down first so that products which are exact in
/// decimal (10% of 30) are not pushed over the next integer by float error. The result
/// never exceeds `total_count`, and 100 always asks for every observation, even past
/// 2^53 where the float product is no longer exact.
pub fn count_at_percentile(percentile: f64, total_count: u64) -> u64 {
    if percentile >= 100.0 {
        return total_count;
    }
    let one_below = next_below(percentile);
    let requested_percentile = one_below.max(0.0).min(100.0);

    let fractional_count = (requested_percentile / 100.0) * total_count as f64;
    let count_at_percentile = fractional_count.ceil() as u64;

    // Make sure we at least reach the first recorded entry
    cmp::max(cmp::min(count_at_percentile, total_count), 1)
}

/// Running prefix sums of `counts`, widened to u64.
///
/// Builders keep their total count within u64, so the sums only saturate for counts that
/// did not come from one.
pub fn cumulative_counts<I: IntoIterator<Item = u64>>(counts: I) -> Vec<u64> {
    counts
        .into_iter()
        .scan(0_u64, |total, count| {
            *total = total.saturating_add(count);
            Some(*total)
        })
        .collect()
}
