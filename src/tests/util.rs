use crate::st::{Histogram, HistogramBuilder};

macro_rules! succ {
    ($e:expr) => {
        assert!($e.is_ok());
    }
}

macro_rules! assert_approx_eq {
    ($e:expr, $v:expr, $t:expr) => {
        assert!(($e as f64 - $v as f64).abs() <= $t as f64, "{} !~= {} within {}", $e, $v, $t)
    }
}

pub const SCENARIO_MIN: i64 = -13;
pub const SCENARIO_MAX: i64 = 52;

/// Fifty observations with modes at 6 and 8.
pub fn scenario_values() -> Vec<i64> {
    let mut values = vec![-5, 1, 1, 2, 2, 4, 4, 5, 5, 5, 5];
    values.extend(std::iter::repeat(6).take(8));
    values.extend([7, 7]);
    values.extend(std::iter::repeat(8).take(8));
    values.extend([9, 9, 10, 10, 10, 11, 12, 12, 13, 13, 13, 14, 15, 16, 17, 17, 23, 23, 24, 25, 25]);
    values
}

pub fn scenario_histogram() -> Histogram<u64> {
    let mut builder = HistogramBuilder::<u64>::new(SCENARIO_MIN, SCENARIO_MAX).unwrap();
    builder.add_values(&scenario_values()).unwrap();
    builder.build()
}

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
