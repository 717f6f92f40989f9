use proptest::collection::vec;
use proptest::prelude::Strategy;

/// Flight-like durations in minutes, including the odd negative one.
pub fn arb_durations() -> impl Strategy<Value = Vec<i64>> {
    vec(-600i64..3000, 1..60)
}

pub fn sorted(values: &[i64]) -> Vec<i64> {
    let mut values = values.to_vec();
    values.sort();
    values
}
