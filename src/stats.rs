use crate::error::{Result, TicketsError};
use std::borrow::Cow;


/// Arithmetic mean of all values.
pub fn mean(values: &[i64]) -> Result<f64> {
    if values.is_empty() {
        return Err(TicketsError::EmptyInput);
    }
    let sum: i128 = values.iter().map(|&v| v as i128).sum();
    Ok(sum as f64 / values.len() as f64)
}

/// `percent`-th percentile, interpolated linearly between the two order
/// statistics around index `len * percent / 100 - 1`.
///
/// The caller's slice is never reordered. Negative `percent` yields the
/// minimum.
pub fn percentile(values: &[i64], percent: f64, already_sorted: bool) -> Result<f64> {
    if percent.is_nan() || percent > 100.0 {
        return Err(TicketsError::InvalidArgument(format!(
            "percent can't be greater than 100 (provided {})",
            percent
        )));
    }
    if values.is_empty() {
        return Err(TicketsError::EmptyInput);
    }

    let sorted: Cow<[i64]> = if already_sorted {
        Cow::Borrowed(values)
    } else {
        let mut owned = values.to_vec();
        owned.sort_unstable();
        Cow::Owned(owned)
    };

    let last = sorted.len() - 1;
    let n = sorted.len() as f64 * percent / 100.0 - 1.0;
    if n < 0.0 {
        return Ok(sorted[0] as f64);
    }
    if n == last as f64 {
        return Ok(sorted[last] as f64);
    }

    let lo = n.floor() as usize;
    let frac = n - lo as f64;
    let below = sorted[lo] as f64;
    let above = sorted[lo + 1] as f64;
    Ok(below + (above - below) * frac)
}
