//! Numeric conversion helpers centralizing safe numeric casts.

use num_traits::cast::cast;

/// Convert a count to f64 while allowing precision loss in a single location.
#[must_use]
pub fn count_to_f64(value: usize) -> f64 {
    cast::<usize, f64>(value).unwrap_or(0.0)
}

/// Round a f64 to one decimal place, returning 0.0 for non-finite values.
#[must_use]
pub fn round_to_tenth(value: f64) -> f64 {
    if !value.is_finite() {
        return 0.0;
    }
    (value * 10.0).round() / 10.0
}

/// Mean of `total` over `count` rounded to one decimal, 0.0 for an empty population.
#[must_use]
pub fn rounded_mean(total: u64, count: usize) -> f64 {
    if count == 0 {
        return 0.0;
    }
    let total = cast::<u64, f64>(total).unwrap_or(0.0);
    round_to_tenth(total / count_to_f64(count))
}
