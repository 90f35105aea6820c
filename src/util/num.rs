/// Why an `f64` could not be used as a count or index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountError {
    /// The value has a fractional part or is not finite.
    Fractional,
    /// The value is below zero.
    Negative,
}

/// Converts an `f64` into a `usize` count if it is a non-negative integer.
///
/// Values larger than `usize::MAX` saturate; callers compare the result
/// against a length anyway, so a saturated count is always out of range.
///
/// # Example
/// ```
/// use stackto::util::num::{CountError, f64_to_count};
///
/// assert_eq!(f64_to_count(3.0), Ok(3));
/// assert_eq!(f64_to_count(-0.0), Ok(0));
/// assert_eq!(f64_to_count(1.5), Err(CountError::Fractional));
/// assert_eq!(f64_to_count(-2.0), Err(CountError::Negative));
/// ```
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn f64_to_count(value: f64) -> Result<usize, CountError> {
    if !value.is_finite() || value.fract() != 0.0 {
        return Err(CountError::Fractional);
    }
    if value < 0.0 {
        return Err(CountError::Negative);
    }
    Ok(value as usize)
}

/// Converts a length into the `f64` pushed by `#`.
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub const fn usize_to_f64(value: usize) -> f64 {
    value as f64
}

/// Renders a number the way program output shows it.
///
/// Integral values keep a trailing `.0`, non-integral values use the shortest
/// representation that round-trips, and very large or very small magnitudes
/// switch to exponent notation with a signed two-digit exponent.
///
/// # Example
/// ```
/// use stackto::util::num::format_number;
///
/// assert_eq!(format_number(5.0), "5.0");
/// assert_eq!(format_number(0.1), "0.1");
/// assert_eq!(format_number(1e16), "1e+16");
/// assert_eq!(format_number(f64::NAN), "nan");
/// ```
#[must_use]
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return String::from(if value > 0.0 { "inf" } else { "-inf" });
    }

    let magnitude = value.abs();
    if magnitude >= 1e16 || (magnitude != 0.0 && magnitude < 1e-4) {
        return format_exponent(value);
    }
    if value.fract() == 0.0 {
        return format!("{value:.1}");
    }
    format!("{value}")
}

fn format_exponent(value: f64) -> String {
    let formatted = format!("{value:e}");
    match formatted.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{mantissa}e{sign}{digits:0>2}")
        },
        None => formatted,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integral_numbers_keep_a_decimal_point() {
        assert_eq!(format_number(3.0), "3.0");
        assert_eq!(format_number(-3.0), "-3.0");
        assert_eq!(format_number(-0.0), "-0.0");
        assert_eq!(format_number(123_456.0), "123456.0");
    }

    #[test]
    fn fractions_use_shortest_form() {
        assert_eq!(format_number(2.5), "2.5");
        assert_eq!(format_number(0.1 + 0.2), "0.30000000000000004");
    }

    #[test]
    fn extreme_magnitudes_use_exponents() {
        assert_eq!(format_number(1.5e-5), "1.5e-05");
        assert_eq!(format_number(2e20), "2e+20");
        assert_eq!(format_number(f64::NEG_INFINITY), "-inf");
    }

    #[test]
    fn counts_reject_fractions_and_negatives() {
        assert_eq!(f64_to_count(0.0), Ok(0));
        assert_eq!(f64_to_count(f64::INFINITY), Err(CountError::Fractional));
        assert_eq!(f64_to_count(-1.0), Err(CountError::Negative));
    }
}
