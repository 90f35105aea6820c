use crate::{
    error::SemanticError,
    interpreter::evaluator::core::{EvalResult, count_error},
    util::num::{CountError, f64_to_count, format_number},
};

/// Upper bound, in bytes, on a string built by `*`.
pub const MAX_REPEAT_BYTES: usize = 1 << 30;

fn check_divisor(operator: &'static str, left: f64, right: f64) -> EvalResult<()> {
    if right == 0.0 {
        return Err(SemanticError::DivisionByZero { operator,
                                                   left: format_number(left),
                                                   right: format_number(right) });
    }
    Ok(())
}

/// Floored quotient and remainder; the remainder takes the divisor's sign.
fn div_mod(left: f64, right: f64) -> (f64, f64) {
    let mut rem = left % right;
    let mut div = (left - rem) / right;
    if rem == 0.0 {
        rem = 0.0_f64.copysign(right);
    } else if (right < 0.0) != (rem < 0.0) {
        rem += right;
        div -= 1.0;
    }

    let quotient = if div == 0.0 {
        0.0_f64.copysign(left / right)
    } else {
        let floor = div.floor();
        if div - floor > 0.5 { floor + 1.0 } else { floor }
    };

    (quotient, rem)
}

/// `/`: true division.
///
/// # Errors
/// [`SemanticError::DivisionByZero`] if `right` is zero.
pub fn divide(left: f64, right: f64) -> EvalResult<f64> {
    check_divisor("/", left, right)?;
    Ok(left / right)
}

/// `//`: division rounded towards negative infinity.
///
/// # Errors
/// [`SemanticError::DivisionByZero`] if `right` is zero.
///
/// # Example
/// ```
/// use stackto::interpreter::evaluator::binary::arithmetic::floor_divide;
///
/// assert_eq!(floor_divide(7.0, 2.0), Ok(3.0));
/// assert_eq!(floor_divide(-7.0, 2.0), Ok(-4.0));
/// ```
pub fn floor_divide(left: f64, right: f64) -> EvalResult<f64> {
    check_divisor("//", left, right)?;
    Ok(div_mod(left, right).0)
}

/// `%`: floored modulo, the result has the sign of `right`.
///
/// # Errors
/// [`SemanticError::DivisionByZero`] if `right` is zero.
///
/// # Example
/// ```
/// use stackto::interpreter::evaluator::binary::arithmetic::modulo;
///
/// assert_eq!(modulo(7.0, 3.0), Ok(1.0));
/// assert_eq!(modulo(-7.0, 3.0), Ok(2.0));
/// assert_eq!(modulo(7.0, -3.0), Ok(-2.0));
/// ```
pub fn modulo(left: f64, right: f64) -> EvalResult<f64> {
    check_divisor("%", left, right)?;
    Ok(div_mod(left, right).1)
}

/// `*` on a string: repeats `text` `count` times. A negative count yields
/// the empty string.
///
/// # Errors
/// - [`SemanticError::NonIntegerCount`] if `count` is not integer valued.
/// - [`SemanticError::RepeatTooLarge`] if the result would exceed
///   [`MAX_REPEAT_BYTES`].
pub fn repeat(text: &str, count: f64) -> EvalResult<String> {
    let times = match f64_to_count(count) {
        Ok(times) => times,
        Err(CountError::Negative) => return Ok(String::new()),
        Err(e) => return Err(count_error("*", count, e)),
    };

    match text.len().checked_mul(times) {
        Some(total) if total <= MAX_REPEAT_BYTES => Ok(text.repeat(times)),
        _ => Err(SemanticError::RepeatTooLarge { length: text.len(), count: times }),
    }
}
