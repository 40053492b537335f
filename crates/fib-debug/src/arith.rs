use crate::errors::ArithmeticError;

/// Truncating integer division that reports a zero divisor instead of panicking.
pub fn checked_divide(dividend: i64, divisor: i64) -> Result<i64, ArithmeticError> {
    if divisor == 0 {
        return Err(ArithmeticError::DivisionByZero);
    }
    dividend
        .checked_div(divisor)
        .ok_or(ArithmeticError::Overflow { dividend, divisor })
}
