use crate::errors::CalcError;

/// Naive doubly-recursive fibonacci. Exponential in `n`, no caching.
pub fn fibonacci(n: u32) -> Result<u64, CalcError> {
    if n <= 1 {
        return Ok(n as u64);
    }

    let a = fibonacci(n - 1)?;
    let b = fibonacci(n - 2)?;
    checked_sum(n, a, b)
}

/// Adds the two predecessor terms of `fibonacci(n)`.
fn checked_sum(n: u32, a: u64, b: u64) -> Result<u64, CalcError> {
    a.checked_add(b).ok_or(CalcError::Overflow { n })
}
