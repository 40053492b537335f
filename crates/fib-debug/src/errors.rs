use thiserror::Error;

/// Errors raised while computing a fibonacci number.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalcError {
    #[error("fibonacci({n}) overflows a 64-bit integer")]
    Overflow { n: u32 },
}

/// Errors raised by integer division.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ArithmeticError {
    #[error("division by zero")]
    DivisionByZero,

    #[error("integer overflow in division: {dividend} / {divisor}")]
    Overflow { dividend: i64, divisor: i64 },
}
