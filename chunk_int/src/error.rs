use thiserror::Error;

/// Errors raised by contract violations of [`BigInt`](crate::BigInt) operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BigIntError {
    /// The divisor's magnitude is zero.
    #[error("Divide by 0")]
    DivideByZero,

    /// The operation is not defined for the given operand.
    #[error("Invalid operation {operation}: {reason}")]
    InvalidOperation {
        operation: &'static str,
        reason: &'static str,
    },

    #[error("Zero length BigInt")]
    Empty,

    #[error("Invalid digit '{digit}' for radix {radix}")]
    InvalidDigit { digit: char, radix: u32 },

    /// Only decimal and hexadecimal are supported.
    #[error("Radix {0} is not supported")]
    UnsupportedRadix(u32),
}

pub type BigIntResult<T> = Result<T, BigIntError>;
