use thiserror::Error;

/// Errors returned when a sort is rejected. All validation happens before any element is moved,
/// so a failed sort leaves its input untouched.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SortError {
    /// A negative value was found in the input.
    #[error("invalid input: negative value at index {index}")]
    InvalidInput {
        /// Position of the first negative value.
        index: usize,
    },

    /// A digit count below zero was supplied.
    #[error("invalid digit count: {0} (must not be negative)")]
    InvalidDigitCount(i64),

    /// Strict mode only: the digit count does not cover the widest value.
    #[error("digit count {provided} is too small, the widest value needs {required} digits")]
    InsufficientDigitCount {
        /// Digits needed by the widest input value.
        required: usize,
        /// Digits requested by the caller.
        provided: usize,
    },
}
