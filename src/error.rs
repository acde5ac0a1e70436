use thiserror::Error;

/// The single error taxonomy of the crate.
///
/// Every conversion either returns a complete result or fails with one of
/// these kinds; there are no partial results.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecaseError {
    /// No input value was provided. Absent input is an error, never an
    /// implicit empty string.
    #[error("no input value provided")]
    MissingInput,

    /// An arithmetic operand was NaN.
    #[error("operand is not a valid number")]
    NotANumber,
}
