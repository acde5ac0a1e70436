use crate::error::RecaseError;

/// Add two numbers, rejecting NaN operands.
pub fn add_numbers(a: f64, b: f64) -> Result<f64, RecaseError> {
    if a.is_nan() || b.is_nan() {
        return Err(RecaseError::NotANumber);
    }
    Ok(a + b)
}
