use thiserror::Error;

/// Errors raised by the alignment search and layout operations.
///
/// Every variant is produced up front, before any computation; the search is
/// deterministic so none of them is worth retrying with the same inputs.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum HexFitError {
    /// Non-positive or non-finite apothem, width, stroke width, pixel size,
    /// granularity, drift cap or sample count.
    #[error("Invalid size: {0}")]
    InvalidSize(String),

    /// Width interval with a non-positive lower bound, or an upper bound
    /// below the lower bound (other than the exact-width sentinel `0`).
    #[error("Invalid interval: {0}")]
    InvalidInterval(String),

    /// No candidate survives: every sampled size drifts within one repeat,
    /// quantizes to a zero pixel pitch, or does not fit the layout.
    #[error("Degenerate result: {0}")]
    DegenerateResult(String),
}

pub type Result<T> = std::result::Result<T, HexFitError>;

/// Reject NaN, infinities and values `<= 0` with an `InvalidSize` error.
pub(crate) fn ensure_positive(value: f64, what: &str) -> Result<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(HexFitError::InvalidSize(format!(
            "{} must be a positive finite number, got {}",
            what, value
        )))
    }
}
