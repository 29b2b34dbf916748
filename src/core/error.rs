use thiserror::Error;

/// Failures a rate resolution or conversion can report.
///
/// The kinds stay distinguishable so a caller can react to each one:
/// re-prompt for the amount, fall back to a manual rate, or report the
/// quote service outage.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RateError {
    /// The input amount failed local validation. No request was made.
    #[error("amount must be a positive finite number, got {0}")]
    InvalidAmount(f64),

    /// The quote service could not be reached, answered with a non-success
    /// status, or returned a payload that does not parse.
    #[error("quote lookup failed for '{market}': {reason}")]
    Transport { market: String, reason: String },

    /// The service answered, but neither side of the quote carries a
    /// positive rate.
    #[error("quote for '{market}' has no usable rate")]
    InvalidQuote { market: String },
}
