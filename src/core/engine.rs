//! Rate resolution and conversion.
//!
//! The conversion divides: an ARS amount is priced in pesos per dollar, so
//! `converted = amount / rate`. Everything here is stateless and holds no
//! data across calls.

use chrono::Local;
use tracing::debug;

use crate::core::error::RateError;
use crate::core::quote::{Quote, QuoteProvider, Side, select_rate};

/// Identifies the market and quote leg a resolution should use.
#[derive(Debug, Clone)]
pub struct RateQuery {
    pub market: String,
    pub side: Side,
}

/// Where a resolved rate came from.
#[derive(Debug, Clone, PartialEq)]
pub enum RateOrigin {
    /// Fetched from the quote service.
    Live {
        source_name: String,
        as_of: Option<String>,
    },
    /// Supplied by the user, stamped with the local time of the conversion.
    Manual { as_of: String },
}

/// The single positive rate a conversion uses, with its provenance.
#[derive(Debug, Clone)]
pub struct ResolvedRate {
    pub rate: f64,
    pub origin: RateOrigin,
}

/// One conversion attempt: the amount plus how to obtain the rate.
///
/// A valid manual rate wins over the live query; an absent or unusable
/// manual rate falls through to a live fetch.
#[derive(Debug, Clone)]
pub struct ConversionRequest {
    pub amount: f64,
    pub manual_rate: Option<f64>,
    pub query: RateQuery,
}

#[derive(Debug, Clone)]
pub struct ConversionResult {
    pub converted: f64,
    pub rate_used: ResolvedRate,
}

/// Fetches a fresh quote and reduces it to a single usable rate.
pub async fn sync_rate(
    provider: &dyn QuoteProvider,
    query: &RateQuery,
) -> Result<ResolvedRate, RateError> {
    let quote = provider.fetch_quote(&query.market).await?;
    resolve_live(&quote, query.side)
}

fn resolve_live(quote: &Quote, side: Side) -> Result<ResolvedRate, RateError> {
    let rate = select_rate(quote, side);
    if rate <= 0.0 {
        return Err(RateError::InvalidQuote {
            market: quote.market.clone(),
        });
    }
    debug!(rate, %side, market = %quote.market, "Selected rate from quote");

    Ok(ResolvedRate {
        rate,
        origin: RateOrigin::Live {
            source_name: quote.source_name.clone(),
            as_of: quote.as_of.clone(),
        },
    })
}

/// Validates the amount, resolves a rate by precedence, and converts.
///
/// The amount check runs before any network access on both paths. Display
/// rounding belongs to the caller; the quotient is returned untouched.
pub async fn resolve_and_convert(
    provider: &dyn QuoteProvider,
    request: &ConversionRequest,
) -> Result<ConversionResult, RateError> {
    let amount = request.amount;
    if !amount.is_finite() || amount <= 0.0 {
        return Err(RateError::InvalidAmount(amount));
    }

    let rate_used = match request
        .manual_rate
        .filter(|rate| rate.is_finite() && *rate > 0.0)
    {
        Some(rate) => {
            debug!(rate, "Using manual rate, skipping live lookup");
            ResolvedRate {
                rate,
                origin: RateOrigin::Manual {
                    as_of: Local::now().format("%Y-%m-%d %H:%M").to_string(),
                },
            }
        }
        None => sync_rate(provider, &request.query).await?,
    };

    Ok(ConversionResult {
        converted: amount / rate_used.rate,
        rate_used,
    })
}
