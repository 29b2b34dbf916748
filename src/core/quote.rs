//! Quote data model and rate selection policy

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

use crate::core::error::RateError;

/// A snapshot bid/ask pair for one market, as published by a quote source.
///
/// Either side may be 0 when the source does not populate it. A quote with
/// both sides 0 carries no usable rate.
#[derive(Debug, Clone)]
pub struct Quote {
    pub market: String,
    pub bid: f64,
    pub ask: f64,
    pub source_name: String,
    pub as_of: Option<String>,
}

/// Which leg of a quote a conversion transacts against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Buy,
    #[default]
    Sell,
    Average,
}

impl Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Side::Buy => "buy",
                Side::Sell => "sell",
                Side::Average => "average",
            }
        )
    }
}

#[async_trait]
pub trait QuoteProvider: Send + Sync {
    async fn fetch_quote(&self, market: &str) -> Result<Quote, RateError>;
}

/// Picks a single rate out of a quote for the given side.
///
/// Each side prefers its own leg and falls back to the other one when the
/// preferred leg is 0, so a source that only publishes one side of the
/// spread still yields a rate. Returns 0 when neither leg is positive;
/// callers must treat 0 as "no usable rate", never as a rate.
pub fn select_rate(quote: &Quote, side: Side) -> f64 {
    match side {
        Side::Buy => first_positive(quote.bid, quote.ask),
        Side::Sell => first_positive(quote.ask, quote.bid),
        Side::Average => {
            if quote.bid > 0.0 && quote.ask > 0.0 {
                (quote.bid + quote.ask) / 2.0
            } else {
                // Single-sided average falls back ask first.
                first_positive(quote.ask, quote.bid)
            }
        }
    }
}

fn first_positive(preferred: f64, fallback: f64) -> f64 {
    if preferred > 0.0 {
        preferred
    } else if fallback > 0.0 {
        fallback
    } else {
        0.0
    }
}
