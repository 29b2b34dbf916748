use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use crate::core::{Quote, QuoteProvider, RateError};

/// Quote gateway backed by dolarapi.com.
///
/// One outbound request per call, no retries, no state between calls.
pub struct DolarApiProvider {
    base_url: String,
}

impl DolarApiProvider {
    pub fn new(base_url: &str) -> Self {
        DolarApiProvider {
            base_url: base_url.to_string(),
        }
    }

    async fn get_text(&self, endpoint: &str, market: &str) -> Result<String, RateError> {
        let url = format!("{}{}", self.base_url, endpoint);
        debug!("Requesting quote data from {}", url);

        let client = reqwest::Client::builder()
            .user_agent("cambio/1.0")
            .build()
            .map_err(|e| transport(market, format!("Failed to build HTTP client: {e}")))?;

        let response = client
            .get(&url)
            .send()
            .await
            .map_err(|e| transport(market, format!("Request error: {e}")))?;

        if !response.status().is_success() {
            return Err(transport(
                market,
                format!("HTTP error: {}", response.status()),
            ));
        }

        response
            .text()
            .await
            .map_err(|e| transport(market, format!("Failed to read response body: {e}")))
    }

    /// Fetches the whole quote board, one entry per market.
    pub async fn fetch_board(&self) -> Result<Vec<Quote>, RateError> {
        let text = self.get_text("/dolares", "all").await?;

        let payload: Vec<DolarApiQuote> = serde_json::from_str(&text)
            .map_err(|e| transport("all", format!("Failed to parse payload: {e}")))?;

        Ok(payload
            .into_iter()
            .map(|entry| {
                let market = entry.casa.clone().unwrap_or_default();
                entry.into_quote(&market)
            })
            .collect())
    }
}

fn transport(market: &str, reason: String) -> RateError {
    RateError::Transport {
        market: market.to_string(),
        reason,
    }
}

#[derive(Debug, Deserialize)]
struct DolarApiQuote {
    casa: Option<String>,
    nombre: Option<String>,
    compra: Option<f64>,
    venta: Option<f64>,
    #[serde(alias = "fechaActualizacion")]
    fecha_actualizacion: Option<String>,
}

impl DolarApiQuote {
    fn into_quote(self, market: &str) -> Quote {
        Quote {
            market: self.casa.unwrap_or_else(|| market.to_string()),
            bid: coerce(self.compra),
            ask: coerce(self.venta),
            source_name: self.nombre.unwrap_or_else(|| market.to_string()),
            as_of: self.fecha_actualizacion,
        }
    }
}

/// Absent or non-numeric sides become 0 so the selection fallback applies.
/// Only a payload that fails to parse at all is a transport failure.
fn coerce(value: Option<f64>) -> f64 {
    value.filter(|v| v.is_finite()).unwrap_or(0.0)
}

#[async_trait]
impl QuoteProvider for DolarApiProvider {
    async fn fetch_quote(&self, market: &str) -> Result<Quote, RateError> {
        let text = self.get_text(&format!("/dolares/{market}"), market).await?;

        let payload: DolarApiQuote = serde_json::from_str(&text)
            .map_err(|e| transport(market, format!("Failed to parse payload: {e}")))?;

        Ok(payload.into_quote(market))
    }
}
