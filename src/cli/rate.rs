use super::ui;
use crate::core::{QuoteProvider, RateQuery, Side, sync_rate};
use anyhow::Result;

/// Fetches a fresh quote and prints the rate a conversion would use.
/// The printed value is what a user passes back via `--rate` when offline.
pub async fn run(provider: &dyn QuoteProvider, market: &str, side: Side) -> Result<()> {
    let query = RateQuery {
        market: market.to_string(),
        side,
    };

    let spinner = ui::new_spinner("Fetching quote...");
    let result = sync_rate(provider, &query).await;
    spinner.finish_and_clear();

    match result {
        Ok(resolved) => {
            println!(
                "{}  {}",
                ui::style_text(&format!("{:.2}", resolved.rate), ui::StyleType::RateValue),
                ui::style_text(
                    &format!("{} · {side}", super::provenance_line(&resolved.origin)),
                    ui::StyleType::Subtle
                ),
            );
            println!(
                "{}",
                ui::style_text(
                    &format!("Reuse offline with: cambio convert <AMOUNT> --rate {:.2}", resolved.rate),
                    ui::StyleType::Subtle
                )
            );
            Ok(())
        }
        Err(e) => {
            super::report_error(&e);
            Err(e.into())
        }
    }
}
