use super::ui;
use crate::core::{
    ConversionRequest, ConversionResult, QuoteProvider, RateQuery, Side, resolve_and_convert,
};
use anyhow::Result;
use comfy_table::Cell;

pub async fn run(
    provider: &dyn QuoteProvider,
    amount: f64,
    manual_rate: Option<f64>,
    market: &str,
    side: Side,
) -> Result<()> {
    let request = ConversionRequest {
        amount,
        manual_rate,
        query: RateQuery {
            market: market.to_string(),
            side,
        },
    };

    let spinner = ui::new_spinner("Resolving rate...");
    let result = resolve_and_convert(provider, &request).await;
    spinner.finish_and_clear();

    match result {
        Ok(conversion) => {
            println!("{}", render(amount, &conversion));
            Ok(())
        }
        Err(e) => {
            super::report_error(&e);
            Err(e.into())
        }
    }
}

fn render(amount: f64, conversion: &ConversionResult) -> String {
    let rate_used = &conversion.rate_used;

    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("ARS"),
        ui::header_cell("USD"),
        ui::header_cell("Rate"),
        ui::header_cell("Source"),
    ]);
    table.add_row(vec![
        ui::amount_cell(amount),
        ui::amount_cell(conversion.converted),
        ui::amount_cell(rate_used.rate),
        Cell::new(super::provenance_line(&rate_used.origin)),
    ]);
    table.to_string()
}
