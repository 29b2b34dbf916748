use super::ui;
use crate::providers::dolarapi::DolarApiProvider;
use anyhow::Result;
use comfy_table::Cell;

/// Renders the full quote board, one row per market.
pub async fn run(provider: &DolarApiProvider) -> Result<()> {
    let spinner = ui::new_spinner("Fetching quote board...");
    let result = provider.fetch_board().await;
    spinner.finish_and_clear();

    let board = match result {
        Ok(board) => board,
        Err(e) => {
            super::report_error(&e);
            return Err(e.into());
        }
    };

    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Market"),
        ui::header_cell("Name"),
        ui::header_cell("Buy"),
        ui::header_cell("Sell"),
        ui::header_cell("Updated"),
    ]);

    for quote in &board {
        table.add_row(vec![
            Cell::new(&quote.market),
            Cell::new(&quote.source_name),
            ui::rate_cell(quote.bid),
            ui::rate_cell(quote.ask),
            Cell::new(quote.as_of.as_deref().unwrap_or("n/a")),
        ]);
    }

    println!("{table}");
    Ok(())
}
