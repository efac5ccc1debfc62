use super::ui;
use crate::core::filter::filter_rates;
use crate::core::{CurrencyRate, RateNormalizer, RateSource};
use anyhow::Result;
use comfy_table::Cell;

pub async fn run(
    source: &dyn RateSource,
    normalizer: &RateNormalizer,
    filter: Option<&str>,
    plain: bool,
) -> Result<()> {
    let rates = super::load_or_fail(source, normalizer).await?;
    println!("{}", render(&rates, normalizer.base_currency(), filter, plain));
    Ok(())
}

/// Renders the rates matching `filter`, either as a table or one line per rate.
pub fn render(
    rates: &[CurrencyRate],
    base_currency: &str,
    filter: Option<&str>,
    plain: bool,
) -> String {
    if rates.is_empty() {
        return "No currencies to display.".to_string();
    }

    let filter = filter.unwrap_or_default();
    let shown = filter_rates(rates, filter);
    if shown.is_empty() {
        return format!(
            "No currencies match {}.",
            ui::style_text(filter, ui::StyleType::Error)
        );
    }

    if plain {
        return shown
            .iter()
            .map(|rate| rate.display_format())
            .collect::<Vec<_>>()
            .join("\n");
    }

    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Code"),
        ui::header_cell("Currency"),
        ui::header_cell(&format!("Per 1 {base_currency}")),
    ]);
    for rate in &shown {
        table.add_row(vec![
            Cell::new(&rate.currency_code),
            Cell::new(&rate.currency_name),
            ui::rate_cell(rate.exchange_rate),
        ]);
    }

    let mut output = format!(
        "Exchange rates: {}\n\n",
        ui::style_text(base_currency, ui::StyleType::Title)
    );
    output.push_str(&table.to_string());
    output.push_str(&format!(
        "\n\n{}",
        ui::style_text(
            &format!("{} of {} currencies", shown.len(), rates.len()),
            ui::StyleType::Subtle
        )
    ));
    output
}
