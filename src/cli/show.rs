use super::ui;
use crate::core::filter::find_rate;
use crate::core::{RateNormalizer, RateSource};
use anyhow::{Result, anyhow};

/// Prints the details of a single currency.
pub async fn run(source: &dyn RateSource, normalizer: &RateNormalizer, code: &str) -> Result<()> {
    let rates = super::load_or_fail(source, normalizer).await?;
    let rate = find_rate(&rates, code)
        .ok_or_else(|| anyhow!("No exchange rate found for currency: {}", code.to_uppercase()))?;

    println!(
        "{}\n\n{}",
        ui::style_text(&rate.currency_code, ui::StyleType::Title),
        rate.details(normalizer.base_currency())
    );
    Ok(())
}
