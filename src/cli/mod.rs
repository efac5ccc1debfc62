pub mod list;
pub mod setup;
pub mod show;
pub mod ui;

use crate::core::{CurrencyRate, RateNormalizer, RateSource, load_rates};
use anyhow::{Result, bail};

/// Loads rates behind a spinner, turning a failed fetch into an error.
pub(crate) async fn load_or_fail(
    source: &dyn RateSource,
    normalizer: &RateNormalizer,
) -> Result<Vec<CurrencyRate>> {
    let pb = ui::new_spinner("Fetching exchange rates");
    let rates = load_rates(source, normalizer).await;
    pb.finish_and_clear();

    match rates {
        Some(rates) => Ok(rates),
        None => bail!("Unable to load currency rates from any provider"),
    }
}
