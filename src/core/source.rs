//! Rate source abstraction and the fetch-then-normalize pipeline

use async_trait::async_trait;
use tracing::{debug, warn};

use super::normalize::RateNormalizer;
use super::rate::CurrencyRate;

#[async_trait]
pub trait RateSource: Send + Sync {
    /// Returns the raw response body, or `None` when no endpoint could deliver one.
    async fn fetch(&self) -> Option<String>;
}

/// Fetches and normalizes rates in one step.
///
/// `None` means the fetch failed; `Some` with an empty list means the fetch
/// succeeded but nothing in the response was displayable.
pub async fn load_rates(
    source: &dyn RateSource,
    normalizer: &RateNormalizer,
) -> Option<Vec<CurrencyRate>> {
    let Some(text) = source.fetch().await else {
        warn!("No rate data available from any provider");
        return None;
    };

    let rates = normalizer.normalize(&text);
    debug!(count = rates.len(), "Loaded currency rates");
    Some(rates)
}
