//! Turns raw provider responses into a sorted list of [`CurrencyRate`]s.
//!
//! Two provider layouts are understood:
//!
//! - primary: `{"usd": {"eur": 0.92, ...}}` with lowercase codes
//! - backup: `{"rates": {"EUR": 0.92, ...}}` with uppercase codes
//!
//! Anything else, including malformed JSON or non-numeric rates, degrades to
//! an empty list.

use serde_json::{Map, Value};
use std::collections::BTreeMap;
use tracing::{debug, instrument};

use super::names::currency_name;
use super::rate::CurrencyRate;

/// Every provider quotes against this currency.
pub const BASE_CURRENCY: &str = "USD";

const PRIMARY_RATES_KEY: &str = "usd";
const BACKUP_RATES_KEY: &str = "rates";

/// A response body classified by its top-level layout.
#[derive(Debug, PartialEq)]
enum RateResponse {
    Primary(Value),
    Backup(Value),
    Unrecognized,
}

#[derive(Debug, Clone, Default)]
pub struct RateNormalizer;

impl RateNormalizer {
    pub fn base_currency(&self) -> &str {
        BASE_CURRENCY
    }

    #[instrument(name = "NormalizeRates", skip_all)]
    pub fn normalize(&self, text: &str) -> Vec<CurrencyRate> {
        let object: Map<String, Value> = match serde_json::from_str(text) {
            Ok(object) => object,
            Err(e) => {
                debug!("Response is not a JSON object: {}", e);
                return Vec::new();
            }
        };

        let rates = match self.classify(object) {
            RateResponse::Primary(value) | RateResponse::Backup(value) => Self::read_rates(value),
            RateResponse::Unrecognized => {
                debug!("Unrecognized response layout");
                return Vec::new();
            }
        };

        match rates {
            Ok(rates) => self.build_records(rates),
            Err(e) => {
                debug!("Failed to read rates from response: {}", e);
                Vec::new()
            }
        }
    }

    fn classify(&self, mut object: Map<String, Value>) -> RateResponse {
        if let Some(value) = object.remove(PRIMARY_RATES_KEY) {
            debug!("Reading primary response layout");
            RateResponse::Primary(value)
        } else if let Some(value) = object.remove(BACKUP_RATES_KEY) {
            debug!("Reading backup response layout");
            RateResponse::Backup(value)
        } else {
            RateResponse::Unrecognized
        }
    }

    /// Reads a `code -> rate` object, uppercasing every code since the two
    /// layouts only differ in casing. A single non-numeric rate fails the
    /// whole object.
    fn read_rates(value: Value) -> serde_json::Result<BTreeMap<String, f64>> {
        let rates: BTreeMap<String, f64> = serde_json::from_value(value)?;
        Ok(rates
            .into_iter()
            .map(|(code, rate)| (code.to_uppercase(), rate))
            .collect())
    }

    /// Drops the base currency and attaches display names. The input map is
    /// keyed by uppercase code, so the output is sorted and free of duplicates.
    fn build_records(&self, rates: BTreeMap<String, f64>) -> Vec<CurrencyRate> {
        let records: Vec<CurrencyRate> = rates
            .into_iter()
            .filter(|(code, _)| code != BASE_CURRENCY)
            .map(|(code, rate)| CurrencyRate::new(&code, currency_name(&code), rate))
            .collect();
        debug!("Normalized {} rates", records.len());
        records
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codes(rates: &[CurrencyRate]) -> Vec<&str> {
        rates.iter().map(|r| r.currency_code.as_str()).collect()
    }

    #[test]
    fn test_parse_primary_format() {
        let text = r#"
        {
            "usd": {
                "gbp": 0.7890,
                "eur": 0.9234
            }
        }"#;

        let rates = RateNormalizer::default().normalize(text);

        assert_eq!(
            rates,
            vec![
                CurrencyRate::new("EUR", "Euro", 0.9234),
                CurrencyRate::new("GBP", "British Pound", 0.7890),
            ]
        );
    }

    #[test]
    fn test_parse_backup_format() {
        let text = r#"{
            "result": "success",
            "base_code": "USD",
            "rates": {"USD": 1, "JPY": 147.25, "AED": 3.6725, "XYZ": 2.5}
        }"#;

        let rates = RateNormalizer::default().normalize(text);

        assert_eq!(codes(&rates), vec!["AED", "JPY", "XYZ"]);
        assert_eq!(rates[0].currency_name, "UAE Dirham");
        assert_eq!(rates[1].exchange_rate, 147.25);
        assert_eq!(rates[2].currency_name, "XYZ");
    }

    #[test]
    fn test_base_currency_is_excluded() {
        let text = r#"{"usd": {"usd": 1.0, "eur": 0.9, "cad": 1.36}}"#;
        let rates = RateNormalizer::default().normalize(text);
        assert_eq!(codes(&rates), vec!["CAD", "EUR"]);
    }

    #[test]
    fn test_output_is_sorted_by_code() {
        let text = r#"{"rates": {"ZAR": 18.1, "AUD": 1.5, "MXN": 17.0, "BRL": 4.9}}"#;
        let rates = RateNormalizer::default().normalize(text);
        assert_eq!(codes(&rates), vec!["AUD", "BRL", "MXN", "ZAR"]);
    }

    #[test]
    fn test_primary_key_takes_precedence_over_rates() {
        let text = r#"{"rates": {"GBP": 0.79}, "usd": {"eur": 0.92}}"#;
        let rates = RateNormalizer::default().normalize(text);
        assert_eq!(codes(&rates), vec!["EUR"]);
    }

    #[test]
    fn test_codes_differing_only_in_case_are_not_duplicated() {
        let text = r#"{"rates": {"EUR": 0.92, "eur": 0.93}}"#;
        let rates = RateNormalizer::default().normalize(text);
        assert_eq!(rates.len(), 1);
        assert_eq!(rates[0].currency_code, "EUR");
    }

    #[test]
    fn test_empty_json_object() {
        assert!(RateNormalizer::default().normalize("{}").is_empty());
    }

    #[test]
    fn test_invalid_json() {
        let rates = RateNormalizer::default().normalize("This is not JSON at all");
        assert!(rates.is_empty());
    }

    #[test]
    fn test_non_object_json() {
        assert!(RateNormalizer::default().normalize("[1, 2, 3]").is_empty());
        assert!(RateNormalizer::default().normalize("42").is_empty());
    }

    #[test]
    fn test_empty_or_base_only_rates() {
        let normalizer = RateNormalizer::default();
        assert!(normalizer.normalize(r#"{"usd": {}}"#).is_empty());
        assert!(normalizer.normalize(r#"{"usd": {"usd": 1}}"#).is_empty());
        assert!(normalizer.normalize(r#"{"rates": {"USD": 1}}"#).is_empty());
    }

    #[test]
    fn test_non_numeric_rate_discards_whole_response() {
        let text = r#"{"usd": {"eur": 0.92, "gbp": "0.79", "jpy": 147.0}}"#;
        assert!(RateNormalizer::default().normalize(text).is_empty());

        let text = r#"{"rates": {"EUR": null}}"#;
        assert!(RateNormalizer::default().normalize(text).is_empty());
    }

    #[test]
    fn test_rates_container_must_be_an_object() {
        let text = r#"{"usd": "unavailable"}"#;
        assert!(RateNormalizer::default().normalize(text).is_empty());
    }

    #[test]
    fn test_zero_and_negative_rates_pass_through() {
        let text = r#"{"usd": {"eur": 0, "gbp": -1.5}}"#;
        let rates = RateNormalizer::default().normalize(text);
        assert_eq!(rates[0].exchange_rate, 0.0);
        assert_eq!(rates[1].exchange_rate, -1.5);
    }

    #[test]
    fn test_rates_are_always_read_against_usd() {
        let normalizer = RateNormalizer::default();
        assert_eq!(normalizer.base_currency(), "USD");

        let text = r#"{"date": "2024-03-01", "usd": {"eur": 0.92, "gbp": 0.79}}"#;
        assert_eq!(codes(&normalizer.normalize(text)), vec!["EUR", "GBP"]);

        // A body keyed by another base is not a known layout
        assert!(normalizer.normalize(r#"{"eur": {"usd": 1.08}}"#).is_empty());
    }

    #[test]
    fn test_both_layouts_normalize_identically() {
        let normalizer = RateNormalizer::default();
        let primary = normalizer.normalize(r#"{"usd": {"usd": 1, "gbp": 0.79, "eur": 0.92}}"#);
        let backup = normalizer.normalize(r#"{"rates": {"USD": 1, "GBP": 0.79, "EUR": 0.92}}"#);
        assert_eq!(primary, backup);
    }

    #[test]
    fn test_classify_response_layouts() {
        let normalizer = RateNormalizer::default();
        let classify = |text: &str| normalizer.classify(serde_json::from_str(text).unwrap());

        assert_eq!(
            classify(r#"{"usd": {}}"#),
            RateResponse::Primary(serde_json::json!({}))
        );
        assert_eq!(
            classify(r#"{"rates": {}}"#),
            RateResponse::Backup(serde_json::json!({}))
        );
        assert_eq!(classify(r#"{"data": {}}"#), RateResponse::Unrecognized);
    }
}
