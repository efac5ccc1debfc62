//! Exchange rate record and its display helpers

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Formats a rate with exactly four decimals, rounding halfway values away
/// from zero.
///
/// The shortest decimal representation of the float is rounded, so `0.03125`
/// becomes `0.0313` and `1.00005` becomes `1.0001`. Values `Decimal` cannot
/// hold (non-finite or huge) use the standard float formatting.
pub fn format_rate(rate: f64) -> String {
    match Decimal::from_str(&rate.to_string()) {
        Ok(value) => {
            let rounded = value.round_dp_with_strategy(4, RoundingStrategy::MidpointAwayFromZero);
            format!("{rounded:.4}")
        }
        Err(_) => format!("{rate:.4}"),
    }
}

/// A single exchange rate against the base currency.
///
/// `exchange_rate` is the number of foreign units one base unit buys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrencyRate {
    pub currency_code: String,
    pub currency_name: String,
    pub exchange_rate: f64,
}

impl CurrencyRate {
    pub fn new(currency_code: &str, currency_name: &str, exchange_rate: f64) -> Self {
        CurrencyRate {
            currency_code: currency_code.to_string(),
            currency_name: currency_name.to_string(),
            exchange_rate,
        }
    }

    /// Formats the record as `"<CODE> - <rate>"` with exactly four decimals.
    pub fn display_format(&self) -> String {
        format!("{} - {}", self.currency_code, format_rate(self.exchange_rate))
    }

    /// How many base units one foreign unit buys.
    pub fn inverse_rate(&self) -> f64 {
        1.0 / self.exchange_rate
    }

    pub fn details(&self, base_currency: &str) -> String {
        let code = &self.currency_code;
        let mut output = format!("Currency: {code}\n");
        output.push_str(&format!("Name: {}\n", self.currency_name));
        output.push_str(&format!(
            "Exchange Rate: {}\n",
            format_rate(self.exchange_rate)
        ));
        output.push_str("\nThis means:\n");
        output.push_str(&format!(
            "1 {base_currency} = {} {code}\n",
            format_rate(self.exchange_rate)
        ));
        output.push_str(&format!(
            "1 {code} = {} {base_currency}",
            format_rate(self.inverse_rate())
        ));
        output
    }
}
