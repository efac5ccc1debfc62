//! Display names for well-known ISO 4217 codes

use std::collections::HashMap;
use std::sync::LazyLock;

const KNOWN_CURRENCIES: &[(&str, &str)] = &[
    ("EUR", "Euro"),
    ("GBP", "British Pound"),
    ("JPY", "Japanese Yen"),
    ("AUD", "Australian Dollar"),
    ("CAD", "Canadian Dollar"),
    ("CHF", "Swiss Franc"),
    ("CNY", "Chinese Yuan"),
    ("INR", "Indian Rupee"),
    ("NZD", "New Zealand Dollar"),
    ("MXN", "Mexican Peso"),
    ("SGD", "Singapore Dollar"),
    ("HKD", "Hong Kong Dollar"),
    ("NOK", "Norwegian Krone"),
    ("SEK", "Swedish Krona"),
    ("RUB", "Russian Ruble"),
    ("ZAR", "South African Rand"),
    ("BRL", "Brazilian Real"),
    ("KRW", "South Korean Won"),
    ("THB", "Thai Baht"),
    ("MYR", "Malaysian Ringgit"),
    ("PHP", "Philippine Peso"),
    ("IDR", "Indonesian Rupiah"),
    ("TRY", "Turkish Lira"),
    ("AED", "UAE Dirham"),
    ("SAR", "Saudi Riyal"),
];

static CURRENCY_NAMES: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| KNOWN_CURRENCIES.iter().copied().collect());

/// Returns the display name for an uppercase code, or the code itself when unknown.
pub fn currency_name(code: &str) -> &str {
    CURRENCY_NAMES.get(code).copied().unwrap_or(code)
}
