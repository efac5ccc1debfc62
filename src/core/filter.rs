use super::rate::CurrencyRate;

/// Returns the rates whose code contains `filter`, ignoring case.
///
/// An empty filter returns every rate. Order is preserved in both cases.
pub fn filter_rates<'a>(rates: &'a [CurrencyRate], filter: &str) -> Vec<&'a CurrencyRate> {
    if filter.is_empty() {
        return rates.iter().collect();
    }

    let needle = filter.to_uppercase();
    rates
        .iter()
        .filter(|rate| rate.currency_code.contains(&needle))
        .collect()
}

/// Finds a rate by exact code, ignoring case.
pub fn find_rate<'a>(rates: &'a [CurrencyRate], code: &str) -> Option<&'a CurrencyRate> {
    let code = code.to_uppercase();
    rates.iter().find(|rate| rate.currency_code == code)
}
