use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::Value;

use mortgage_core::registry::{self, VALID_AMORTIZATION};

#[derive(Debug, Serialize)]
struct RateRow {
    name: &'static str,
    annual_rate: Decimal,
}

#[derive(Debug, Serialize)]
struct FrequencyRow {
    name: &'static str,
    periods_per_year: u32,
}

#[derive(Debug, Serialize)]
struct RegistryListing {
    rates: Vec<RateRow>,
    frequencies: Vec<FrequencyRow>,
    amortization_years: Vec<u32>,
}

/// List every key the record validator accepts.
pub fn run_rates() -> Result<Value, Box<dyn std::error::Error>> {
    let listing = RegistryListing {
        rates: registry::rate_table()
            .into_iter()
            .map(|(name, annual_rate)| RateRow { name, annual_rate })
            .collect(),
        frequencies: registry::frequency_table()
            .into_iter()
            .map(|(name, periods_per_year)| FrequencyRow {
                name,
                periods_per_year,
            })
            .collect(),
        amortization_years: VALID_AMORTIZATION.to_vec(),
    };
    Ok(serde_json::to_value(listing)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listing_shape() {
        let value = run_rates().unwrap();
        assert_eq!(value["rates"].as_array().unwrap().len(), 6);
        assert_eq!(value["rates"][1]["name"], "FIXED_3");
        assert_eq!(value["rates"][1]["annual_rate"], "0.0589");
        assert_eq!(value["frequencies"][1]["name"], "BI_WEEKLY");
        assert_eq!(value["frequencies"][1]["periods_per_year"], 26);
        assert_eq!(value["amortization_years"][5], 30);
    }
}
