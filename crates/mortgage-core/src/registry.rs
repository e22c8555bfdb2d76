//! Closed lookup tables for PiXELL River mortgage products.
//!
//! Rates, payment frequencies and amortization terms are fixed business
//! constants compiled into the crate. Lookups are exact, case-sensitive
//! matches on the symbolic key.

use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::InvalidLookup;
use crate::types::Rate;

// ---------------------------------------------------------------------------
// Amortization terms
// ---------------------------------------------------------------------------

/// Permitted amortization periods, in years.
pub const VALID_AMORTIZATION: [u32; 6] = [5, 10, 15, 20, 25, 30];

/// True when `years` is one of the permitted amortization periods.
pub fn is_valid_amortization(years: u32) -> bool {
    VALID_AMORTIZATION.contains(&years)
}

// ---------------------------------------------------------------------------
// Mortgage rates
// ---------------------------------------------------------------------------

/// Annual mortgage rates on offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MortgageRate {
    #[serde(rename = "FIXED_5")]
    Fixed5,
    #[serde(rename = "FIXED_3")]
    Fixed3,
    #[serde(rename = "FIXED_1")]
    Fixed1,
    #[serde(rename = "VARIABLE_5")]
    Variable5,
    #[serde(rename = "VARIABLE_3")]
    Variable3,
    #[serde(rename = "VARIABLE_1")]
    Variable1,
}

impl MortgageRate {
    /// Every rate, in table order.
    pub const ALL: [MortgageRate; 6] = [
        MortgageRate::Fixed5,
        MortgageRate::Fixed3,
        MortgageRate::Fixed1,
        MortgageRate::Variable5,
        MortgageRate::Variable3,
        MortgageRate::Variable1,
    ];

    /// Symbolic key, e.g. `"FIXED_5"`.
    pub fn name(self) -> &'static str {
        match self {
            MortgageRate::Fixed5 => "FIXED_5",
            MortgageRate::Fixed3 => "FIXED_3",
            MortgageRate::Fixed1 => "FIXED_1",
            MortgageRate::Variable5 => "VARIABLE_5",
            MortgageRate::Variable3 => "VARIABLE_3",
            MortgageRate::Variable1 => "VARIABLE_1",
        }
    }

    /// Annual rate as a fraction (0.0519 = 5.19%).
    pub fn value(self) -> Rate {
        match self {
            MortgageRate::Fixed5 => dec!(0.0519),
            MortgageRate::Fixed3 => dec!(0.0589),
            MortgageRate::Fixed1 => dec!(0.0599),
            MortgageRate::Variable5 => dec!(0.0649),
            MortgageRate::Variable3 => dec!(0.0669),
            MortgageRate::Variable1 => dec!(0.0679),
        }
    }

    pub fn from_name(name: &str) -> Result<Self, InvalidLookup> {
        Self::ALL
            .into_iter()
            .find(|rate| rate.name() == name)
            .ok_or_else(|| InvalidLookup {
                table: "rate",
                name: name.to_string(),
            })
    }
}

// ---------------------------------------------------------------------------
// Payment frequencies
// ---------------------------------------------------------------------------

/// How often payments are made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentFrequency {
    #[serde(rename = "MONTHLY")]
    Monthly,
    #[serde(rename = "BI_WEEKLY")]
    BiWeekly,
    #[serde(rename = "WEEKLY")]
    Weekly,
}

impl PaymentFrequency {
    /// Every frequency, in table order.
    pub const ALL: [PaymentFrequency; 3] = [
        PaymentFrequency::Monthly,
        PaymentFrequency::BiWeekly,
        PaymentFrequency::Weekly,
    ];

    /// Symbolic key, e.g. `"BI_WEEKLY"`.
    pub fn name(self) -> &'static str {
        match self {
            PaymentFrequency::Monthly => "MONTHLY",
            PaymentFrequency::BiWeekly => "BI_WEEKLY",
            PaymentFrequency::Weekly => "WEEKLY",
        }
    }

    /// Number of payments in one year.
    pub fn periods_per_year(self) -> u32 {
        match self {
            PaymentFrequency::Monthly => 12,
            PaymentFrequency::BiWeekly => 26,
            PaymentFrequency::Weekly => 52,
        }
    }

    pub fn from_name(name: &str) -> Result<Self, InvalidLookup> {
        Self::ALL
            .into_iter()
            .find(|frequency| frequency.name() == name)
            .ok_or_else(|| InvalidLookup {
                table: "frequency",
                name: name.to_string(),
            })
    }
}

// ---------------------------------------------------------------------------
// Name lookups
// ---------------------------------------------------------------------------

/// Resolve a rate key to its annual rate.
pub fn resolve_rate(name: &str) -> Result<Rate, InvalidLookup> {
    MortgageRate::from_name(name).map(MortgageRate::value)
}

/// Resolve a frequency key to its payments per year.
pub fn resolve_frequency(name: &str) -> Result<u32, InvalidLookup> {
    PaymentFrequency::from_name(name).map(PaymentFrequency::periods_per_year)
}

/// `(name, annual rate)` pairs in table order.
pub fn rate_table() -> Vec<(&'static str, Rate)> {
    MortgageRate::ALL
        .iter()
        .map(|rate| (rate.name(), rate.value()))
        .collect()
}

/// `(name, payments per year)` pairs in table order.
pub fn frequency_table() -> Vec<(&'static str, u32)> {
    PaymentFrequency::ALL
        .iter()
        .map(|frequency| (frequency.name(), frequency.periods_per_year()))
        .collect()
}
