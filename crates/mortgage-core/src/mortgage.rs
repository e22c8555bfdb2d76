//! Validated mortgage records and fixed-payment amortization.
//!
//! A [`Mortgage`] can only exist in a valid state: construction and every
//! setter run the same per-field validation, and a failed setter leaves the
//! record untouched. Payments are computed in `rust_decimal::Decimal` and
//! rounded to cents half away from zero.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;
use std::time::Instant;

use crate::error::MortgageError;
use crate::format::{capitalize, format_currency, format_percent, round_money};
use crate::registry::{is_valid_amortization, MortgageRate, PaymentFrequency};
use crate::types::{with_metadata, ComputationOutput, Money, Rate};
use crate::MortgageResult;

// ---------------------------------------------------------------------------
// Field validation
// ---------------------------------------------------------------------------

fn validate_loan_amount(amount: Money) -> MortgageResult<Money> {
    if amount <= Decimal::ZERO {
        return Err(MortgageError::InvalidLoanAmount);
    }
    // 325000.50 and 325000.5 are the same principal
    Ok(amount.normalize())
}

fn validate_rate(name: &str) -> MortgageResult<MortgageRate> {
    MortgageRate::from_name(name).map_err(|_| MortgageError::InvalidRate)
}

fn validate_frequency(name: &str) -> MortgageResult<PaymentFrequency> {
    PaymentFrequency::from_name(name).map_err(|_| MortgageError::InvalidFrequency)
}

fn validate_amortization(years: u32) -> MortgageResult<u32> {
    if !is_valid_amortization(years) {
        return Err(MortgageError::InvalidAmortization);
    }
    Ok(years)
}

fn parse_loan_amount(raw: &str) -> MortgageResult<Money> {
    let raw = raw.trim();
    Decimal::from_str(raw)
        .or_else(|_| Decimal::from_scientific(raw))
        .map_err(|_| MortgageError::InvalidLoanAmount)
}

fn parse_amortization(raw: &str) -> MortgageResult<u32> {
    raw.trim()
        .parse::<u32>()
        .map_err(|_| MortgageError::InvalidAmortization)
}

// ---------------------------------------------------------------------------
// Mortgage record
// ---------------------------------------------------------------------------

/// Unvalidated mortgage fields as they arrive from JSON input.
///
/// Each field accepts any JSON value (string, number, null when missing) and
/// is validated through [`Mortgage::from_raw`], so a wrongly typed field is
/// reported as the matching named error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MortgageInput {
    pub loan_amount: Value,
    pub rate: Value,
    pub frequency: Value,
    pub amortization: Value,
}

/// Text of a raw JSON field: strings as-is, anything else as JSON.
fn raw_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// One mortgage under evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "MortgageInput")]
pub struct Mortgage {
    loan_amount: Money,
    rate: MortgageRate,
    frequency: PaymentFrequency,
    amortization: u32,
}

impl Mortgage {
    /// Build a mortgage from a principal and the rate/frequency keys.
    ///
    /// Fields are checked in the order amount, rate, frequency,
    /// amortization and the first failure is returned.
    pub fn new(
        loan_amount: Money,
        rate: &str,
        frequency: &str,
        amortization: u32,
    ) -> MortgageResult<Self> {
        let loan_amount = validate_loan_amount(loan_amount)?;
        let rate = validate_rate(rate)?;
        let frequency = validate_frequency(frequency)?;
        let amortization = validate_amortization(amortization)?;

        Ok(Self {
            loan_amount,
            rate,
            frequency,
            amortization,
        })
    }

    /// Build a mortgage from four untrusted text fields.
    ///
    /// An amount that is not a number is rejected as `InvalidLoanAmount`; a
    /// term that is not a whole number of years as `InvalidAmortization`.
    pub fn from_raw(
        loan_amount: &str,
        rate: &str,
        frequency: &str,
        amortization: &str,
    ) -> MortgageResult<Self> {
        let loan_amount = validate_loan_amount(parse_loan_amount(loan_amount)?)?;
        let rate = validate_rate(rate.trim())?;
        let frequency = validate_frequency(frequency.trim())?;
        let amortization = validate_amortization(parse_amortization(amortization)?)?;

        Ok(Self {
            loan_amount,
            rate,
            frequency,
            amortization,
        })
    }

    pub fn loan_amount(&self) -> Money {
        self.loan_amount
    }

    pub fn rate(&self) -> MortgageRate {
        self.rate
    }

    pub fn frequency(&self) -> PaymentFrequency {
        self.frequency
    }

    pub fn amortization(&self) -> u32 {
        self.amortization
    }

    pub fn set_loan_amount(&mut self, value: Money) -> MortgageResult<()> {
        self.loan_amount = validate_loan_amount(value)?;
        Ok(())
    }

    pub fn set_rate(&mut self, value: &str) -> MortgageResult<()> {
        self.rate = validate_rate(value)?;
        Ok(())
    }

    pub fn set_frequency(&mut self, value: &str) -> MortgageResult<()> {
        self.frequency = validate_frequency(value)?;
        Ok(())
    }

    pub fn set_amortization(&mut self, value: u32) -> MortgageResult<()> {
        self.amortization = validate_amortization(value)?;
        Ok(())
    }

    /// Interest rate applied per payment period.
    pub fn periodic_rate(&self) -> Rate {
        self.rate.value() / Decimal::from(self.frequency.periods_per_year())
    }

    /// Number of payments over the full amortization term.
    pub fn total_payments(&self) -> u32 {
        self.amortization * self.frequency.periods_per_year()
    }

    /// Fixed periodic payment, rounded to cents.
    ///
    /// PMT = P * i * (1+i)^n / ((1+i)^n - 1)
    pub fn calculate_payment(&self) -> Money {
        let i = self.periodic_rate();
        let n = self.total_payments();

        // (1+i)^n via iterative multiplication
        let one_plus_i = Decimal::ONE + i;
        let mut compound = Decimal::ONE;
        for _ in 0..n {
            compound *= one_plus_i;
        }

        round_money(self.loan_amount * i * compound / (compound - Decimal::ONE))
    }

    /// Machine-readable form: `[amount, rate, amortization, periods per year]`.
    pub fn to_record_string(&self) -> String {
        format!(
            "[{}, {}, {}, {}]",
            self.loan_amount,
            self.rate.value(),
            self.amortization,
            self.frequency.periods_per_year()
        )
    }
}

impl TryFrom<MortgageInput> for Mortgage {
    type Error = MortgageError;

    fn try_from(input: MortgageInput) -> MortgageResult<Self> {
        Mortgage::from_raw(
            &raw_text(&input.loan_amount),
            &raw_text(&input.rate),
            &raw_text(&input.frequency),
            &raw_text(&input.amortization),
        )
    }
}

impl fmt::Display for Mortgage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Mortgage Amount: ${} Rate: {}% Amortization: {} Frequency: {} -- Calculated Payment: ${}",
            format_currency(self.loan_amount),
            format_percent(self.rate.value()),
            self.amortization,
            capitalize(self.frequency.name()),
            format_currency(self.calculate_payment()),
        )
    }
}

// ---------------------------------------------------------------------------
// Payment summary
// ---------------------------------------------------------------------------

/// Payment figures for one mortgage, ready for serialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentSummary {
    pub loan_amount: Money,
    pub rate_name: String,
    pub annual_rate: Rate,
    pub frequency_name: String,
    pub periods_per_year: u32,
    pub amortization_years: u32,
    pub periodic_rate: Rate,
    pub total_payments: u32,
    pub payment: Money,
    /// Periodic payment times the number of payments. None when the total
    /// exceeds the decimal range.
    pub total_paid: Option<Money>,
    pub total_interest: Option<Money>,
    pub description: String,
}

/// Compute the periodic payment and lifetime totals for a mortgage.
pub fn summarize(mortgage: &Mortgage) -> ComputationOutput<PaymentSummary> {
    let start = Instant::now();

    let payment = mortgage.calculate_payment();
    let total_payments = mortgage.total_payments();
    let mut warnings = Vec::new();

    let total_paid = payment
        .checked_mul(Decimal::from(total_payments))
        .map(round_money);
    let total_interest = total_paid
        .and_then(|paid| paid.checked_sub(mortgage.loan_amount()))
        .map(round_money);
    if total_paid.is_none() {
        warnings.push(format!(
            "Total of {} payments of {} exceeds the decimal range; lifetime totals omitted",
            total_payments, payment
        ));
    }

    let summary = PaymentSummary {
        loan_amount: mortgage.loan_amount(),
        rate_name: mortgage.rate().name().to_string(),
        annual_rate: mortgage.rate().value(),
        frequency_name: mortgage.frequency().name().to_string(),
        periods_per_year: mortgage.frequency().periods_per_year(),
        amortization_years: mortgage.amortization(),
        periodic_rate: mortgage.periodic_rate(),
        total_payments,
        payment,
        total_paid,
        total_interest,
        description: mortgage.to_string(),
    };

    let elapsed = start.elapsed().as_micros() as u64;
    with_metadata(
        "Fixed-payment amortization: PMT = P * i(1+i)^n / ((1+i)^n - 1), rounded half away from zero to cents",
        mortgage,
        warnings,
        elapsed,
        summary,
    )
}
