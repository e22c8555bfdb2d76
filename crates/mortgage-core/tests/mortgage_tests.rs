use mortgage_core::registry::{self, VALID_AMORTIZATION};
use mortgage_core::{Mortgage, MortgageError, MortgageRate, PaymentFrequency};
use pretty_assertions::assert_eq;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

const AMOUNT: Decimal = dec!(682912.43);

// ===========================================================================
// Construction
// ===========================================================================

#[test]
fn test_non_positive_amounts_rejected() {
    for amount in [dec!(0), dec!(-0.01), dec!(-1), dec!(-682912.43)] {
        assert_eq!(
            Mortgage::new(amount, "FIXED_5", "MONTHLY", 5).unwrap_err(),
            MortgageError::InvalidLoanAmount,
            "amount {amount}"
        );
    }
}

#[test]
fn test_positive_amounts_accepted() {
    for amount in [dec!(0.01), dec!(1), dec!(250000), dec!(10000000)] {
        let m = Mortgage::new(amount, "FIXED_5", "MONTHLY", 5).unwrap();
        assert_eq!(m.loan_amount(), amount);
    }
}

#[test]
fn test_zero_amount_message() {
    let err = Mortgage::new(dec!(0), "FIXED_5", "MONTHLY", 5).unwrap_err();
    assert_eq!(err, MortgageError::InvalidLoanAmount);
    assert_eq!(err.to_string(), "Loan Amount must be positive.");
}

#[test]
fn test_every_valid_rate_resolves() {
    for rate in MortgageRate::ALL {
        let m = Mortgage::new(AMOUNT, rate.name(), "MONTHLY", 30).unwrap();
        assert_eq!(m.rate(), rate);
        assert_eq!(m.rate().value(), registry::resolve_rate(rate.name()).unwrap());
    }
}

#[test]
fn test_invalid_rate_codes() {
    for code in ["FIXED_2", "VARIABLE_10", "fixed_5", "", "0.0519"] {
        let err = Mortgage::new(AMOUNT, code, "MONTHLY", 30).unwrap_err();
        assert_eq!(err, MortgageError::InvalidRate);
        assert_eq!(err.to_string(), "Rate provided is invalid.");
    }
}

#[test]
fn test_frequencies_resolve_to_periods() {
    let cases = [("MONTHLY", 12), ("BI_WEEKLY", 26), ("WEEKLY", 52)];
    for (code, periods) in cases {
        let m = Mortgage::new(AMOUNT, "FIXED_3", code, 30).unwrap();
        assert_eq!(m.frequency().periods_per_year(), periods);
    }
}

#[test]
fn test_invalid_frequency_codes() {
    for code in ["DAILY", "Monthly", "BIWEEKLY", ""] {
        let err = Mortgage::new(AMOUNT, "FIXED_3", code, 30).unwrap_err();
        assert_eq!(err, MortgageError::InvalidFrequency);
        assert_eq!(err.to_string(), "Frequency provided is invalid.");
    }
}

#[test]
fn test_amortization_terms() {
    for years in VALID_AMORTIZATION {
        assert!(Mortgage::new(AMOUNT, "FIXED_3", "MONTHLY", years).is_ok());
    }
    for years in [0, 3, 7, 11, 26, 35, 40] {
        let err = Mortgage::new(AMOUNT, "FIXED_3", "MONTHLY", years).unwrap_err();
        assert_eq!(err, MortgageError::InvalidAmortization);
        assert_eq!(err.to_string(), "Amortization provided is invalid.");
    }
}

// ===========================================================================
// Mutation
// ===========================================================================

#[test]
fn test_setting_current_values_is_idempotent() {
    let mut m = Mortgage::new(AMOUNT, "FIXED_3", "BI_WEEKLY", 25).unwrap();
    let rendered = m.to_string();
    let record = m.to_record_string();

    m.set_loan_amount(AMOUNT).unwrap();
    m.set_rate("FIXED_3").unwrap();
    m.set_frequency("BI_WEEKLY").unwrap();
    m.set_amortization(25).unwrap();

    assert_eq!(m.to_string(), rendered);
    assert_eq!(m.to_record_string(), record);
}

#[test]
fn test_setters_reject_like_construction() {
    let mut m = Mortgage::new(AMOUNT, "FIXED_3", "MONTHLY", 30).unwrap();

    assert_eq!(m.set_loan_amount(dec!(0)), Err(MortgageError::InvalidLoanAmount));
    assert_eq!(m.set_rate("FIXED_30"), Err(MortgageError::InvalidRate));
    assert_eq!(m.set_frequency("YEARLY"), Err(MortgageError::InvalidFrequency));
    assert_eq!(m.set_amortization(31), Err(MortgageError::InvalidAmortization));

    assert_eq!(m.loan_amount(), AMOUNT);
    assert_eq!(m.rate(), MortgageRate::Fixed3);
    assert_eq!(m.frequency(), PaymentFrequency::Monthly);
    assert_eq!(m.amortization(), 30);
}

#[test]
fn test_mutation_changes_payment() {
    let mut m = Mortgage::new(AMOUNT, "FIXED_3", "MONTHLY", 30).unwrap();
    m.set_rate("FIXED_1").unwrap();
    m.set_amortization(10).unwrap();
    assert_eq!(m.calculate_payment(), dec!(7578.3));
}

// ===========================================================================
// Payment calculation
// ===========================================================================

#[test]
fn test_payment_fixed_1_monthly_10_years() {
    let m = Mortgage::new(AMOUNT, "FIXED_1", "MONTHLY", 10).unwrap();
    assert_eq!(m.calculate_payment(), dec!(7578.3));
}

#[test]
fn test_payment_fixed_3_by_frequency() {
    let monthly = Mortgage::new(AMOUNT, "FIXED_3", "MONTHLY", 30).unwrap();
    let bi_weekly = Mortgage::new(AMOUNT, "FIXED_3", "BI_WEEKLY", 30).unwrap();
    let weekly = Mortgage::new(AMOUNT, "FIXED_3", "WEEKLY", 30).unwrap();

    assert_eq!(monthly.calculate_payment(), dec!(4046.23));
    assert_eq!(bi_weekly.calculate_payment(), dec!(1866.60));
    assert_eq!(weekly.calculate_payment(), dec!(933.11));
}

#[test]
fn test_payment_is_deterministic() {
    let m = Mortgage::new(AMOUNT, "VARIABLE_5", "WEEKLY", 20).unwrap();
    assert_eq!(m.calculate_payment(), m.calculate_payment());
}

#[test]
fn test_payment_falls_with_longer_terms() {
    let payments: Vec<Decimal> = VALID_AMORTIZATION
        .iter()
        .map(|&years| {
            Mortgage::new(AMOUNT, "VARIABLE_3", "MONTHLY", years)
                .unwrap()
                .calculate_payment()
        })
        .collect();

    for pair in payments.windows(2) {
        assert!(pair[0] > pair[1], "{} should exceed {}", pair[0], pair[1]);
    }
}

#[test]
fn test_payments_cover_principal() {
    for rate in MortgageRate::ALL {
        for frequency in PaymentFrequency::ALL {
            let m = Mortgage::new(AMOUNT, rate.name(), frequency.name(), 5).unwrap();
            let total = m.calculate_payment() * Decimal::from(m.total_payments());
            assert!(total > AMOUNT, "{} {}", rate.name(), frequency.name());
        }
    }
}

// ===========================================================================
// Rendering
// ===========================================================================

#[test]
fn test_human_readable_monthly() {
    let m = Mortgage::new(AMOUNT, "FIXED_3", "MONTHLY", 30).unwrap();
    assert_eq!(
        m.to_string(),
        "Mortgage Amount: $682,912.43 Rate: 5.89% Amortization: 30 Frequency: Monthly -- Calculated Payment: $4,046.23"
    );
}

#[test]
fn test_human_readable_bi_weekly_label() {
    let m = Mortgage::new(AMOUNT, "FIXED_3", "BI_WEEKLY", 30).unwrap();
    assert_eq!(
        m.to_string(),
        "Mortgage Amount: $682,912.43 Rate: 5.89% Amortization: 30 Frequency: Bi_weekly -- Calculated Payment: $1,866.60"
    );
}

#[test]
fn test_human_readable_pads_whole_amounts() {
    let m = Mortgage::new(dec!(500000), "FIXED_5", "WEEKLY", 25).unwrap();
    let rendered = m.to_string();
    assert!(rendered.starts_with("Mortgage Amount: $500,000.00 Rate: 5.19% Amortization: 25 Frequency: Weekly"));
}

#[test]
fn test_machine_readable() {
    let m = Mortgage::new(AMOUNT, "FIXED_3", "MONTHLY", 30).unwrap();
    assert_eq!(m.to_record_string(), "[682912.43, 0.0589, 30, 12]");
}

#[test]
fn test_machine_readable_keeps_unrounded_amount() {
    let m = Mortgage::new(dec!(1000.125), "VARIABLE_5", "WEEKLY", 5).unwrap();
    assert_eq!(m.to_record_string(), "[1000.125, 0.0649, 5, 52]");
}

#[test]
fn test_from_raw_matches_typed_construction() {
    let raw = Mortgage::from_raw("682912.43", "FIXED_3", "MONTHLY", "30").unwrap();
    let typed = Mortgage::new(AMOUNT, "FIXED_3", "MONTHLY", 30).unwrap();
    assert_eq!(raw, typed);
    assert_eq!(raw.to_string(), typed.to_string());
}
