use thiserror::Error;

/// Rejected input for a mortgage record. One variant per validated field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MortgageError {
    #[error("Loan Amount must be positive.")]
    InvalidLoanAmount,

    #[error("Rate provided is invalid.")]
    InvalidRate,

    #[error("Frequency provided is invalid.")]
    InvalidFrequency,

    #[error("Amortization provided is invalid.")]
    InvalidAmortization,
}

/// A name that is not a key of one of the registry tables.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid lookup: '{name}' is not a key of the {table} table")]
pub struct InvalidLookup {
    pub table: &'static str,
    pub name: String,
}
