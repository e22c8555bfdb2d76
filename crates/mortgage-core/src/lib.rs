pub mod error;
pub mod format;
pub mod mortgage;
pub mod registry;
pub mod types;

pub use error::{InvalidLookup, MortgageError};
pub use mortgage::{summarize, Mortgage, PaymentSummary};
pub use registry::{MortgageRate, PaymentFrequency, VALID_AMORTIZATION};
pub use types::*;

/// Standard result type for all mortgage operations
pub type MortgageResult<T> = Result<T, MortgageError>;
