pub mod config;
pub mod decimal;
pub mod errors;
pub mod lookup;
pub mod mortgage;
pub mod serialization;

// re-export key types
pub use config::MortgageTerms;
pub use decimal::{Money, Rate};
pub use errors::{MortgageError, Result};
pub use lookup::{is_valid_amortization, MortgageRate, PaymentFrequency, VALID_AMORTIZATION};
pub use mortgage::Mortgage;
pub use serialization::MortgageView;

// re-export external dependencies that users will need
pub use rust_decimal::Decimal;
