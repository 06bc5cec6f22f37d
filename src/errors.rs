use thiserror::Error;

/// validation failure raised by mortgage construction and mutation
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
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

pub type Result<T> = std::result::Result<T, MortgageError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(MortgageError::InvalidLoanAmount.to_string(), "Loan Amount must be positive.");
        assert_eq!(MortgageError::InvalidRate.to_string(), "Rate provided is invalid.");
        assert_eq!(MortgageError::InvalidFrequency.to_string(), "Frequency provided is invalid.");
        assert_eq!(
            MortgageError::InvalidAmortization.to_string(),
            "Amortization provided is invalid."
        );
    }
}
