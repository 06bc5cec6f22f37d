use serde::{Deserialize, Serialize};

use crate::decimal::Money;
use crate::errors::Result;
use crate::mortgage::Mortgage;

/// unvalidated mortgage terms, in the same shape the constructor takes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MortgageTerms {
    pub loan_amount: Money,
    pub rate: String,
    pub frequency: String,
    pub amortization: u32,
}

impl MortgageTerms {
    pub fn new(
        loan_amount: Money,
        rate: impl Into<String>,
        frequency: impl Into<String>,
        amortization: u32,
    ) -> Self {
        Self {
            loan_amount,
            rate: rate.into(),
            frequency: frequency.into(),
            amortization,
        }
    }

    /// parse terms from a json document. field values are not validated here.
    pub fn from_json(json: &str) -> std::result::Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> std::result::Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// validate into a mortgage record
    pub fn build(&self) -> Result<Mortgage> {
        Mortgage::from_terms(self)
    }
}
