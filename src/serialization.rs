/// serialization support for mortgages
use serde::{Deserialize, Serialize};

use crate::decimal::{Money, Rate};
use crate::lookup::{MortgageRate, PaymentFrequency};
use crate::mortgage::Mortgage;

/// serializable snapshot of a mortgage and its computed payment
#[derive(Debug, Serialize, Deserialize)]
pub struct MortgageView {
    pub loan_amount: Money,
    pub rate: MortgageRate,
    pub rate_value: Rate,
    pub frequency: PaymentFrequency,
    pub periods_per_year: u32,
    pub amortization: u32,
    pub payment: Money,
}

impl MortgageView {
    pub fn from_mortgage(mortgage: &Mortgage) -> Self {
        MortgageView {
            loan_amount: mortgage.loan_amount(),
            rate: mortgage.rate(),
            rate_value: mortgage.rate().value(),
            frequency: mortgage.frequency(),
            periods_per_year: mortgage.frequency().periods_per_year(),
            amortization: mortgage.amortization(),
            payment: mortgage.calculate_payment(),
        }
    }
}
