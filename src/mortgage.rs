use rust_decimal::{Decimal, RoundingStrategy};
use std::fmt;
use tracing::{debug, trace};

use crate::config::MortgageTerms;
use crate::decimal::{Money, Rate};
use crate::errors::{MortgageError, Result};
use crate::lookup::{is_valid_amortization, MortgageRate, PaymentFrequency};

/// a single mortgage record.
///
/// every field is validated on construction and on each write; a rejected write
/// leaves the record exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mortgage {
    loan_amount: Money,
    rate: MortgageRate,
    frequency: PaymentFrequency,
    amortization: u32,
}

impl Mortgage {
    /// create a mortgage from a loan amount and table identifiers.
    ///
    /// checks run in field order (loan amount, rate, frequency, amortization)
    /// and the first failure is returned.
    pub fn new(loan_amount: Money, rate: &str, frequency: &str, amortization: u32) -> Result<Self> {
        Ok(Self {
            loan_amount: validate_loan_amount(loan_amount)?,
            rate: validate_rate(rate)?,
            frequency: validate_frequency(frequency)?,
            amortization: validate_amortization(amortization)?,
        })
    }

    /// create a mortgage from configuration terms
    pub fn from_terms(terms: &MortgageTerms) -> Result<Self> {
        Self::new(terms.loan_amount, &terms.rate, &terms.frequency, terms.amortization)
    }

    /// current terms in constructor form
    pub fn terms(&self) -> MortgageTerms {
        MortgageTerms {
            loan_amount: self.loan_amount,
            rate: self.rate.name().to_string(),
            frequency: self.frequency.name().to_string(),
            amortization: self.amortization,
        }
    }

    pub fn loan_amount(&self) -> Money {
        self.loan_amount
    }

    pub fn set_loan_amount(&mut self, loan_amount: Money) -> Result<()> {
        self.loan_amount = validate_loan_amount(loan_amount)?;
        Ok(())
    }

    pub fn rate(&self) -> MortgageRate {
        self.rate
    }

    /// replace the rate by table identifier, e.g. `VARIABLE_3`
    pub fn set_rate(&mut self, rate: &str) -> Result<()> {
        self.rate = validate_rate(rate)?;
        Ok(())
    }

    pub fn frequency(&self) -> PaymentFrequency {
        self.frequency
    }

    /// replace the payment frequency by table identifier, e.g. `WEEKLY`
    pub fn set_frequency(&mut self, frequency: &str) -> Result<()> {
        self.frequency = validate_frequency(frequency)?;
        Ok(())
    }

    /// amortization period in years
    pub fn amortization(&self) -> u32 {
        self.amortization
    }

    pub fn set_amortization(&mut self, amortization: u32) -> Result<()> {
        self.amortization = validate_amortization(amortization)?;
        Ok(())
    }

    /// annual rate divided over the payment periods in a year
    pub fn periodic_rate(&self) -> Rate {
        self.rate.value().per_period(self.frequency.periods_per_year())
    }

    /// number of payments over the whole amortization period
    pub fn total_payments(&self) -> u32 {
        self.frequency.periods_per_year() * self.amortization
    }

    /// fixed periodic payment that fully amortizes the loan, rounded to cents
    pub fn calculate_payment(&self) -> Money {
        let periodic_rate = self.periodic_rate();
        let periods = self.total_payments();
        let payment = annuity_payment(self.loan_amount, periodic_rate, periods);

        trace!(
            periodic_rate = %periodic_rate.as_decimal(),
            periods,
            payment = %payment,
            "calculated mortgage payment"
        );

        payment
    }

    /// constructor-style rendering of the raw values, e.g.
    /// `Mortgage(682912.43, 0.0599, 12, 30)`
    pub fn to_debug_string(&self) -> String {
        format!(
            "Mortgage({}, {}, {}, {})",
            self.loan_amount,
            self.rate.value().as_decimal(),
            self.frequency.periods_per_year(),
            self.amortization
        )
    }

    /// get json representation of current state
    pub fn to_json_pretty(&self) -> String {
        use crate::serialization::MortgageView;

        let view = MortgageView::from_mortgage(self);
        serde_json::to_string_pretty(&view).unwrap_or_else(|e| format!("JSON error: {}", e))
    }

    /// short alias for json output
    pub fn json(&self) -> String {
        self.to_json_pretty()
    }
}

impl fmt::Display for Mortgage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Mortgage Amount: {}", self.loan_amount.to_currency_string())?;
        writeln!(f, "Rate: {}", self.rate.value().to_percent_string())?;
        writeln!(f, "Amortization: {}", self.amortization)?;
        write!(
            f,
            "Frequency: {} -- Calculated Payment: {}",
            self.frequency.display_name(),
            self.calculate_payment().to_currency_string()
        )
    }
}

impl TryFrom<MortgageTerms> for Mortgage {
    type Error = MortgageError;

    fn try_from(terms: MortgageTerms) -> Result<Self> {
        Mortgage::from_terms(&terms)
    }
}

fn validate_loan_amount(loan_amount: Money) -> Result<Money> {
    if !loan_amount.is_positive() {
        debug!(field = "loan_amount", value = %loan_amount, "rejected mortgage field");
        return Err(MortgageError::InvalidLoanAmount);
    }
    Ok(loan_amount)
}

fn validate_rate(rate: &str) -> Result<MortgageRate> {
    MortgageRate::lookup(rate).ok_or_else(|| {
        debug!(field = "rate", value = rate, "rejected mortgage field");
        MortgageError::InvalidRate
    })
}

fn validate_frequency(frequency: &str) -> Result<PaymentFrequency> {
    PaymentFrequency::lookup(frequency).ok_or_else(|| {
        debug!(field = "frequency", value = frequency, "rejected mortgage field");
        MortgageError::InvalidFrequency
    })
}

fn validate_amortization(amortization: u32) -> Result<u32> {
    if !is_valid_amortization(amortization) {
        debug!(field = "amortization", value = amortization, "rejected mortgage field");
        return Err(MortgageError::InvalidAmortization);
    }
    Ok(amortization)
}

/// P * r / (1 - (1 + r)^-n), rounded half-up to cents
fn annuity_payment(principal: Money, periodic_rate: Rate, periods: u32) -> Money {
    if periods == 0 {
        return principal;
    }

    let r = periodic_rate.as_decimal();
    let payment = if r.is_zero() {
        principal.as_decimal() / Decimal::from(periods)
    } else {
        let mut compound = Decimal::ONE;
        let base = Decimal::ONE + r;
        for _ in 0..periods {
            compound *= base;
        }

        principal.as_decimal() * r / (Decimal::ONE - Decimal::ONE / compound)
    };

    Money::from_decimal(payment.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero))
}
