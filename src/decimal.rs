use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Money type with 8 decimal places of storage precision
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
pub struct Money(Decimal);

impl Money {
    pub const ZERO: Money = Money(Decimal::ZERO);

    /// create from decimal
    pub fn from_decimal(d: Decimal) -> Self {
        Money(d.round_dp(8))
    }

    /// create from string with exact parsing
    pub fn from_str_exact(s: &str) -> Result<Self, rust_decimal::Error> {
        Ok(Money(Decimal::from_str(s)?.round_dp(8)))
    }

    /// create from whole currency units
    pub fn from_major(amount: i64) -> Self {
        Money(Decimal::from(amount))
    }

    /// create from minor units, e.g. cents with scale 2. scale is at most 28.
    pub fn from_minor(amount: i64, scale: u32) -> Result<Self, rust_decimal::Error> {
        Ok(Money(Decimal::try_new(amount, scale)?.round_dp(8)))
    }

    /// get underlying decimal
    pub fn as_decimal(&self) -> Decimal {
        self.0
    }

    /// round to cents, half away from zero
    pub fn round_cents(&self) -> Self {
        Money(self.0.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero))
    }

    /// strictly greater than zero
    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    /// render as `$1,234.56`
    pub fn to_currency_string(&self) -> String {
        let cents = self.round_cents().0;
        let text = format!("{:.2}", cents.abs());
        let (whole, fraction) = text.split_once('.').unwrap_or((text.as_str(), "00"));
        let sign = if cents.is_sign_negative() && !cents.is_zero() { "-" } else { "" };
        format!("{}${}.{}", sign, group_thousands(whole), fraction)
    }
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Money {
    type Err = rust_decimal::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Money::from_str_exact(s)
    }
}

/// annual interest rate as a fraction (0.0599 for 5.99%)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
pub struct Rate(Decimal);

impl Rate {
    pub const ZERO: Rate = Rate(Decimal::ZERO);

    /// create from decimal (e.g., 0.05 for 5%)
    pub const fn from_decimal(d: Decimal) -> Self {
        Rate(d)
    }

    /// get as decimal
    pub fn as_decimal(&self) -> Decimal {
        self.0
    }

    /// get as percentage
    pub fn as_percentage(&self) -> Decimal {
        self.0 * Decimal::from(100)
    }

    /// rate for one of `periods` equal periods per year
    pub fn per_period(&self, periods: u32) -> Rate {
        Rate(self.0 / Decimal::from(periods))
    }

    /// render as `5.99%`
    pub fn to_percent_string(&self) -> String {
        let pct = self
            .as_percentage()
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        format!("{:.2}%", pct)
    }
}

impl fmt::Display for Rate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.to_percent_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_money_precision() {
        let m = Money::from_str_exact("100.123456789").unwrap();
        assert_eq!(m.to_string(), "100.12345679"); // rounded to 8 places
    }

    #[test]
    fn test_money_keeps_input_scale() {
        assert_eq!(Money::from_str_exact("682912.43").unwrap().to_string(), "682912.43");
        assert_eq!(Money::from_major(500_000).to_string(), "500000");
        assert_eq!(Money::from_minor(68291243, 2).unwrap(), Money::from_str_exact("682912.43").unwrap());
    }

    #[test]
    fn test_from_minor_scale_limit() {
        assert_eq!(Money::from_minor(1, 8).unwrap().as_decimal(), dec!(0.00000001));
        assert_eq!(Money::from_minor(1, 28).unwrap(), Money::ZERO);
        assert!(Money::from_minor(1, 29).is_err());
        assert!(Money::from_minor(500, u32::MAX).is_err());
    }

    #[test]
    fn test_round_cents_half_up() {
        assert_eq!(Money::from_decimal(dec!(1.005)).round_cents().as_decimal(), dec!(1.01));
        assert_eq!(Money::from_decimal(dec!(1.015)).round_cents().as_decimal(), dec!(1.02));
        assert_eq!(Money::from_decimal(dec!(1.0049)).round_cents().as_decimal(), dec!(1.00));
    }

    #[test]
    fn test_positive() {
        assert!(Money::from_major(1).is_positive());
        assert!(!Money::ZERO.is_positive());
        assert!(!Money::from_major(-1).is_positive());
    }

    #[test]
    fn test_currency_string() {
        assert_eq!(Money::from_decimal(dec!(682912.43)).to_currency_string(), "$682,912.43");
        assert_eq!(Money::from_decimal(dec!(4046.234155)).to_currency_string(), "$4,046.23");
        assert_eq!(Money::from_major(1_000_000).to_currency_string(), "$1,000,000.00");
        assert_eq!(Money::from_decimal(dec!(999.995)).to_currency_string(), "$1,000.00");
        assert_eq!(Money::from_decimal(dec!(12.5)).to_currency_string(), "$12.50");
        assert_eq!(Money::ZERO.to_currency_string(), "$0.00");
        assert_eq!(Money::from_major(-1234).to_currency_string(), "-$1,234.00");
    }

    #[test]
    fn test_percent_string() {
        assert_eq!(Rate::from_decimal(dec!(0.0589)).to_percent_string(), "5.89%");
        assert_eq!(Rate::from_decimal(dec!(0.0649)).to_string(), "6.49%");
        assert_eq!(Rate::from_decimal(dec!(0.05)).to_percent_string(), "5.00%");
    }

    #[test]
    fn test_per_period() {
        let annual = Rate::from_decimal(dec!(0.0599));
        assert_eq!(annual.per_period(12).as_decimal(), dec!(0.0599) / dec!(12));
    }
}
