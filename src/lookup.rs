//! fixed lookup tables for rates, payment frequencies and amortization periods.
//!
//! identifiers are matched exactly (case-sensitive). `lookup` reports an unknown
//! identifier as `None`; the `FromStr` impls translate that into the matching
//! validation error.

use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::decimal::Rate;
use crate::errors::MortgageError;

/// permitted amortization periods in years
pub const VALID_AMORTIZATION: [u32; 6] = [5, 10, 15, 20, 25, 30];

/// check an amortization period against the permitted set
pub fn is_valid_amortization(years: u32) -> bool {
    VALID_AMORTIZATION.contains(&years)
}

/// selectable mortgage rates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MortgageRate {
    #[serde(rename = "FIXED_5")]
    Fixed5,
    #[serde(rename = "FIXED_3")]
    Fixed3,
    #[serde(rename = "FIXED_1")]
    Fixed1,
    #[serde(rename = "VARIABLE_5")]
    Variable5,
    #[serde(rename = "VARIABLE_3")]
    Variable3,
    #[serde(rename = "VARIABLE_1")]
    Variable1,
}

impl MortgageRate {
    pub const ALL: [MortgageRate; 6] = [
        MortgageRate::Fixed5,
        MortgageRate::Fixed3,
        MortgageRate::Fixed1,
        MortgageRate::Variable5,
        MortgageRate::Variable3,
        MortgageRate::Variable1,
    ];

    /// find a rate by identifier, e.g. `FIXED_1`
    pub fn lookup(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|rate| rate.name() == name)
    }

    /// identifier as used in the table
    pub fn name(&self) -> &'static str {
        match self {
            MortgageRate::Fixed5 => "FIXED_5",
            MortgageRate::Fixed3 => "FIXED_3",
            MortgageRate::Fixed1 => "FIXED_1",
            MortgageRate::Variable5 => "VARIABLE_5",
            MortgageRate::Variable3 => "VARIABLE_3",
            MortgageRate::Variable1 => "VARIABLE_1",
        }
    }

    /// annual rate as a fraction
    pub fn value(&self) -> Rate {
        let annual = match self {
            MortgageRate::Fixed5 => dec!(0.0519),
            MortgageRate::Fixed3 => dec!(0.0589),
            MortgageRate::Fixed1 => dec!(0.0599),
            MortgageRate::Variable5 => dec!(0.0649),
            MortgageRate::Variable3 => dec!(0.0669),
            MortgageRate::Variable1 => dec!(0.0679),
        };
        Rate::from_decimal(annual)
    }
}

impl fmt::Display for MortgageRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for MortgageRate {
    type Err = MortgageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::lookup(s).ok_or(MortgageError::InvalidRate)
    }
}

/// how often payments are made
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentFrequency {
    Monthly,
    BiWeekly,
    Weekly,
}

impl PaymentFrequency {
    pub const ALL: [PaymentFrequency; 3] = [
        PaymentFrequency::Monthly,
        PaymentFrequency::BiWeekly,
        PaymentFrequency::Weekly,
    ];

    /// find a frequency by identifier, e.g. `BI_WEEKLY`
    pub fn lookup(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|frequency| frequency.name() == name)
    }

    pub fn name(&self) -> &'static str {
        match self {
            PaymentFrequency::Monthly => "MONTHLY",
            PaymentFrequency::BiWeekly => "BI_WEEKLY",
            PaymentFrequency::Weekly => "WEEKLY",
        }
    }

    pub fn periods_per_year(&self) -> u32 {
        match self {
            PaymentFrequency::Monthly => 12,
            PaymentFrequency::BiWeekly => 26,
            PaymentFrequency::Weekly => 52,
        }
    }

    /// identifier with underscores as spaces, title-cased (`BI_WEEKLY` -> `Bi Weekly`)
    pub fn display_name(&self) -> String {
        self.name()
            .split('_')
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => {
                        first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect()
                    }
                    None => String::new(),
                }
            })
            .collect::<Vec<String>>()
            .join(" ")
    }
}

impl fmt::Display for PaymentFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for PaymentFrequency {
    type Err = MortgageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::lookup(s).ok_or(MortgageError::InvalidFrequency)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_table() {
        let expected = [
            ("FIXED_5", dec!(0.0519)),
            ("FIXED_3", dec!(0.0589)),
            ("FIXED_1", dec!(0.0599)),
            ("VARIABLE_5", dec!(0.0649)),
            ("VARIABLE_3", dec!(0.0669)),
            ("VARIABLE_1", dec!(0.0679)),
        ];

        assert_eq!(expected.len(), MortgageRate::ALL.len());
        for (name, annual) in expected {
            let rate = MortgageRate::lookup(name).unwrap();
            assert_eq!(rate.value().as_decimal(), annual, "{}", name);
        }
    }

    #[test]
    fn test_rate_names_round_trip() {
        for rate in MortgageRate::ALL {
            assert_eq!(MortgageRate::lookup(rate.name()), Some(rate));
            assert_eq!(rate.to_string(), rate.name());
        }
    }

    #[test]
    fn test_unknown_rate() {
        assert_eq!(MortgageRate::lookup("INVALID_RATE"), None);
        assert_eq!(MortgageRate::lookup("fixed_1"), None);
        assert_eq!(MortgageRate::lookup(""), None);
        assert_eq!("FIXED_2".parse::<MortgageRate>(), Err(MortgageError::InvalidRate));
    }

    #[test]
    fn test_frequency_table() {
        assert_eq!(PaymentFrequency::lookup("MONTHLY").unwrap().periods_per_year(), 12);
        assert_eq!(PaymentFrequency::lookup("BI_WEEKLY").unwrap().periods_per_year(), 26);
        assert_eq!(PaymentFrequency::lookup("WEEKLY").unwrap().periods_per_year(), 52);
        assert_eq!(
            "DAILY".parse::<PaymentFrequency>(),
            Err(MortgageError::InvalidFrequency)
        );
    }

    #[test]
    fn test_frequency_display_name() {
        assert_eq!(PaymentFrequency::Monthly.display_name(), "Monthly");
        assert_eq!(PaymentFrequency::BiWeekly.display_name(), "Bi Weekly");
        assert_eq!(PaymentFrequency::Weekly.display_name(), "Weekly");
    }

    #[test]
    fn test_amortization_set() {
        for years in [5, 10, 15, 20, 25, 30] {
            assert!(is_valid_amortization(years));
        }
        for years in [0, 1, 4, 12, 35, 40] {
            assert!(!is_valid_amortization(years));
        }
    }

    #[test]
    fn test_serde_uses_identifiers() {
        assert_eq!(serde_json::to_string(&MortgageRate::Variable5).unwrap(), "\"VARIABLE_5\"");
        assert_eq!(serde_json::to_string(&PaymentFrequency::BiWeekly).unwrap(), "\"BI_WEEKLY\"");
    }
}
