//! Prices.
//!
//! Amounts are held in the currency's minor unit so that `29.99` stays
//! exactly `2999` cents no matter how often it is displayed.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Currencies a catalog can price in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    Usd,
    Eur,
    Gbp,
    Jpy,
}

impl Currency {
    /// Symbol printed before the amount.
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Usd => "$",
            Self::Eur => "\u{20ac}",
            Self::Gbp => "\u{00a3}",
            Self::Jpy => "\u{00a5}",
        }
    }

    /// Digits after the decimal point. Yen has no minor unit.
    pub fn minor_digits(&self) -> u32 {
        match self {
            Self::Jpy => 0,
            _ => 2,
        }
    }

    fn minor_per_major(&self) -> i64 {
        10_i64.pow(self.minor_digits())
    }
}

/// An amount in a currency's minor unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in the smallest currency unit (cents for USD).
    pub amount_cents: i64,
    #[serde(default)]
    pub currency: Currency,
}

impl Money {
    pub fn new(amount_cents: i64, currency: Currency) -> Self {
        Self {
            amount_cents,
            currency,
        }
    }

    /// US dollars from cents.
    ///
    /// ```
    /// use storefront_commerce::Money;
    /// assert_eq!(Money::usd(2999).display(), "$29.99");
    /// ```
    pub fn usd(amount_cents: i64) -> Self {
        Self::new(amount_cents, Currency::Usd)
    }

    /// Amount without the symbol, e.g. `"29.99"`.
    pub fn display_amount(&self) -> String {
        let per_major = self.currency.minor_per_major();
        let sign = if self.amount_cents < 0 { "-" } else { "" };
        let abs = self.amount_cents.unsigned_abs();
        let major = abs / per_major as u64;

        match self.currency.minor_digits() {
            0 => format!("{}{}", sign, major),
            digits => format!(
                "{}{}.{:0width$}",
                sign,
                major,
                abs % per_major as u64,
                width = digits as usize
            ),
        }
    }

    /// Symbol and amount, e.g. `"$29.99"`.
    pub fn display(&self) -> String {
        format!("{}{}", self.currency.symbol(), self.display_amount())
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_usd() {
        assert_eq!(Money::usd(2999).display(), "$29.99");
        assert_eq!(Money::usd(6999).to_string(), "$69.99");
        assert_eq!(Money::usd(5000).display_amount(), "50.00");
        assert_eq!(Money::usd(5).display_amount(), "0.05");
    }

    #[test]
    fn test_display_other_currencies() {
        assert_eq!(Money::new(100, Currency::Jpy).display(), "\u{00a5}100");
        assert_eq!(Money::new(1250, Currency::Eur).display(), "\u{20ac}12.50");
    }

    #[test]
    fn test_display_negative() {
        assert_eq!(Money::usd(-150).display_amount(), "-1.50");
    }

    #[test]
    fn test_currency_defaults_when_missing() {
        let m: Money = serde_json::from_str(r#"{"amount_cents": 3999}"#).unwrap();
        assert_eq!(m, Money::usd(3999));
    }

    #[test]
    fn test_currency_code_serde() {
        let m: Money = serde_json::from_str(r#"{"amount_cents": 500, "currency": "GBP"}"#).unwrap();
        assert_eq!(m.currency, Currency::Gbp);
        assert_eq!(serde_json::to_string(&Currency::Usd).unwrap(), "\"USD\"");
    }
}
