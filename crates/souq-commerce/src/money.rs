//! Money and currency types.
//!
//! All amounts are stored in piasters (1/100 EGP) as integers; EGP is the
//! base currency and every piece of cart arithmetic happens in it.
//! Conversion to other currencies uses a fixed rate table and exists for
//! display only — it is lossy by design and must never feed back into a
//! stored amount.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Mul, Sub};

/// Currencies the storefront can display prices in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    /// Egyptian pound. Base currency: all stored amounts are EGP.
    #[default]
    EGP,
    /// US dollar (display only).
    USD,
    /// Euro (display only).
    EUR,
}

impl Currency {
    /// Get the currency code (e.g., "EGP").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::EGP => "EGP",
            Currency::USD => "USD",
            Currency::EUR => "EUR",
        }
    }

    /// Get the currency symbol (e.g., "E£").
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::EGP => "E\u{00a3}",
            Currency::USD => "$",
            Currency::EUR => "\u{20ac}",
        }
    }

    /// Whole EGP per one unit of this currency.
    ///
    /// Fixed table, not live rates: `{EGP: 1, USD: 30, EUR: 32}`.
    pub fn rate_to_base(&self) -> i64 {
        match self {
            Currency::EGP => 1,
            Currency::USD => 30,
            Currency::EUR => 32,
        }
    }

    /// Parse a currency code string.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_uppercase().as_str() {
            "EGP" => Some(Currency::EGP),
            "USD" => Some(Currency::USD),
            "EUR" => Some(Currency::EUR),
            _ => None,
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A monetary value in the base currency.
///
/// Stored in piasters (1/100 EGP) to avoid floating-point precision issues
/// in cart arithmetic.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub struct Money {
    /// Amount in piasters.
    pub piasters: i64,
}

impl Money {
    /// Create a new Money value from piasters.
    pub const fn new(piasters: i64) -> Self {
        Self { piasters }
    }

    /// Create a Money value from a decimal EGP amount.
    ///
    /// ```
    /// use souq_commerce::money::Money;
    /// let price = Money::from_pounds(49.99);
    /// assert_eq!(price.piasters, 4999);
    /// ```
    pub fn from_pounds(amount: f64) -> Self {
        Self::new((amount * 100.0).round() as i64)
    }

    /// Create a zero amount.
    pub const fn zero() -> Self {
        Self::new(0)
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.piasters == 0
    }

    /// Check if this is positive.
    pub fn is_positive(&self) -> bool {
        self.piasters > 0
    }

    /// Try to multiply by a scalar, returning None on overflow.
    ///
    /// The cart checks `price * stock` through this at add time, which
    /// bounds every line total a cart can reach.
    pub fn try_multiply(&self, factor: i64) -> Option<Money> {
        self.piasters.checked_mul(factor).map(Money::new)
    }

    /// Multiply by a decimal factor (e.g., for tax rates), rounding
    /// half-up to the piaster.
    pub fn multiply_decimal(&self, factor: f64) -> Money {
        Money::new((self.piasters as f64 * factor).round() as i64)
    }

    /// Sum an iterator of Money values, saturating at the i64 bounds.
    pub fn sum(iter: impl Iterator<Item = Money>) -> Money {
        iter.fold(Money::zero(), |acc, m| {
            Money::new(acc.piasters.saturating_add(m.piasters))
        })
    }

    /// Convert to a decimal EGP value.
    pub fn to_pounds(&self) -> f64 {
        self.piasters as f64 / 100.0
    }

    /// Display-only conversion into the given currency.
    ///
    /// Flat divide by the static rate; approximate on purpose. Never use
    /// the result in arithmetic.
    pub fn converted(&self, currency: Currency) -> f64 {
        self.to_pounds() / currency.rate_to_base() as f64
    }

    /// Format in the given currency (e.g., "$53.33").
    pub fn display_in(&self, currency: Currency) -> String {
        format!("{}{:.2}", currency.symbol(), self.converted(currency))
    }

    /// Format in the base currency (e.g., "E£1600.00").
    pub fn display(&self) -> String {
        self.display_in(Currency::EGP)
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, other: Money) -> Money {
        Money::new(self.piasters.saturating_add(other.piasters))
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, other: Money) -> Money {
        Money::new(self.piasters.saturating_sub(other.piasters))
    }
}

impl Mul<i64> for Money {
    type Output = Money;

    fn mul(self, factor: i64) -> Money {
        Money::new(self.piasters.saturating_mul(factor))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_from_piasters() {
        let m = Money::new(4999);
        assert_eq!(m.piasters, 4999);
    }

    #[test]
    fn test_money_from_pounds() {
        let m = Money::from_pounds(49.99);
        assert_eq!(m.piasters, 4999);
    }

    #[test]
    fn test_money_to_pounds() {
        let m = Money::new(4999);
        assert!((m.to_pounds() - 49.99).abs() < 0.001);
    }

    #[test]
    fn test_money_display_base() {
        let m = Money::new(160_000);
        assert_eq!(m.display(), "E\u{00a3}1600.00");
    }

    #[test]
    fn test_display_conversion_uses_flat_rates() {
        let m = Money::from_pounds(1600.0);
        // 1600 / 30 = 53.33..., 1600 / 32 = 50.00
        assert_eq!(m.display_in(Currency::USD), "$53.33");
        assert_eq!(m.display_in(Currency::EUR), "\u{20ac}50.00");
    }

    #[test]
    fn test_conversion_does_not_touch_stored_amount() {
        let m = Money::from_pounds(1600.0);
        let _ = m.converted(Currency::USD);
        assert_eq!(m.piasters, 160_000);
    }

    #[test]
    fn test_money_addition() {
        let a = Money::new(1000);
        let b = Money::new(500);
        assert_eq!((a + b).piasters, 1500);
    }

    #[test]
    fn test_money_multiply() {
        let m = Money::new(1000);
        assert_eq!((m * 2).piasters, 2000);
    }

    #[test]
    fn test_multiply_decimal_rounds() {
        // 14% VAT on E£1600.00
        let m = Money::new(160_000);
        assert_eq!(m.multiply_decimal(0.14).piasters, 22_400);

        // Rounding half-up at the piaster
        let m = Money::new(105);
        assert_eq!(m.multiply_decimal(0.14).piasters, 15); // 14.7 -> 15
    }

    #[test]
    fn test_try_multiply_overflow() {
        let m = Money::new(i64::MAX);
        assert!(m.try_multiply(2).is_none());
    }

    #[test]
    fn test_currency_from_code() {
        assert_eq!(Currency::from_code("EGP"), Some(Currency::EGP));
        assert_eq!(Currency::from_code("usd"), Some(Currency::USD));
        assert_eq!(Currency::from_code("GBP"), None);
    }
}
