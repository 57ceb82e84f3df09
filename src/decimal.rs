use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};
use std::str::FromStr;

/// monetary amounts carry 2 fractional digits
pub const MONEY_SCALE: u32 = 2;

/// intermediate rate fractions carry 20 fractional digits
pub const RATE_SCALE: u32 = 20;

/// the crate-wide rounding mode: ties round toward zero (round-half-down)
pub const ROUNDING: RoundingStrategy = RoundingStrategy::MidpointTowardZero;

/// Money type with 2 decimal places, rounded half-down
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub struct Money(Decimal);

impl Money {
    pub const ZERO: Money = Money(Decimal::ZERO);

    /// create from decimal
    pub fn from_decimal(d: Decimal) -> Self {
        Money(d.round_dp_with_strategy(MONEY_SCALE, ROUNDING))
    }

    /// create from string with exact parsing
    pub fn from_str_exact(s: &str) -> Result<Self, rust_decimal::Error> {
        Ok(Money(
            Decimal::from_str(s)?.round_dp_with_strategy(MONEY_SCALE, ROUNDING),
        ))
    }

    /// create from integer amount (dollars, euros, etc)
    pub fn from_major(amount: i64) -> Self {
        Money(Decimal::from(amount))
    }

    /// get underlying decimal
    pub fn as_decimal(&self) -> Decimal {
        self.0
    }

    /// check if zero
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// check if strictly positive
    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    /// check if strictly negative
    pub fn is_negative(&self) -> bool {
        self.0 < Decimal::ZERO
    }

    /// absolute value
    pub fn abs(&self) -> Self {
        Money(self.0.abs())
    }
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

impl From<Decimal> for Money {
    fn from(d: Decimal) -> Self {
        Money::from_decimal(d)
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, other: Money) -> Money {
        Money((self.0 + other.0).round_dp_with_strategy(MONEY_SCALE, ROUNDING))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Money) {
        self.0 = (self.0 + other.0).round_dp_with_strategy(MONEY_SCALE, ROUNDING);
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, other: Money) -> Money {
        Money((self.0 - other.0).round_dp_with_strategy(MONEY_SCALE, ROUNDING))
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Money) {
        self.0 = (self.0 - other.0).round_dp_with_strategy(MONEY_SCALE, ROUNDING);
    }
}

/// nominal annual interest rate, expressed in percentage units (5 means 5%)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub struct Rate(Decimal);

impl Rate {
    /// create from percentage units (e.g. dec!(5) for 5%)
    pub fn from_percent(p: Decimal) -> Self {
        Rate(p)
    }

    /// get as percentage units
    pub fn as_percent(&self) -> Decimal {
        self.0
    }

    /// annual rate as a fraction (percent / 100), carried at 20 digits
    pub fn annual_fraction(&self) -> Decimal {
        (self.0 / Decimal::from(100)).round_dp_with_strategy(RATE_SCALE, ROUNDING)
    }

    /// monthly rate as a fraction (percent / 1200), carried at 20 digits
    pub fn monthly_fraction(&self) -> Decimal {
        (self.0 / Decimal::from(1200)).round_dp_with_strategy(RATE_SCALE, ROUNDING)
    }
}

impl fmt::Display for Rate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

impl From<Decimal> for Rate {
    fn from(d: Decimal) -> Self {
        Rate::from_percent(d)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_money_rounds_to_two_places() {
        let m = Money::from_decimal(dec!(100.1284));
        assert_eq!(m.to_string(), "100.13");
    }

    #[test]
    fn test_money_ties_round_toward_zero() {
        // half-down, not the conventional half-up
        assert_eq!(Money::from_decimal(dec!(20.835)).to_string(), "20.83");
        assert_eq!(Money::from_decimal(dec!(1.005)).to_string(), "1.00");
        assert_eq!(Money::from_decimal(dec!(-1.005)).to_string(), "-1.00");
        // above the midpoint still rounds away
        assert_eq!(Money::from_decimal(dec!(20.8351)).to_string(), "20.84");
    }

    #[test]
    fn test_money_arithmetic() {
        let a = Money::from_str_exact("198.53").unwrap();
        let b = Money::from_str_exact("20.83").unwrap();
        assert_eq!(a + b, Money::from_str_exact("219.36").unwrap());
        assert_eq!(a - b, Money::from_str_exact("177.70").unwrap());

        let mut c = Money::ZERO;
        c += a;
        c -= b;
        assert_eq!(c, Money::from_str_exact("177.70").unwrap());
    }

    #[test]
    fn test_rate_fractions() {
        let rate = Rate::from_percent(dec!(5));
        assert_eq!(rate.annual_fraction(), dec!(0.05));
        // 5 / 1200 is periodic, cut at 20 digits
        assert_eq!(rate.monthly_fraction(), dec!(0.00416666666666666667));
    }

    #[test]
    fn test_money_sign_checks() {
        assert!(Money::from_major(1).is_positive());
        assert!((Money::ZERO - Money::from_major(1)).is_negative());
        assert!(Money::ZERO.is_zero());
        assert!(!Money::ZERO.is_positive());
        assert_eq!(
            (Money::ZERO - Money::from_major(2)).abs(),
            Money::from_major(2)
        );
    }
}
