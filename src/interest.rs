//! Stateless decimal-arithmetic primitives for annuity loans.
//!
//! Monetary results are rounded to 2 fractional digits, intermediate rate
//! fractions are carried at 20 digits, and every rounding step uses
//! round-half-down (ties toward zero). The mode is load-bearing: schedules
//! are compared cent-for-cent downstream.

use rust_decimal::Decimal;

use crate::decimal::{Money, Rate, RATE_SCALE, ROUNDING};

/// Interest accrued on `balance` over one period under the 30/360 day-count
/// convention: every month counts 30 days, every year 360.
///
/// `annual_rate_fraction` is the *annual* nominal rate as a fraction
/// (0.05 for 5%), not a monthly rate; the 30/360 factor already performs
/// the monthly scaling.
pub fn periodic_interest(balance: Money, annual_rate_fraction: Decimal) -> Money {
    let accrued = annual_rate_fraction * Decimal::from(30) * balance.as_decimal();
    Money::from_decimal(accrued / Decimal::from(360))
}

/// Fixed annuity payment for a loan of `loan_amount` at `nominal_rate`
/// (annual, percentage units) over `duration_in_months` periods.
///
/// annuity = r * P / (1 - (1 + r)^-n) with r the monthly rate.
///
/// `duration_in_months` must be >= 1, and a zero rate makes the denominator
/// degenerate; both are expected to be rejected upstream before this runs.
pub fn annuity_payment(loan_amount: Money, nominal_rate: Rate, duration_in_months: u32) -> Money {
    let monthly_rate = nominal_rate.monthly_fraction();

    let top = monthly_rate * loan_amount.as_decimal();
    let bottom = Decimal::ONE - discount_factor(monthly_rate, duration_in_months);
    Money::from_decimal(top / bottom)
}

/// 1 / (1 + r)^n at 20-digit precision.
fn discount_factor(monthly_rate: Decimal, duration_in_months: u32) -> Decimal {
    let base = Decimal::ONE + monthly_rate;
    let mut compound = Decimal::ONE;
    for _ in 0..duration_in_months {
        compound *= base;
    }
    (Decimal::ONE / compound).round_dp_with_strategy(RATE_SCALE, ROUNDING)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_periodic_interest_30_360() {
        // 0.05 * 30 * 5000 / 360 = 20.8333... -> 20.83
        let interest = periodic_interest(Money::from_major(5000), dec!(0.05));
        assert_eq!(interest, Money::from_str_exact("20.83").unwrap());
    }

    #[test]
    fn test_periodic_interest_small_balance() {
        // 0.05 * 30 * 218.37 / 360 = 0.909875 -> 0.91
        let interest = periodic_interest(Money::from_str_exact("218.37").unwrap(), dec!(0.05));
        assert_eq!(interest, Money::from_str_exact("0.91").unwrap());
    }

    #[test]
    fn test_periodic_interest_zero_balance() {
        let interest = periodic_interest(Money::ZERO, dec!(0.05));
        assert_eq!(interest, Money::ZERO);
    }

    #[test]
    fn test_annuity_payment_24_months() {
        let annuity = annuity_payment(Money::from_major(5000), Rate::from_percent(dec!(5)), 24);
        assert_eq!(annuity, Money::from_str_exact("219.36").unwrap());
    }

    #[test]
    fn test_annuity_payment_single_month() {
        // one period: the whole principal plus one month of interest
        let annuity = annuity_payment(Money::from_major(5000), Rate::from_percent(dec!(5)), 1);
        assert_eq!(annuity, Money::from_str_exact("5020.83").unwrap());
    }

    #[test]
    fn test_rounding_determinism() {
        let a = annuity_payment(Money::from_major(5000), Rate::from_percent(dec!(5)), 24);
        let b = annuity_payment(Money::from_major(5000), Rate::from_percent(dec!(5)), 24);
        assert_eq!(a, b);

        let x = periodic_interest(Money::from_major(5000), dec!(0.05));
        let y = periodic_interest(Money::from_major(5000), dec!(0.05));
        assert_eq!(x, y);
    }

    #[test]
    fn test_discount_factor_one_period() {
        // 1 / 1.00416666666666666667, cut at 20 digits half-down
        let factor = discount_factor(dec!(0.00416666666666666667), 1);
        assert!(factor < Decimal::ONE);
        assert_eq!(factor.round_dp(6), dec!(0.995851));
    }
}
