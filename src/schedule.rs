//! Turns one validated loan request into the ordered repayment plan.
//!
//! The annuity constant is computed once; each period then splits it into
//! interest and principal, chaining the outstanding balance forward. The
//! loop is governed by the balance reaching zero, not by the requested
//! duration; the duration only shapes the annuity formula.

use chrono::Months;

use crate::decimal::Money;
use crate::errors::{Result, ScheduleError};
use crate::interest::{annuity_payment, periodic_interest};
use crate::types::{LoanRequest, MonthlyRepayment};

/// Hard bound on schedule length. The balance invariant terminates the loop
/// long before this for any sane request; the cap only guards against a
/// non-converging configuration (e.g. an annuity below the running interest)
/// that upstream validation should have rejected.
const MAX_PERIODS: usize = 3_600;

/// Generate the month-by-month repayment plan for `request`.
///
/// Fails with [`ScheduleError::InvalidRequest`] when any of the four
/// mandatory fields is absent; the guard is a single combined check and the
/// message does not say which field was missing. All other degenerate
/// inputs (zero rate, zero duration) are the transport layer's to reject.
pub fn generate_plan(request: &LoanRequest) -> Result<Vec<MonthlyRepayment>> {
    let (Some(duration), Some(rate), Some(amount), Some(start)) = (
        request.duration_in_month,
        request.nominal_rate,
        request.loan_amount,
        request.start_date,
    ) else {
        return Err(ScheduleError::InvalidRequest);
    };

    let annuity = annuity_payment(amount, rate, duration);
    let annual_fraction = rate.annual_fraction();

    let interest = periodic_interest(amount, annual_fraction);
    let principal = evaluate_principal(annuity, interest, amount);

    let first = MonthlyRepayment {
        borrower_payment_amount: principal + interest,
        date: start,
        interest,
        principal,
        initial_outstanding_principal: amount,
        remaining_outstanding_principal: amount - principal,
    };

    let mut remaining = first.remaining_outstanding_principal;
    let mut due_date = first.date;

    let mut plan = Vec::with_capacity(duration as usize);
    plan.push(first);

    while remaining > Money::ZERO && plan.len() < MAX_PERIODS {
        due_date = due_date + Months::new(1);

        let initial = remaining;
        let interest = periodic_interest(initial, annual_fraction);
        let principal = evaluate_principal(annuity, interest, initial);

        let mut repayment = MonthlyRepayment {
            borrower_payment_amount: interest + principal,
            date: due_date,
            interest,
            principal,
            initial_outstanding_principal: initial,
            remaining_outstanding_principal: initial - principal,
        };
        clamp_final_period(&mut repayment, interest, principal);

        remaining = repayment.remaining_outstanding_principal;
        plan.push(repayment);
    }

    Ok(plan)
}

/// The fixed annuity minus this period's interest, bounded by the opening
/// balance so a near-zero-balance period never overpays.
fn evaluate_principal(annuity: Money, interest: Money, initial_outstanding_principal: Money) -> Money {
    if interest > initial_outstanding_principal {
        initial_outstanding_principal
    } else {
        annuity - interest
    }
}

/// Absorb any rounding residue into the last installment so the plan ends at
/// exactly zero, never negative.
///
/// Two steps, deliberately: first the tentative balance at or below zero is
/// folded back into the principal, then the (now clamped) balance is checked
/// against the principal once more. Collapsing the re-check into the first
/// step changes rounding outcomes at the boundary.
fn clamp_final_period(repayment: &mut MonthlyRepayment, interest: Money, mut principal: Money) {
    if !repayment.remaining_outstanding_principal.is_positive() {
        principal += repayment.remaining_outstanding_principal;
        repayment.borrower_payment_amount += repayment.remaining_outstanding_principal;
        repayment.remaining_outstanding_principal = Money::ZERO;
    }

    let shortfall = repayment.remaining_outstanding_principal - principal;
    if shortfall.is_negative() {
        principal += repayment.remaining_outstanding_principal;
        repayment.borrower_payment_amount = interest + principal;
        repayment.remaining_outstanding_principal = Money::ZERO;
    }

    repayment.principal = principal;
}
