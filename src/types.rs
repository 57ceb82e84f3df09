use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::decimal::{Money, Rate};

/// Loan request as handed over by the transport layer.
///
/// All four fields are mandatory for plan generation, but each is modeled as
/// optional so the engine's combined null guard (not the type system) decides
/// whether the request is usable. Field-level constraints (minimum values,
/// future-date checks) are the transport layer's concern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct LoanRequest {
    /// number of scheduled periods; sizes the annuity formula only
    pub duration_in_month: Option<u32>,
    /// nominal annual interest rate in percentage units (5 means 5%)
    pub nominal_rate: Option<Rate>,
    /// initial principal
    pub loan_amount: Option<Money>,
    /// due date of the first repayment
    pub start_date: Option<NaiveDateTime>,
}

impl LoanRequest {
    /// create a fully populated request
    pub fn new(
        duration_in_month: u32,
        nominal_rate: Rate,
        loan_amount: Money,
        start_date: NaiveDateTime,
    ) -> Self {
        Self {
            duration_in_month: Some(duration_in_month),
            nominal_rate: Some(nominal_rate),
            loan_amount: Some(loan_amount),
            start_date: Some(start_date),
        }
    }
}

/// One installment of the repayment plan.
///
/// Records are immutable once appended; the final-period clamp only touches
/// a record during its own construction step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyRepayment {
    /// total cash due this period: interest + principal
    pub borrower_payment_amount: Money,
    /// due date of this installment
    pub date: NaiveDateTime,
    /// interest portion charged this period
    pub interest: Money,
    /// principal portion repaid this period
    pub principal: Money,
    /// balance at the start of this period
    pub initial_outstanding_principal: Money,
    /// balance after this period; never negative, exactly zero on the last record
    pub remaining_outstanding_principal: Money,
}
