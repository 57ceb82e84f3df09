/// quick start - generate a repayment plan and print it
use loan_schedule_rs::{generate_plan, LoanRequest, Money, Rate};
use rust_decimal_macros::dec;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 5000 over 24 months at 5% nominal annual interest
    let request = LoanRequest::new(
        24,
        Rate::from_percent(dec!(5)),
        Money::from_major(5000),
        "2020-05-01T00:00:01".parse()?,
    );

    let plan = generate_plan(&request)?;

    println!("period | date                | payment | interest | principal | remaining");
    for (number, repayment) in plan.iter().enumerate() {
        println!(
            "{:>6} | {} | {:>7} | {:>8} | {:>9} | {:>9}",
            number + 1,
            repayment.date,
            repayment.borrower_payment_amount,
            repayment.interest,
            repayment.principal,
            repayment.remaining_outstanding_principal,
        );
    }

    Ok(())
}
