/// serialize a repayment plan the way a transport layer would
use loan_schedule_rs::{generate_plan, LoanRequest, Money, Rate};
use rust_decimal_macros::dec;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let request = LoanRequest::new(
        12,
        Rate::from_percent(dec!(12)),
        Money::from_major(1000),
        "2021-01-15T00:00:00".parse()?,
    );

    let plan = generate_plan(&request)?;
    println!("{}", serde_json::to_string_pretty(&plan)?);

    Ok(())
}
