pub mod decimal;
pub mod errors;
pub mod interest;
pub mod schedule;
pub mod types;

// re-export key types
pub use decimal::{Money, Rate};
pub use errors::{Result, ScheduleError};
pub use schedule::generate_plan;
pub use types::{LoanRequest, MonthlyRepayment};

// re-export external dependencies that users will need
pub use chrono;
pub use rust_decimal::Decimal;
