use thiserror::Error;

/// One or more mandatory request parameters were absent. The guard is a
/// single combined precondition: the message is the same no matter which
/// field(s) are missing, and finer-grained diagnostics are left to the
/// transport layer's own validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("Invalid Loan Request. One or more mandatory parameters are null.")]
    InvalidRequest,
}

pub type Result<T> = std::result::Result<T, ScheduleError>;
