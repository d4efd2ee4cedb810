use thiserror::Error;

#[derive(Error, Debug)]
pub enum LeaveCalError {
    #[error("Invalid date string: {0}")]
    InvalidDate(String),

    #[error("Invalid {name}: {value}")]
    InvalidEnumValue { name: &'static str, value: String },
}
