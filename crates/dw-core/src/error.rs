use thiserror::Error;

pub type CoreResult<T> = Result<T, CoreError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("Empty identifier: {what}")]
    EmptyIdentifier { what: &'static str },

    #[error("Invalid side number: {value} (expected 1 or 2)")]
    InvalidSide { value: u32 },

    #[error("Invalid side name: {value}")]
    InvalidSideName { value: String },
}
