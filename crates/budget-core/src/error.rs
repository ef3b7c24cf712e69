use thiserror::Error;

#[derive(Debug, Error)]
pub enum BudgetError {
    #[error("Invalid month: {year}-{month:02} (month must be 1-12, year 1900-2100)")]
    InvalidMonth { year: i32, month: u32 },

    #[error("Invalid input: {field} — {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for BudgetError {
    fn from(e: serde_json::Error) -> Self {
        BudgetError::SerializationError(e.to_string())
    }
}
