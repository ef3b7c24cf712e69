pub mod calculator;
pub mod cyclic;
pub mod daily_limit;
pub mod error;
pub mod month;
pub mod summary;
pub mod types;

pub use error::BudgetError;
pub use month::AccountingMonth;
pub use types::*;

/// Standard result type for all budget operations
pub type BudgetResult<T> = Result<T, BudgetError>;
