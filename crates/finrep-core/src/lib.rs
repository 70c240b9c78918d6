pub mod advisory;
pub mod error;
pub mod ratios;
pub mod report;
pub mod statements;
pub mod types;

#[cfg(feature = "export")]
pub mod export;

pub use error::FinRepError;
pub use types::*;

/// Standard result type for all library operations
pub type FinRepResult<T> = Result<T, FinRepError>;
