pub mod payload;

pub use unipick_contracts::models;
pub use unipick_contracts::{AppError, AppResult, ResultExt};
