pub mod host;
pub mod manifest;
pub mod plugin;

pub use unipick_contracts::models;
pub use unipick_contracts::{AppError, AppResult, ResultExt};
