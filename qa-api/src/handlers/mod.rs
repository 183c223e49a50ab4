use crate::error::{AppError, AppResult};

pub mod answers;
pub mod health;
pub mod questions;

fn require_non_empty(field: &str, value: &str) -> AppResult<()> {
    if value.is_empty() {
        return Err(AppError::Validation(format!("{} must not be empty", field)));
    }
    Ok(())
}
