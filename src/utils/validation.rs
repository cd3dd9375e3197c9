use crate::utils::error::{KataError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(KataError::InvalidInputValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_min_count<T>(field_name: &str, values: &[T], min_count: usize) -> Result<()> {
    if values.len() < min_count {
        return Err(KataError::InvalidInputValue {
            field: field_name.to_string(),
            value: values.len().to_string(),
            reason: format!("At least {} values are required", min_count),
        });
    }
    Ok(())
}
