use crate::utils::error::{DataError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Checked positional access. Never wraps around or clamps.
pub fn element_at<T>(items: &[T], index: usize) -> Result<&T> {
    items.get(index).ok_or(DataError::IndexOutOfBounds {
        index,
        len: items.len(),
    })
}

pub fn validate_age(value: i64) -> Result<u32> {
    if value < 0 {
        return Err(DataError::InvalidArgument {
            field: "age".to_string(),
            reason: "Age is not allowed to be smaller than zero".to_string(),
        });
    }
    u32::try_from(value).map_err(|_| DataError::InvalidArgument {
        field: "age".to_string(),
        reason: format!("Value must be at most {}", u32::MAX),
    })
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(DataError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

pub fn validate_one_of(field_name: &str, value: &str, allowed: &[&str]) -> Result<()> {
    if !allowed.contains(&value) {
        return Err(DataError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Allowed values: {}", allowed.join(", ")),
        });
    }
    Ok(())
}
