// Settings validation

use crate::{ConfigError, Result};

/// Trait for validating configuration
pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Field-level validation rules
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate that a value is not empty
    pub fn not_empty(value: &str, field: &str) -> Result<()> {
        if value.is_empty() {
            return Err(ConfigError::ValidationError(format!(
                "{} cannot be empty",
                field
            )));
        }
        Ok(())
    }

    /// Validate that a value starts with a fixed prefix.
    ///
    /// This is a plain string comparison, not URL parsing.
    pub fn has_prefix(value: &str, prefix: &str, field: &str) -> Result<()> {
        if !value.starts_with(prefix) {
            return Err(ConfigError::ValidationError(format!(
                "{} must start with {}",
                field, prefix
            )));
        }
        Ok(())
    }
}
