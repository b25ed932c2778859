//! Pure field validation applied before writes reach the repositories.
//!
//! Failures surface as [`CoreError::Validation`] and are translated into a
//! single HTTP status at the API boundary, so every create/update handler
//! rejects bad input the same way.

use crate::error::CoreError;

/// Reject an empty name.
pub fn require_name(entity: &'static str, name: &str) -> Result<(), CoreError> {
    if name.is_empty() {
        return Err(CoreError::Validation(format!(
            "{entity} name must not be empty"
        )));
    }
    Ok(())
}

/// Reject a negative budget. A missing budget passes: the field is optional.
pub fn check_budget(budget: Option<f64>) -> Result<(), CoreError> {
    match budget {
        Some(b) if b < 0.0 => Err(CoreError::Validation("budget cannot be negative".into())),
        _ => Ok(()),
    }
}
