//! Request field validation shared by every resource handler.
//!
//! Incoming payloads deserialize into all-`Option` DTOs so that a missing
//! field and an empty field are rejected the same way. The helpers here
//! return `Some` only for a usable value:
//!
//! - strings must contain a non-whitespace character (returned trimmed)
//! - ids must be positive
//! - required amounts must be finite and non-zero
//!
//! Handlers destructure the results with `let ... else` and fail with
//! [`missing`] and the resource's fixed message.

use crate::error::CoreError;
use crate::types::DbId;

/// Validation error for a payload lacking required fields.
///
/// Each resource reports missing fields with one fixed message rather than
/// naming the individual field.
pub fn missing(message: &str) -> CoreError {
    CoreError::Validation(message.to_string())
}

/// Trimmed text, or `None` when absent or blank.
pub fn non_blank(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// The id when it is positive; zero or negative ids count as absent.
pub fn positive_id(value: Option<DbId>) -> Option<DbId> {
    value.filter(|id| *id > 0)
}

/// The amount when it is finite and non-zero.
pub fn nonzero_amount(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite() && *v != 0.0)
}

/// Reject negative or non-finite amounts.
pub fn require_non_negative(value: f64, field: &str) -> Result<f64, CoreError> {
    if !value.is_finite() || value < 0.0 {
        return Err(CoreError::Validation(format!(
            "{field} must be a non-negative number, got {value}"
        )));
    }
    Ok(value)
}

/// Reject zero, negative or non-finite amounts.
pub fn require_positive(value: f64, field: &str) -> Result<f64, CoreError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(CoreError::Validation(format!(
            "{field} must be greater than zero, got {value}"
        )));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn blank_strings_are_absent() {
        assert_eq!(non_blank(&None), None);
        assert_eq!(non_blank(&Some(String::new())), None);
        assert_eq!(non_blank(&Some("   ".to_string())), None);
        assert_eq!(non_blank(&Some("  Olaya St  ".into())), Some("Olaya St".into()));
    }

    #[test]
    fn ids_must_be_positive() {
        assert_eq!(positive_id(Some(0)), None);
        assert_eq!(positive_id(Some(-3)), None);
        assert_eq!(positive_id(Some(7)), Some(7));
        assert_eq!(positive_id(None), None);
    }

    #[test]
    fn zero_amount_is_absent() {
        assert_eq!(nonzero_amount(Some(0.0)), None);
        assert_eq!(nonzero_amount(Some(f64::NAN)), None);
        assert_eq!(nonzero_amount(Some(4500.0)), Some(4500.0));
    }

    #[test]
    fn missing_carries_fixed_message() {
        let err = missing("BranchName and City required");
        assert_matches!(err, CoreError::Validation(msg) if msg == "BranchName and City required");
    }

    #[test]
    fn amount_bounds() {
        assert_eq!(require_non_negative(0.0, "HoursWorked").unwrap(), 0.0);
        assert!(require_non_negative(-0.5, "HoursWorked").is_err());
        assert!(require_positive(0.0, "Price").is_err());
        assert_eq!(require_positive(12.5, "Price").unwrap(), 12.5);
    }

    #[test]
    fn bound_errors_name_the_field() {
        let err = require_positive(-1.0, "Quantity").unwrap_err();
        assert_matches!(err, CoreError::Validation(msg) if msg.starts_with("Quantity"));
    }
}
