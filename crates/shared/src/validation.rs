//! Common validation utilities.

use validator::ValidationError;

/// Minimum accepted phone number length.
const PHONE_MIN_LEN: usize = 10;

/// Maximum accepted phone number length.
const PHONE_MAX_LEN: usize = 15;

/// Validates that a phone number is 10-15 characters and digits only.
pub fn validate_phone(phone: &str) -> Result<(), ValidationError> {
    let len = phone.chars().count();
    if len < PHONE_MIN_LEN {
        let mut err = ValidationError::new("phone_too_short");
        err.message = Some("Phone number must be at least 10 digits".into());
        return Err(err);
    }
    if len > PHONE_MAX_LEN {
        let mut err = ValidationError::new("phone_too_long");
        err.message = Some("Phone number must be at most 15 digits".into());
        return Err(err);
    }
    if !phone.chars().all(|c| c.is_ascii_digit()) {
        let mut err = ValidationError::new("phone_not_numeric");
        err.message = Some("Phone number must contain digits only".into());
        return Err(err);
    }
    Ok(())
}

/// Validates that a string contains at least one non-whitespace character.
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("blank");
        err.message = Some("This field is required".into());
        Err(err)
    } else {
        Ok(())
    }
}
