//! Conversion of `validator` failures into application errors.

use validator::{Validate, ValidationError, ValidationErrors};

use tutor_core::error::AppError;
use tutor_core::result::AppResult;

/// Validate `value`, reporting every failing field in one
/// [`ErrorKind::Validation`](tutor_core::error::ErrorKind::Validation) error.
pub fn validate<T: Validate>(value: &T) -> AppResult<()> {
    value.validate().map_err(|errors| into_app_error(&errors))
}

fn into_app_error(errors: &ValidationErrors) -> AppError {
    let mut fields: Vec<String> = errors
        .field_errors()
        .into_iter()
        .map(|(field, errs)| {
            let codes: Vec<&str> = errs.iter().map(|e| e.code.as_ref()).collect();
            format!("{field} ({})", codes.join(", "))
        })
        .collect();
    fields.sort();
    AppError::validation(format!("Validation failed: {}", fields.join("; ")))
}

/// `HH:MM` on a 24-hour clock.
pub fn validate_clock_time(value: &str) -> Result<(), ValidationError> {
    let valid = value.len() == 5
        && value.as_bytes()[2] == b':'
        && matches!(
            (value[..2].parse::<u8>(), value[3..].parse::<u8>()),
            (Ok(h), Ok(m)) if h < 24 && m < 60
        );
    if valid {
        Ok(())
    } else {
        Err(ValidationError::new("clock_time"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_time() {
        assert!(validate_clock_time("07:30").is_ok());
        assert!(validate_clock_time("23:59").is_ok());
        assert!(validate_clock_time("24:00").is_err());
        assert!(validate_clock_time("7:30").is_err());
        assert!(validate_clock_time("07-30").is_err());
    }
}
