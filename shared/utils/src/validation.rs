use crate::error::{CineError, CineResult};
use validator::{Validate, ValidationErrors};

/// Run the validator-derived rules on a model and fold any failures into a
/// single `Validation` error. Write paths call this before contacting the
/// store, so a malformed record never reaches the driver.
pub fn validate_model<T: Validate>(model: &T) -> CineResult<()> {
    match model.validate() {
        Ok(()) => Ok(()),
        Err(errors) => {
            let error_messages = format_validation_errors(&errors);
            Err(CineError::validation("model", error_messages))
        }
    }
}

pub fn format_validation_errors(errors: &ValidationErrors) -> String {
    let mut messages = Vec::new();

    for (field, field_errors) in errors.field_errors() {
        for error in field_errors {
            let message = match &error.message {
                Some(message) => message.to_string(),
                None => format!("Validation failed for field '{}': {}", field, error.code),
            };
            messages.push(message);
        }
    }

    messages.join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Validate)]
    struct Sample {
        #[validate(length(min = 1, message = "Name is required"))]
        name: String,
    }

    #[test]
    fn test_valid_model_passes() {
        let sample = Sample {
            name: "ok".to_string(),
        };
        assert!(validate_model(&sample).is_ok());
    }

    #[test]
    fn test_invalid_model_reports_message() {
        let sample = Sample {
            name: String::new(),
        };
        let error = validate_model(&sample).unwrap_err();
        assert_eq!(error.error_code(), "VALIDATION_ERROR");
        assert!(error.to_string().contains("Name is required"));
    }
}
