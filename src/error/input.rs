//! Input validation errors for health calculations.

use std::fmt;

/// A numeric input that cannot be used in a calculation.
#[derive(Debug, Clone, PartialEq)]
pub enum InputError {
    /// The value is non-positive or not finite.
    InvalidInput {
        field: &'static str,
        value: f64,
    },
}

impl InputError {
    pub fn user_message(&self) -> String {
        match self {
            InputError::InvalidInput { field, .. } => {
                format!("Please enter a valid {} greater than zero.", field)
            }
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            InputError::InvalidInput { .. } => "E_INPUT_INVALID",
        }
    }
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::InvalidInput { field, value } => {
                write!(f, "Invalid {}: {}", field, value)
            }
        }
    }
}

impl std::error::Error for InputError {}
