//! Appointment booking errors.

use std::fmt;

/// Booking-form validation failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookingError {
    /// The state is not in the directory.
    UnknownState {
        state: String,
    },

    /// The city does not belong to the selected state.
    UnknownCity {
        city: String,
    },

    /// The hospital does not belong to the selected city.
    UnknownHospital {
        hospital: String,
    },

    /// The specialization is not offered.
    UnknownSpecialization {
        specialization: String,
    },

    /// A required field was left blank.
    MissingField {
        field: &'static str,
    },

    /// The email address does not look valid.
    InvalidEmail {
        email: String,
    },

    /// The appointment date is in the past.
    PastDate,
}

impl BookingError {
    pub fn user_message(&self) -> String {
        match self {
            BookingError::UnknownState { state } => {
                format!("'{}' is not a supported state.", state)
            }
            BookingError::UnknownCity { city } => {
                format!("'{}' is not a city in the selected state.", city)
            }
            BookingError::UnknownHospital { hospital } => {
                format!("'{}' is not a hospital in the selected city.", hospital)
            }
            BookingError::UnknownSpecialization { specialization } => {
                format!("'{}' is not an available specialization.", specialization)
            }
            BookingError::MissingField { field } => {
                format!("Please fill in the {} field.", field)
            }
            BookingError::InvalidEmail { .. } => {
                "Please enter a valid email address.".to_string()
            }
            BookingError::PastDate => {
                "The appointment date must be today or later.".to_string()
            }
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            BookingError::UnknownState { .. } => "E_BOOK_STATE",
            BookingError::UnknownCity { .. } => "E_BOOK_CITY",
            BookingError::UnknownHospital { .. } => "E_BOOK_HOSPITAL",
            BookingError::UnknownSpecialization { .. } => "E_BOOK_SPEC",
            BookingError::MissingField { .. } => "E_BOOK_MISSING",
            BookingError::InvalidEmail { .. } => "E_BOOK_EMAIL",
            BookingError::PastDate => "E_BOOK_DATE",
        }
    }
}

impl fmt::Display for BookingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BookingError::UnknownState { state } => {
                write!(f, "Unknown state '{}'", state)
            }
            BookingError::UnknownCity { city } => {
                write!(f, "Unknown city '{}'", city)
            }
            BookingError::UnknownHospital { hospital } => {
                write!(f, "Unknown hospital '{}'", hospital)
            }
            BookingError::UnknownSpecialization { specialization } => {
                write!(f, "Unknown specialization '{}'", specialization)
            }
            BookingError::MissingField { field } => {
                write!(f, "Missing field '{}'", field)
            }
            BookingError::InvalidEmail { email } => {
                write!(f, "Invalid email '{}'", email)
            }
            BookingError::PastDate => {
                write!(f, "Appointment date is in the past")
            }
        }
    }
}

impl std::error::Error for BookingError {}
