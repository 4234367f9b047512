//! Appointment booking: hospital directory and booking form.

mod directory;
mod form;

pub use directory::{cities, hospitals, specializations, states};
pub use form::{BookingConfirmation, BookingForm};
