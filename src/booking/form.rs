//! The appointment booking form.
//!
//! Location fields are dependent: picking a state clears the city and
//! hospital, picking a city clears the hospital, so a stale selection can
//! never survive a change higher up the chain.

use chrono::{NaiveDate, NaiveTime};
use tracing::info;
use uuid::Uuid;

use crate::booking::directory;
use crate::error::BookingError;

/// An appointment booking form under construction.
#[derive(Debug, Clone, Default)]
pub struct BookingForm {
    name: String,
    email: String,
    state: Option<String>,
    city: Option<String>,
    hospital: Option<String>,
    specialization: Option<String>,
    date: Option<NaiveDate>,
    time: Option<NaiveTime>,
}

impl BookingForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }

    /// Select a state. Clears any city and hospital selection.
    pub fn select_state(&mut self, state: &str) -> Result<(), BookingError> {
        if directory::cities(state).is_none() {
            return Err(BookingError::UnknownState {
                state: state.to_string(),
            });
        }
        self.state = Some(state.to_string());
        self.city = None;
        self.hospital = None;
        Ok(())
    }

    /// Select a city within the chosen state. Clears any hospital selection.
    pub fn select_city(&mut self, city: &str) -> Result<(), BookingError> {
        let state = self.state.as_deref().ok_or(BookingError::MissingField {
            field: "state",
        })?;
        let cities = directory::cities(state).unwrap_or_default();
        if !cities.contains(&city) {
            return Err(BookingError::UnknownCity {
                city: city.to_string(),
            });
        }
        self.city = Some(city.to_string());
        self.hospital = None;
        Ok(())
    }

    /// Select a hospital within the chosen city.
    pub fn select_hospital(&mut self, hospital: &str) -> Result<(), BookingError> {
        let state = self.state.as_deref().ok_or(BookingError::MissingField {
            field: "state",
        })?;
        let city = self.city.as_deref().ok_or(BookingError::MissingField {
            field: "city",
        })?;
        let hospitals = directory::hospitals(state, city).unwrap_or_default();
        if !hospitals.contains(&hospital) {
            return Err(BookingError::UnknownHospital {
                hospital: hospital.to_string(),
            });
        }
        self.hospital = Some(hospital.to_string());
        Ok(())
    }

    pub fn select_specialization(&mut self, specialization: &str) -> Result<(), BookingError> {
        if !directory::specializations().contains(&specialization) {
            return Err(BookingError::UnknownSpecialization {
                specialization: specialization.to_string(),
            });
        }
        self.specialization = Some(specialization.to_string());
        Ok(())
    }

    pub fn set_date(&mut self, date: NaiveDate) {
        self.date = Some(date);
    }

    pub fn set_time(&mut self, time: NaiveTime) {
        self.time = Some(time);
    }

    pub fn state(&self) -> Option<&str> {
        self.state.as_deref()
    }

    pub fn city(&self) -> Option<&str> {
        self.city.as_deref()
    }

    pub fn hospital(&self) -> Option<&str> {
        self.hospital.as_deref()
    }

    /// Cities available for the current state selection.
    pub fn available_cities(&self) -> Vec<&'static str> {
        self.state
            .as_deref()
            .and_then(directory::cities)
            .unwrap_or_default()
    }

    /// Hospitals available for the current state and city selection.
    pub fn available_hospitals(&self) -> Vec<&'static str> {
        match (self.state.as_deref(), self.city.as_deref()) {
            (Some(state), Some(city)) => {
                directory::hospitals(state, city).unwrap_or_default()
            }
            _ => Vec::new(),
        }
    }

    /// Validate the form and produce a confirmation.
    ///
    /// `today` anchors the past-date check so callers and tests control the
    /// clock.
    pub fn submit(&self, today: NaiveDate) -> Result<BookingConfirmation, BookingError> {
        if self.name.trim().is_empty() {
            return Err(BookingError::MissingField { field: "name" });
        }
        if self.email.trim().is_empty() {
            return Err(BookingError::MissingField { field: "email" });
        }
        if !is_plausible_email(&self.email) {
            return Err(BookingError::InvalidEmail {
                email: self.email.clone(),
            });
        }
        let state = self.state.clone().ok_or(BookingError::MissingField {
            field: "state",
        })?;
        let city = self.city.clone().ok_or(BookingError::MissingField {
            field: "city",
        })?;
        let hospital = self.hospital.clone().ok_or(BookingError::MissingField {
            field: "hospital",
        })?;
        let specialization = self
            .specialization
            .clone()
            .ok_or(BookingError::MissingField {
                field: "specialization",
            })?;
        let date = self.date.ok_or(BookingError::MissingField { field: "date" })?;
        let time = self.time.ok_or(BookingError::MissingField { field: "time" })?;

        if date < today {
            return Err(BookingError::PastDate);
        }

        let confirmation = BookingConfirmation {
            reference: Uuid::new_v4(),
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            state,
            city,
            hospital,
            specialization,
            date,
            time,
        };
        info!(reference = %confirmation.reference, hospital = %confirmation.hospital, "appointment booked");
        Ok(confirmation)
    }
}

/// A confirmed appointment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingConfirmation {
    pub reference: Uuid,
    pub name: String,
    pub email: String,
    pub state: String,
    pub city: String,
    pub hospital: String,
    pub specialization: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
}

impl BookingConfirmation {
    /// Maps link for the booked hospital.
    pub fn directions_url(&self) -> String {
        format!(
            "https://maps.google.com/?q={},{}",
            urlencoding::encode(&self.hospital),
            urlencoding::encode(&self.city)
        )
    }
}

fn is_plausible_email(email: &str) -> bool {
    let email = email.trim();
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && domain.contains('.') && !domain.starts_with('.')
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> BookingForm {
        let mut form = BookingForm::new();
        form.set_name("Asha Rao");
        form.set_email("asha@example.com");
        form.select_state("Maharashtra").unwrap();
        form.select_city("Pune").unwrap();
        form.select_hospital("Ruby Hall Clinic").unwrap();
        form.select_specialization("Cardiologist").unwrap();
        form.set_date(NaiveDate::from_ymd_opt(2026, 9, 1).unwrap());
        form.set_time(NaiveTime::from_hms_opt(10, 30, 0).unwrap());
        form
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 23).unwrap()
    }

    #[test]
    fn test_happy_path() {
        let confirmation = filled_form().submit(today()).unwrap();
        assert_eq!(confirmation.hospital, "Ruby Hall Clinic");
        assert_eq!(confirmation.specialization, "Cardiologist");
    }

    #[test]
    fn test_state_change_clears_dependents() {
        let mut form = filled_form();
        form.select_state("Delhi").unwrap();
        assert_eq!(form.city(), None);
        assert_eq!(form.hospital(), None);
        assert_eq!(form.available_cities(), vec!["New Delhi", "South Delhi", "North Delhi"]);
        assert!(form.available_hospitals().is_empty());
    }

    #[test]
    fn test_city_change_clears_hospital() {
        let mut form = filled_form();
        form.select_city("Mumbai").unwrap();
        assert_eq!(form.hospital(), None);
        assert!(form
            .available_hospitals()
            .contains(&"Lilavati Hospital"));
    }

    #[test]
    fn test_hospital_must_match_city() {
        let mut form = filled_form();
        form.select_city("Mumbai").unwrap();
        // Ruby Hall Clinic is in Pune, not Mumbai.
        let err = form.select_hospital("Ruby Hall Clinic").unwrap_err();
        assert!(matches!(err, BookingError::UnknownHospital { .. }));
    }

    #[test]
    fn test_city_requires_state() {
        let mut form = BookingForm::new();
        let err = form.select_city("Pune").unwrap_err();
        assert!(matches!(err, BookingError::MissingField { field: "state" }));
    }

    #[test]
    fn test_submit_catches_missing_fields() {
        let mut form = BookingForm::new();
        let err = form.submit(today()).unwrap_err();
        assert!(matches!(err, BookingError::MissingField { field: "name" }));

        form.set_name("Asha");
        let err = form.submit(today()).unwrap_err();
        assert!(matches!(err, BookingError::MissingField { field: "email" }));
    }

    #[test]
    fn test_submit_rejects_bad_email() {
        let mut form = filled_form();
        form.set_email("not-an-email");
        assert!(matches!(
            form.submit(today()).unwrap_err(),
            BookingError::InvalidEmail { .. }
        ));
    }

    #[test]
    fn test_submit_rejects_past_date() {
        let mut form = filled_form();
        form.set_date(NaiveDate::from_ymd_opt(2026, 8, 22).unwrap());
        assert_eq!(form.submit(today()).unwrap_err(), BookingError::PastDate);

        // Same-day booking is allowed.
        form.set_date(today());
        assert!(form.submit(today()).is_ok());
    }

    #[test]
    fn test_directions_url_is_encoded() {
        let confirmation = filled_form().submit(today()).unwrap();
        assert_eq!(
            confirmation.directions_url(),
            "https://maps.google.com/?q=Ruby%20Hall%20Clinic,Pune"
        );
    }

    #[test]
    fn test_email_plausibility() {
        assert!(is_plausible_email("a@b.co"));
        assert!(!is_plausible_email("a@b"));
        assert!(!is_plausible_email("@b.co"));
        assert!(!is_plausible_email("a@.co"));
        assert!(!is_plausible_email("plain"));
    }
}
