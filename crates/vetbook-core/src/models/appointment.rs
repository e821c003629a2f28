//! Appointment model.

use std::fmt;

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use super::{ModelError, ModelResult};

/// A scheduled visit: which client brings which pet to which vet technician.
///
/// Appointments are immutable once built. Rescheduling produces a new value
/// through [`Appointment::with_date`] and friends.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Appointment {
    date: NaiveDate,
    time: NaiveTime,
    client: String,
    pet: String,
    vet_tech: String,
}

impl Appointment {
    /// Create an appointment with every field present.
    pub fn new(
        date: NaiveDate,
        time: NaiveTime,
        client: impl Into<String>,
        pet: impl Into<String>,
        vet_tech: impl Into<String>,
    ) -> Self {
        Self {
            date,
            time,
            client: client.into(),
            pet: pet.into(),
            vet_tech: vet_tech.into(),
        }
    }

    /// Start a builder for callers that collect fields one at a time.
    pub fn builder() -> AppointmentBuilder {
        AppointmentBuilder::default()
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn time(&self) -> NaiveTime {
        self.time
    }

    pub fn client(&self) -> &str {
        &self.client
    }

    pub fn pet(&self) -> &str {
        &self.pet
    }

    pub fn vet_tech(&self) -> &str {
        &self.vet_tech
    }

    /// Copy of this appointment moved to another day.
    pub fn with_date(&self, date: NaiveDate) -> Self {
        Self {
            date,
            ..self.clone()
        }
    }

    /// Copy of this appointment moved to another time slot.
    pub fn with_time(&self, time: NaiveTime) -> Self {
        Self {
            time,
            ..self.clone()
        }
    }

    /// Copy of this appointment handed to another technician.
    pub fn with_vet_tech(&self, vet_tech: impl Into<String>) -> Self {
        Self {
            vet_tech: vet_tech.into(),
            ..self.clone()
        }
    }
}

impl fmt::Display for Appointment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Date: {} Time: {} Client: {} Pet: {} Vet Tech: {}",
            self.date.format("%Y-%m-%d"),
            self.time.format("%H:%M"),
            self.client,
            self.pet,
            self.vet_tech
        )
    }
}

/// Collects appointment fields that may be missing.
#[derive(Debug, Clone, Default)]
pub struct AppointmentBuilder {
    date: Option<NaiveDate>,
    time: Option<NaiveTime>,
    client: Option<String>,
    pet: Option<String>,
    vet_tech: Option<String>,
}

impl AppointmentBuilder {
    pub fn date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    pub fn time(mut self, time: NaiveTime) -> Self {
        self.time = Some(time);
        self
    }

    pub fn client(mut self, client: impl Into<String>) -> Self {
        self.client = Some(client.into());
        self
    }

    pub fn pet(mut self, pet: impl Into<String>) -> Self {
        self.pet = Some(pet.into());
        self
    }

    pub fn vet_tech(mut self, vet_tech: impl Into<String>) -> Self {
        self.vet_tech = Some(vet_tech.into());
        self
    }

    /// Build the appointment, failing on the first absent field.
    pub fn build(self) -> ModelResult<Appointment> {
        Ok(Appointment {
            date: self.date.ok_or(ModelError::MissingField("date"))?,
            time: self.time.ok_or(ModelError::MissingField("time"))?,
            client: self.client.ok_or(ModelError::MissingField("client"))?,
            pet: self.pet.ok_or(ModelError::MissingField("pet"))?,
            vet_tech: self.vet_tech.ok_or(ModelError::MissingField("vet_tech"))?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    fn make_appointment() -> Appointment {
        Appointment::new(
            NaiveDate::from_ymd_opt(2018, 3, 14).unwrap(),
            NaiveTime::from_hms_opt(10, 30, 0).unwrap(),
            "Alice Pauline",
            "Garfield",
            "Daniel Meier",
        )
    }

    fn hash_of(appointment: &Appointment) -> u64 {
        let mut hasher = DefaultHasher::new();
        appointment.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_equal_fields_equal_values() {
        let a = make_appointment();
        let b = make_appointment();
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
    }

    #[test]
    fn test_any_field_difference_breaks_equality() {
        let base = make_appointment();
        assert_ne!(base, base.with_date(NaiveDate::from_ymd_opt(2018, 3, 15).unwrap()));
        assert_ne!(base, base.with_time(NaiveTime::from_hms_opt(11, 0, 0).unwrap()));
        assert_ne!(base, base.with_vet_tech("Elle Meyer"));
    }

    #[test]
    fn test_with_date_leaves_original_untouched() {
        let original = make_appointment();
        let moved = original.with_date(NaiveDate::from_ymd_opt(2018, 4, 1).unwrap());
        assert_eq!(original.date(), NaiveDate::from_ymd_opt(2018, 3, 14).unwrap());
        assert_eq!(moved.client(), original.client());
        assert_eq!(moved.pet(), original.pet());
    }

    #[test]
    fn test_display_is_stable() {
        assert_eq!(
            make_appointment().to_string(),
            "Date: 2018-03-14 Time: 10:30 Client: Alice Pauline Pet: Garfield Vet Tech: Daniel Meier"
        );
    }

    #[test]
    fn test_builder_complete() {
        let built = Appointment::builder()
            .date(NaiveDate::from_ymd_opt(2018, 3, 14).unwrap())
            .time(NaiveTime::from_hms_opt(10, 30, 0).unwrap())
            .client("Alice Pauline")
            .pet("Garfield")
            .vet_tech("Daniel Meier")
            .build();
        assert_eq!(built, Ok(make_appointment()));
    }

    #[test]
    fn test_builder_missing_field() {
        let result = Appointment::builder()
            .date(NaiveDate::from_ymd_opt(2018, 3, 14).unwrap())
            .time(NaiveTime::from_hms_opt(10, 30, 0).unwrap())
            .client("Alice Pauline")
            .vet_tech("Daniel Meier")
            .build();
        assert_eq!(result, Err(ModelError::MissingField("pet")));
    }

    #[test]
    fn test_deserialize_rejects_missing_field() {
        let json = r#"{"date":"2018-03-14","time":"10:30:00","client":"Alice","pet":"Garfield"}"#;
        assert!(serde_json::from_str::<Appointment>(json).is_err());
    }
}
