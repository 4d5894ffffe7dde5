// Core data models for the event catalog

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::core::errors::CatalogError;

/// Identifier assigned to an event by the catalog
pub type EventId = u64;

/// Identifier assigned to a registration by the catalog (global across events)
pub type RegistrationId = u64;

/// Wire format for event dates
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Wire format for event times
pub const TIME_FORMAT: &str = "%H:%M";

/// Wire format for event times that carry seconds
pub const TIME_WITH_SECONDS_FORMAT: &str = "%H:%M:%S";

/// Parse a `YYYY-MM-DD` calendar date
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).ok()
}

/// Parse a wall-clock time, `HH:MM` or `HH:MM:SS`
pub fn parse_time(value: &str) -> Option<NaiveTime> {
    let value = value.trim();
    NaiveTime::parse_from_str(value, TIME_FORMAT)
        .or_else(|_| NaiveTime::parse_from_str(value, TIME_WITH_SECONDS_FORMAT))
        .ok()
}

/// Render a time as `HH:MM`, or `HH:MM:SS` when it has seconds
pub fn format_time(time: &NaiveTime) -> String {
    let format = if time.second() == 0 {
        TIME_FORMAT
    } else {
        TIME_WITH_SECONDS_FORMAT
    };
    time.format(format).to_string()
}

mod wall_clock {
    use chrono::NaiveTime;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::format_time(time))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        super::parse_time(&raw).ok_or_else(|| de::Error::custom(format!("invalid time '{}'", raw)))
    }
}

/// Registration status
///
/// Only `confirmed` exists; there is no cancellation or waitlist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RegistrationStatus {
    Confirmed,
}

/// A student's confirmed seat at an event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    pub id: RegistrationId,
    pub event_id: EventId,
    pub student_name: String,
    pub student_id: String,
    pub student_email: String,
    pub student_phone: String,
    pub registration_date: NaiveDateTime,
    pub status: RegistrationStatus,
}

/// A campus event and the registrations it owns
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,
    pub title: String,
    pub category: String,
    pub date: NaiveDate,
    #[serde(with = "wall_clock")]
    pub time: NaiveTime,
    pub location: String,
    pub description: String,
    pub capacity: u32,
    #[serde(default)]
    pub registrations: Vec<Registration>,
}

impl Event {
    /// Build an event with an empty registration list
    pub fn new(id: EventId, data: NewEvent) -> Self {
        Self {
            id,
            title: data.title,
            category: data.category,
            date: data.date,
            time: data.time,
            location: data.location,
            description: data.description,
            capacity: data.capacity,
            registrations: Vec::new(),
        }
    }

    pub fn is_full(&self) -> bool {
        self.registrations.len() >= self.capacity as usize
    }

    pub fn seats_left(&self) -> usize {
        (self.capacity as usize).saturating_sub(self.registrations.len())
    }

    pub fn has_student(&self, student_id: &str) -> bool {
        self.registrations.iter().any(|r| r.student_id == student_id)
    }
}

/// Capacity as it may arrive on the wire: a number or a numeric string
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum CapacityValue {
    Integer(i64),
    Float(f64),
    Text(String),
}

impl CapacityValue {
    /// Convert to a positive seat count
    pub fn to_capacity(&self) -> Result<u32, CatalogError> {
        let parsed: i64 = match self {
            CapacityValue::Integer(n) => *n,
            CapacityValue::Float(f) if f.is_finite() && f.fract() == 0.0 => *f as i64,
            CapacityValue::Float(f) => {
                return Err(CatalogError::Validation(format!(
                    "Invalid capacity '{}': must be an integer",
                    f
                )))
            }
            CapacityValue::Text(s) => s.trim().parse::<i64>().map_err(|_| {
                CatalogError::Validation(format!("Invalid capacity '{}': must be an integer", s))
            })?,
        };

        if parsed <= 0 || parsed > i64::from(u32::MAX) {
            return Err(CatalogError::Validation(format!(
                "Invalid capacity '{}': must be a positive integer",
                parsed
            )));
        }

        Ok(parsed as u32)
    }
}

impl From<u32> for CapacityValue {
    fn from(value: u32) -> Self {
        CapacityValue::Integer(i64::from(value))
    }
}

/// Unvalidated event creation input
///
/// Every field is optional so that presence can be checked and reported
/// as a validation failure instead of a decoding failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EventDraft {
    pub title: Option<String>,
    pub category: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
    pub capacity: Option<CapacityValue>,
}

/// Validated event creation input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEvent {
    pub title: String,
    pub category: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub location: String,
    pub description: String,
    pub capacity: u32,
}

impl TryFrom<EventDraft> for NewEvent {
    type Error = CatalogError;

    fn try_from(draft: EventDraft) -> Result<Self, Self::Error> {
        let (
            Some(title),
            Some(category),
            Some(date),
            Some(time),
            Some(location),
            Some(description),
            Some(capacity),
        ) = (
            draft.title.as_ref(),
            draft.category.as_ref(),
            draft.date.as_deref(),
            draft.time.as_deref(),
            draft.location.as_ref(),
            draft.description.as_ref(),
            draft.capacity.as_ref(),
        )
        else {
            let missing: Vec<&str> = [
                ("title", draft.title.is_none()),
                ("category", draft.category.is_none()),
                ("date", draft.date.is_none()),
                ("time", draft.time.is_none()),
                ("location", draft.location.is_none()),
                ("description", draft.description.is_none()),
                ("capacity", draft.capacity.is_none()),
            ]
            .into_iter()
            .filter_map(|(field, absent)| absent.then_some(field))
            .collect();
            return Err(CatalogError::Validation(format!(
                "Missing required event data: {}",
                missing.join(", ")
            )));
        };

        let date = parse_date(date).ok_or_else(|| {
            CatalogError::Validation(format!("Invalid date '{}': expected YYYY-MM-DD", date))
        })?;
        let time = parse_time(time).ok_or_else(|| {
            CatalogError::Validation(format!("Invalid time '{}': expected HH:MM", time))
        })?;

        Ok(Self {
            title: title.clone(),
            category: category.clone(),
            date,
            time,
            location: location.clone(),
            description: description.clone(),
            capacity: capacity.to_capacity()?,
        })
    }
}

/// Unvalidated registration input
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationDraft {
    pub student_name: Option<String>,
    pub student_id: Option<String>,
    pub student_email: Option<String>,
    pub student_phone: Option<String>,
}

/// Validated registration input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRegistration {
    pub student_name: String,
    pub student_id: String,
    pub student_email: String,
    pub student_phone: String,
}

impl TryFrom<RegistrationDraft> for NewRegistration {
    type Error = CatalogError;

    fn try_from(draft: RegistrationDraft) -> Result<Self, Self::Error> {
        match (
            draft.student_name,
            draft.student_id,
            draft.student_email,
            draft.student_phone,
        ) {
            (Some(student_name), Some(student_id), Some(student_email), Some(student_phone)) => {
                Ok(Self {
                    student_name,
                    student_id,
                    student_email,
                    student_phone,
                })
            }
            (name, id, email, phone) => {
                let missing: Vec<&str> = [
                    ("studentName", name.is_none()),
                    ("studentId", id.is_none()),
                    ("studentEmail", email.is_none()),
                    ("studentPhone", phone.is_none()),
                ]
                .into_iter()
                .filter_map(|(field, absent)| absent.then_some(field))
                .collect();
                Err(CatalogError::Validation(format!(
                    "Missing required registration data: {}",
                    missing.join(", ")
                )))
            }
        }
    }
}

/// Dashboard counters computed relative to a given day
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total_events: usize,
    pub active_events: usize,
    pub total_registrations: usize,
    pub upcoming_events: usize,
}

/// Read-time projection of a registration with its event's title and date
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationView {
    #[serde(flatten)]
    pub registration: Registration,
    pub event_title: String,
    pub event_date: NaiveDate,
}
