// Unit tests for core models

use crate::common::*;
use event_catalog::core::errors::CatalogError;
use event_catalog::core::models::*;

#[test]
fn test_event_draft_validates() {
    let data = NewEvent::try_from(event_draft("Robotics Expo", "2025-04-02", 25)).unwrap();
    assert_eq!(data.title, "Robotics Expo");
    assert_eq!(data.date, day(2025, 4, 2));
    assert_eq!(data.time.format("%H:%M").to_string(), "12:30");
    assert_eq!(data.capacity, 25);
}

#[test]
fn test_event_draft_reports_missing_fields() {
    let mut draft = event_draft("Robotics Expo", "2025-04-02", 25);
    draft.title = None;
    draft.capacity = None;

    match NewEvent::try_from(draft) {
        Err(CatalogError::Validation(msg)) => {
            assert!(msg.starts_with("Missing required event data"));
            assert!(msg.contains("title"));
            assert!(msg.contains("capacity"));
            assert!(!msg.contains("location"));
        }
        other => panic!("Expected validation error, got {:?}", other),
    }
}

#[test]
fn test_event_draft_accepts_empty_strings() {
    let mut draft = event_draft("", "2025-04-02", 5);
    draft.description = Some(String::new());
    let data = NewEvent::try_from(draft).unwrap();
    assert_eq!(data.title, "");
    assert_eq!(data.description, "");
}

#[test]
fn test_event_draft_rejects_bad_date_and_time() {
    let mut draft = event_draft("Expo", "04/02/2025", 5);
    assert!(matches!(NewEvent::try_from(draft.clone()), Err(CatalogError::Validation(_))));

    draft.date = Some("2025-04-02".to_string());
    draft.time = Some("noon".to_string());
    assert!(matches!(NewEvent::try_from(draft), Err(CatalogError::Validation(_))));
}

#[test]
fn test_capacity_conversion() {
    assert_eq!(CapacityValue::Integer(40).to_capacity().unwrap(), 40);
    assert_eq!(CapacityValue::Text(" 75 ".to_string()).to_capacity().unwrap(), 75);
    assert_eq!(CapacityValue::Float(30.0).to_capacity().unwrap(), 30);

    assert!(CapacityValue::Text("forty".to_string()).to_capacity().is_err());
    assert!(CapacityValue::Float(2.5).to_capacity().is_err());
    assert!(CapacityValue::Integer(0).to_capacity().is_err());
    assert!(CapacityValue::Integer(-3).to_capacity().is_err());
}

#[test]
fn test_capacity_deserializes_from_number_or_string() {
    let draft: EventDraft = serde_json::from_value(serde_json::json!({ "capacity": "120" })).unwrap();
    assert_eq!(draft.capacity, Some(CapacityValue::Text("120".to_string())));

    let draft: EventDraft = serde_json::from_value(serde_json::json!({ "capacity": 120 })).unwrap();
    assert_eq!(draft.capacity, Some(CapacityValue::Integer(120)));
}

#[test]
fn test_registration_draft_reports_missing_fields() {
    let mut draft = registration_draft("S1");
    draft.student_phone = None;

    match NewRegistration::try_from(draft) {
        Err(CatalogError::Validation(msg)) => {
            assert!(msg.starts_with("Missing required registration data"));
            assert!(msg.contains("studentPhone"));
            assert!(!msg.contains("studentName"));
        }
        other => panic!("Expected validation error, got {:?}", other),
    }
}

#[test]
fn test_registration_draft_deserializes_camel_case() {
    let draft: RegistrationDraft = serde_json::from_value(registration_body("S9")).unwrap();
    let data = NewRegistration::try_from(draft).unwrap();
    assert_eq!(data.student_id, "S9");
    assert_eq!(data.student_email, "s9@campus.test");
}

#[test]
fn test_event_serializes_wire_format() {
    let event = Event::new(
        7,
        NewEvent::try_from(event_draft("Robotics Expo", "2025-04-02", 25)).unwrap(),
    );
    let json = serde_json::to_value(&event).unwrap();

    assert_eq!(json["id"], 7);
    assert_eq!(json["date"], "2025-04-02");
    assert_eq!(json["time"], "12:30");
    assert_eq!(json["capacity"], 25);
    assert_eq!(json["registrations"], serde_json::json!([]));
}

#[test]
fn test_event_time_keeps_seconds() {
    let mut draft = event_draft("Robotics Expo", "2025-04-02", 25);
    draft.time = Some("09:30:45".to_string());
    let data = NewEvent::try_from(draft).unwrap();
    assert_eq!(data.time, chrono::NaiveTime::from_hms_opt(9, 30, 45).unwrap());

    let event = Event::new(1, data);
    let json = serde_json::to_value(&event).unwrap();
    assert_eq!(json["time"], "09:30:45");

    let back: Event = serde_json::from_value(json).unwrap();
    assert_eq!(back.time, event.time);
}

#[test]
fn test_event_time_without_seconds_stays_short() {
    let mut draft = event_draft("Robotics Expo", "2025-04-02", 25);
    draft.time = Some("09:30:00".to_string());
    let event = Event::new(1, NewEvent::try_from(draft).unwrap());

    assert_eq!(format_time(&event.time), "09:30");
    assert_eq!(serde_json::to_value(&event).unwrap()["time"], "09:30");
}

#[test]
fn test_event_round_trips_through_json() {
    let event = Event::new(
        3,
        NewEvent::try_from(event_draft("Robotics Expo", "2025-04-02", 25)).unwrap(),
    );
    let text = serde_json::to_string(&event).unwrap();
    let back: Event = serde_json::from_str(&text).unwrap();
    assert_eq!(back, event);
}

#[test]
fn test_registration_view_flattens_registration() {
    let view = RegistrationView {
        registration: Registration {
            id: 4,
            event_id: 2,
            student_name: "Ana".to_string(),
            student_id: "S4".to_string(),
            student_email: "ana@campus.test".to_string(),
            student_phone: "555".to_string(),
            registration_date: at(2025, 1, 5, 10, 15),
            status: RegistrationStatus::Confirmed,
        },
        event_title: "Cultural Festival".to_string(),
        event_date: day(2025, 1, 20),
    };

    let json = serde_json::to_value(&view).unwrap();
    assert_eq!(json["id"], 4);
    assert_eq!(json["eventId"], 2);
    assert_eq!(json["studentId"], "S4");
    assert_eq!(json["status"], "confirmed");
    assert_eq!(json["registrationDate"], "2025-01-05T10:15:00");
    assert_eq!(json["eventTitle"], "Cultural Festival");
    assert_eq!(json["eventDate"], "2025-01-20");
}

#[test]
fn test_event_capacity_helpers() {
    let mut event = Event::new(1, NewEvent::try_from(event_draft("Tiny", "2025-04-02", 1)).unwrap());
    assert!(!event.is_full());
    assert_eq!(event.seats_left(), 1);

    event.registrations.push(Registration {
        id: 1,
        event_id: 1,
        student_name: "Ana".to_string(),
        student_id: "S1".to_string(),
        student_email: "ana@campus.test".to_string(),
        student_phone: "555".to_string(),
        registration_date: at(2025, 1, 5, 10, 15),
        status: RegistrationStatus::Confirmed,
    });
    assert!(event.is_full());
    assert_eq!(event.seats_left(), 0);
    assert!(event.has_student("S1"));
    assert!(!event.has_student("S2"));
}
