// Seed event loading - built-in campus events or a YAML/JSON seed file

use crate::core::errors::CatalogError;
use crate::core::models::{CapacityValue, Event, EventDraft, NewEvent};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Container for the seed file root structure
#[derive(Debug, Deserialize)]
struct SeedFile {
    events: Vec<SeedEntry>,
}

/// Seed entry; `id` is optional and defaults to file position
#[derive(Debug, Deserialize)]
struct SeedEntry {
    id: Option<u64>,
    #[serde(flatten)]
    draft: EventDraft,
}

/// The five events every fresh catalog starts with
///
/// Fails with a `Configuration` error if a built-in entry does not validate.
pub fn default_events() -> Result<Vec<Event>, CatalogError> {
    let seeds: [(&str, &str, &str, &str, &str, &str, u32); 5] = [
        (
            "Tech Innovation Summit 2024",
            "Academic",
            "2025-01-15",
            "09:00",
            "Main Auditorium",
            "Join industry leaders discussing the latest technological innovations and their impact on society.",
            200,
        ),
        (
            "Cultural Festival",
            "Cultural",
            "2025-01-20",
            "18:00",
            "Campus Grounds",
            "Celebrate diversity through music, dance, and traditional performances from around the world.",
            500,
        ),
        (
            "Career Development Workshop",
            "Workshop",
            "2025-01-10",
            "14:00",
            "Conference Room A",
            "Learn essential skills for job interviews, resume writing, and professional networking.",
            50,
        ),
        (
            "Sports Day Competition",
            "Sports",
            "2025-01-25",
            "08:00",
            "Sports Complex",
            "Annual inter-department sports competition featuring various athletic events.",
            300,
        ),
        (
            "AI & Machine Learning Seminar",
            "Seminar",
            "2025-02-05",
            "10:00",
            "IT Building Hall",
            "Explore the future of AI and machine learning with expert speakers from leading tech companies.",
            150,
        ),
    ];

    seeds
        .into_iter()
        .zip(1u64..)
        .map(|((title, category, date, time, location, description, capacity), id)| {
            let draft = EventDraft {
                title: Some(title.to_string()),
                category: Some(category.to_string()),
                date: Some(date.to_string()),
                time: Some(time.to_string()),
                location: Some(location.to_string()),
                description: Some(description.to_string()),
                capacity: Some(CapacityValue::from(capacity)),
            };
            NewEvent::try_from(draft)
                .map(|data| Event::new(id, data))
                .map_err(|e| {
                    CatalogError::Configuration(format!("Invalid built-in event #{}: {}", id, e))
                })
        })
        .collect()
}

/// Load seed events from a YAML or JSON file
///
/// The file holds `events:` followed by event entries in the same shape as
/// the create-event request body. Entries without an `id` are numbered by
/// position (1-based); duplicate ids are rejected.
pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Event>, CatalogError> {
    let path_ref = path.as_ref();

    if !path_ref.exists() {
        return Err(CatalogError::Configuration(format!(
            "Seed events file not found at {:?}",
            path_ref
        )));
    }

    let content = fs::read_to_string(path_ref).map_err(|e| {
        CatalogError::Configuration(format!("Failed to read seed events file: {}", e))
    })?;

    from_str(&content)
}

/// Parse seed events from YAML (JSON is accepted as a YAML subset)
pub fn from_str(content: &str) -> Result<Vec<Event>, CatalogError> {
    let seed_file: SeedFile = serde_yaml::from_str(content).map_err(|e| {
        CatalogError::Configuration(format!("Failed to parse seed events: {}", e))
    })?;

    let mut events: Vec<Event> = Vec::with_capacity(seed_file.events.len());
    for (position, entry) in seed_file.events.into_iter().enumerate() {
        let id = entry.id.unwrap_or(position as u64 + 1);
        if id == 0 {
            return Err(CatalogError::Configuration(
                "Seed event id must be positive".to_string(),
            ));
        }
        if events.iter().any(|e| e.id == id) {
            return Err(CatalogError::Configuration(format!(
                "Duplicate seed event id {}",
                id
            )));
        }

        let data = NewEvent::try_from(entry.draft).map_err(|e| {
            CatalogError::Configuration(format!("Invalid seed event #{}: {}", position + 1, e))
        })?;
        events.push(Event::new(id, data));
    }

    Ok(events)
}
