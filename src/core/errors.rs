// Domain error types - every failure is a recoverable, caller-facing condition

use thiserror::Error;

/// Main error type for the catalog service
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// Missing or malformed input to a create/register call (HTTP 400)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Unknown event id (HTTP 404 on lookups, 400 on registration)
    #[error("Event {0} not found")]
    NotFound(u64),

    /// Event already holds `capacity` registrations (HTTP 400)
    #[error("Event is full")]
    CapacityExceeded,

    /// Student id already registered for the event (HTTP 400)
    #[error("Already registered")]
    DuplicateRegistration,

    /// Configuration error (HTTP 500)
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl CatalogError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            CatalogError::Validation(_) => 400,
            CatalogError::NotFound(_) => 404,
            CatalogError::CapacityExceeded => 400,
            CatalogError::DuplicateRegistration => 400,
            CatalogError::Configuration(_) => 500,
        }
    }

    /// Get user-facing message
    ///
    /// Registration failures keep the wording the web client matches on.
    pub fn user_message(&self) -> String {
        match self {
            CatalogError::Validation(reason) => reason.clone(),
            CatalogError::NotFound(_) => "Event not found".to_string(),
            CatalogError::CapacityExceeded => "Event is full".to_string(),
            CatalogError::DuplicateRegistration => "Already registered".to_string(),
            CatalogError::Configuration(_) => "Internal error".to_string(),
        }
    }

    /// Whether this is an expected registration outcome rather than bad input
    pub fn is_registration_rejection(&self) -> bool {
        matches!(
            self,
            CatalogError::NotFound(_)
                | CatalogError::CapacityExceeded
                | CatalogError::DuplicateRegistration
        )
    }
}
