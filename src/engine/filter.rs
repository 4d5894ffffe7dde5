// Event filtering - category match and free-text search

use crate::core::models::Event;

/// Conjunctive filter over events
///
/// Empty strings are treated the same as absent filters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventFilter {
    category: Option<String>,
    search: Option<String>,
}

impl EventFilter {
    pub fn new(category: Option<&str>, search: Option<&str>) -> Self {
        let filter = match category {
            Some(category) => Self::default().with_category(category),
            None => Self::default(),
        };
        match search {
            Some(term) => filter.with_search(term),
            None => filter,
        }
    }

    /// Keep only events whose category equals `category`, ignoring case
    pub fn with_category(mut self, category: &str) -> Self {
        self.category = Some(category.to_lowercase()).filter(|c| !c.is_empty());
        self
    }

    /// Keep only events mentioning `term` in title, description or location
    pub fn with_search(mut self, term: &str) -> Self {
        self.search = Some(term.to_lowercase()).filter(|t| !t.is_empty());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.category.is_none() && self.search.is_none()
    }

    pub fn matches(&self, event: &Event) -> bool {
        if let Some(ref category) = self.category {
            if event.category.to_lowercase() != *category {
                return false;
            }
        }

        if let Some(ref term) = self.search {
            let hit = event.title.to_lowercase().contains(term.as_str())
                || event.description.to_lowercase().contains(term.as_str())
                || event.location.to_lowercase().contains(term.as_str());
            if !hit {
                return false;
            }
        }

        true
    }
}
