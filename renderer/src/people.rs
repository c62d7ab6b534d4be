//! People directory records.
//!
//! Storage and CRUD live in the CMS backend; this module only carries the
//! record shape, the one presence check the backend enforces, and the order
//! the site lists people in.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A person shown on staff and faculty pages.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Person {
    /// Display name (required)
    pub name: String,
    /// Honorific or academic title
    pub title: Option<String>,
    /// Portrait reference
    #[serde(rename = "photoUrl")]
    pub photo_url: Option<String>,
    /// Contact address
    pub email: Option<String>,
    /// Biography text
    pub bio: Option<String>,
    /// Role within the organisation
    pub position: Option<String>,
    /// Grouping used by listing pages
    pub category: Option<String>,
    /// Sort key, lower comes first
    pub priority_order: i32,
}

/// Record rejected by the presence check.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PersonError {
    /// `name` is empty or missing
    #[error("person record has no name")]
    MissingName,
}

impl Person {
    /// Check the fields the backend requires.
    pub fn validate(&self) -> Result<(), PersonError> {
        if self.name.trim().is_empty() {
            return Err(PersonError::MissingName);
        }
        Ok(())
    }
}

/// Order people for display: ascending `priority_order`, authored order
/// among equals.
pub fn sort_people(people: &mut [Person]) {
    people.sort_by_key(|person| person.priority_order);
}
