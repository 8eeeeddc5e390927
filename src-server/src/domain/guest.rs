//! Guest Entity
//!
//! A guest on the invitation list and their RSVP state.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::entity::Entity;

/// A guest on the list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Guest {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    /// None until the guest has responded
    pub attending: Option<bool>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Guest {
    pub fn new(id: i64, first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            id,
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: String::new(),
            phone: String::new(),
            attending: None,
            updated_at: None,
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl Entity for Guest {
    type Id = i64;

    fn id(&self) -> Self::Id {
        self.id
    }
}

/// Fields written by an RSVP. Empty email / phone leave the stored value alone.
#[derive(Debug, Clone, PartialEq)]
pub struct RsvpUpdate {
    pub email: String,
    pub phone: String,
    pub attending: bool,
}

/// "attending" / "not attending"
pub fn attending_label(attending: bool) -> &'static str {
    if attending {
        "attending"
    } else {
        "not attending"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guest_creation() {
        let guest = Guest::new(1, "John", "Doe");
        assert_eq!(guest.id(), 1);
        assert_eq!(guest.full_name(), "John Doe");
        assert!(guest.attending.is_none());
    }

    #[test]
    fn test_attending_label() {
        assert_eq!(attending_label(true), "attending");
        assert_eq!(attending_label(false), "not attending");
    }
}
