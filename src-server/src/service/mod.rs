//! Service Layer
//!
//! Business rules for RSVPs and registry gifts. Services validate and
//! normalize requests, talk to repositories through their traits, and
//! produce the message shown to the guest.

mod registry;
mod rsvp;

#[cfg(test)]
mod mock;

pub use registry::{GiftRequest, RegistryService};
pub use rsvp::{RsvpRequest, RsvpService};

use crate::domain::{DomainError, GiftError, GiftValidationError};

/// Errors returned by services; the API layer maps them to status codes.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ServiceError {
    /// The request is missing or carries an unusable field
    #[error("{0}")]
    InvalidRequest(String),

    #[error("{first_name} {last_name} was not found in the guest list")]
    GuestNotFound { first_name: String, last_name: String },

    #[error(transparent)]
    Gift(#[from] GiftValidationError),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl From<GiftError> for ServiceError {
    fn from(e: GiftError) -> Self {
        match e {
            GiftError::Rejected(e) => ServiceError::Gift(e),
            GiftError::Storage(e) => ServiceError::Domain(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gift_error_conversion() {
        let rejected = GiftError::Rejected(GiftValidationError::FullyGifted { label: "Mixer".into() });
        assert!(matches!(ServiceError::from(rejected), ServiceError::Gift(_)));

        let storage = GiftError::Storage(DomainError::Internal("locked".into()));
        assert_eq!(
            ServiceError::from(storage),
            ServiceError::Domain(DomainError::Internal("locked".into()))
        );
    }

    #[test]
    fn test_guest_not_found_message() {
        let err = ServiceError::GuestNotFound {
            first_name: "Sam".into(),
            last_name: "Lee".into(),
        };
        assert_eq!(err.to_string(), "Sam Lee was not found in the guest list");
    }
}
