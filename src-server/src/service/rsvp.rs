//! RSVP Service

use serde::Deserialize;
use std::sync::Arc;
use tracing::info;

use super::ServiceError;
use crate::domain::{attending_label, RsvpUpdate};
use crate::normalize::{normalize_email, normalize_name, normalize_phone};
use crate::repository::GuestRepository;

/// Body of an RSVP submission
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RsvpRequest {
    #[serde(rename = "firstname", default)]
    pub first_name: String,
    #[serde(rename = "lastname", default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub attending: Option<bool>,
}

pub struct RsvpService {
    guests: Arc<dyn GuestRepository>,
}

impl RsvpService {
    pub fn new(guests: Arc<dyn GuestRepository>) -> Self {
        Self { guests }
    }

    /// Record an RSVP and return the confirmation message.
    pub async fn submit(&self, request: RsvpRequest) -> Result<String, ServiceError> {
        let first_name = normalize_name(&request.first_name);
        let last_name = normalize_name(&request.last_name);
        if first_name.is_empty() || last_name.is_empty() {
            return Err(ServiceError::InvalidRequest(
                "First name and last name are required".to_string(),
            ));
        }
        let attending = request.attending.ok_or_else(|| {
            ServiceError::InvalidRequest("Attending field is required".to_string())
        })?;

        let guest = self
            .guests
            .find_by_name(&first_name, &last_name)
            .await?
            .ok_or_else(|| ServiceError::GuestNotFound {
                first_name: first_name.clone(),
                last_name: last_name.clone(),
            })?;

        let update = RsvpUpdate {
            email: normalize_email(&request.email),
            phone: normalize_phone(request.phone.trim()),
            attending,
        };

        match guest.attending {
            None => {
                let guest = self.guests.update_rsvp(guest.id, &update).await?;
                info!(guest_id = guest.id, attending, "First RSVP recorded");
                Ok(format!(
                    "{} has been RSVP-ed as: {}",
                    guest.full_name(),
                    attending_label(attending)
                ))
            }
            Some(previous) if previous == attending => {
                info!(guest_id = guest.id, attending, "RSVP unchanged");
                Ok(format!(
                    "{} was already RSVP-ed as {}, so no update is necessary",
                    guest.full_name(),
                    attending_label(attending)
                ))
            }
            Some(previous) => {
                let guest = self.guests.update_rsvp(guest.id, &update).await?;
                info!(guest_id = guest.id, previous, attending, "RSVP changed");
                Ok(format!(
                    "{} was previously RSVP-ed as: {}, but has now been changed to be: {}",
                    guest.full_name(),
                    attending_label(previous),
                    attending_label(attending)
                ))
            }
        }
    }
}
