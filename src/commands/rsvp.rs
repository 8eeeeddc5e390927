//! RSVP Commands

use serde::Serialize;

use super::{endpoint, log, log_error};
use crate::models::ApiResponse;
use crate::validation::RsvpForm;

pub const RSVP_SUCCESS_FALLBACK: &str = "Thank you for your RSVP!";
pub const RSVP_ERROR_FALLBACK: &str = "There was an error submitting your RSVP. Please try again.";

#[derive(Debug, Serialize)]
pub struct RsvpArgs<'a> {
    pub firstname: &'a str,
    pub lastname: &'a str,
    pub email: &'a str,
    pub phone: &'a str,
    pub attending: bool,
}

impl<'a> RsvpArgs<'a> {
    /// None until attendance has been chosen
    pub fn from_form(form: &'a RsvpForm) -> Option<Self> {
        Some(Self {
            firstname: form.first_name.trim(),
            lastname: form.last_name.trim(),
            email: form.email.trim(),
            phone: form.phone.trim(),
            attending: form.attending?,
        })
    }
}

/// PATCH /v1/api/rsvp
pub async fn submit_rsvp(args: &RsvpArgs<'_>) -> Result<ApiResponse, String> {
    log(&format!("[RSVP] Submitting for {} {}", args.firstname, args.lastname));
    let response = reqwest::Client::new()
        .patch(endpoint("/v1/api/rsvp"))
        .json(args)
        .send()
        .await
        .map_err(|e| {
            log_error(&format!("[RSVP] Request failed: {}", e));
            e.to_string()
        })?;

    let status = response.status();
    let body: ApiResponse = response.json().await.map_err(|e| {
        log_error(&format!("[RSVP] Bad response ({}): {}", status, e));
        e.to_string()
    })?;
    if !body.success {
        log_error(&format!("[RSVP] Rejected ({}): {:?}", status, body.message));
    }
    Ok(body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_require_attendance() {
        let mut form = RsvpForm {
            first_name: " John ".to_string(),
            last_name: "Doe".to_string(),
            ..Default::default()
        };
        assert!(RsvpArgs::from_form(&form).is_none());

        form.attending = Some(false);
        let args = RsvpArgs::from_form(&form).unwrap();
        assert_eq!(args.firstname, "John");
        assert!(!args.attending);
    }

    #[test]
    fn test_wire_format() {
        let form = RsvpForm {
            first_name: "Jane".to_string(),
            last_name: "Smith".to_string(),
            email: "jane@example.com".to_string(),
            phone: String::new(),
            attending: Some(true),
        };
        let json = serde_json::to_value(RsvpArgs::from_form(&form).unwrap()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "firstname": "Jane",
                "lastname": "Smith",
                "email": "jane@example.com",
                "phone": "",
                "attending": true
            })
        );
    }
}
