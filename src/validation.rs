//! Form Validation
//!
//! Regex rules for the RSVP and gift forms. Each validator returns a
//! per-field error map; a form is submitted only when the map is empty.

use regex::Regex;
use std::collections::BTreeMap;
use std::sync::OnceLock;

static NAME_RE: OnceLock<Regex> = OnceLock::new();
static EMAIL_RE: OnceLock<Regex> = OnceLock::new();
static PHONE_RE: OnceLock<Regex> = OnceLock::new();

fn name_re() -> &'static Regex {
    NAME_RE.get_or_init(|| Regex::new(r"^[A-Za-z ,.'-]+$").expect("valid name regex"))
}

fn email_re() -> &'static Regex {
    EMAIL_RE.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+$").expect("valid email regex"))
}

fn phone_re() -> &'static Regex {
    PHONE_RE.get_or_init(|| {
        Regex::new(r"^(\+[0-9]{1,2}\s?)?\(?[0-9]{3}\)?[\s.-]?[0-9]{3}[\s.-]?[0-9]{4}$").expect("valid phone regex")
    })
}

pub fn is_valid_name(name: &str) -> bool {
    name_re().is_match(name)
}

pub fn is_valid_email(email: &str) -> bool {
    email_re().is_match(email)
}

pub fn is_valid_phone(phone: &str) -> bool {
    phone_re().is_match(phone)
}

/// Form fields that can carry an error
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Field {
    FirstName,
    LastName,
    Email,
    Phone,
    Attending,
    Quantity,
}

pub type FormErrors = BTreeMap<Field, String>;

/// Raw RSVP form values
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RsvpForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub attending: Option<bool>,
}

impl RsvpForm {
    pub fn validate(&self) -> FormErrors {
        let mut errors = FormErrors::new();
        if !is_valid_name(&self.first_name) {
            errors.insert(Field::FirstName, "Invalid First Name".to_string());
        }
        if !is_valid_name(&self.last_name) {
            errors.insert(Field::LastName, "Invalid Last Name".to_string());
        }
        if !self.email.is_empty() && !is_valid_email(&self.email) {
            errors.insert(Field::Email, "Invalid Email".to_string());
        }
        if !self.phone.is_empty() && !is_valid_phone(&self.phone) {
            errors.insert(Field::Phone, "Invalid Phone Number".to_string());
        }
        if self.attending.is_none() {
            errors.insert(Field::Attending, "You must select if you are attending or not".to_string());
        }
        errors
    }
}

/// Raw gift-claim form values
#[derive(Debug, Clone, PartialEq)]
pub struct GiftForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub quantity: u32,
}

impl Default for GiftForm {
    fn default() -> Self {
        Self {
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            quantity: 1,
        }
    }
}

impl GiftForm {
    /// `remaining` is None for unlimited items; special funds skip the quantity check
    pub fn validate(&self, remaining: Option<u32>, is_special_fund: bool) -> FormErrors {
        let mut errors = FormErrors::new();
        if !is_valid_name(&self.first_name) {
            errors.insert(Field::FirstName, "Please enter a valid name".to_string());
        }
        if !is_valid_name(&self.last_name) {
            errors.insert(Field::LastName, "Please enter a valid name".to_string());
        }
        if !self.email.is_empty() && !is_valid_email(&self.email) {
            errors.insert(Field::Email, "Please enter a valid email".to_string());
        }
        if !is_special_fund {
            if self.quantity < 1 {
                errors.insert(Field::Quantity, "Quantity must be at least 1".to_string());
            } else if let Some(remaining) = remaining {
                if self.quantity > remaining {
                    errors.insert(Field::Quantity, format!("Only {} more needed", remaining));
                }
            }
        }
        errors
    }

    /// Quantity actually sent to the backend
    pub fn effective_quantity(&self, is_special_fund: bool) -> u32 {
        if is_special_fund { 1 } else { self.quantity }
    }
}
