//! Server-side validation of the registration form

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::ser::{Serialize, SerializeMap, Serializer};

use signup_shared::constants::{MAX_PHONE_DIGITS, MIN_PASSWORD_LENGTH, MIN_PHONE_DIGITS};

use crate::domain::registration::fields;
use crate::domain::RegistrationRequest;

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

static PHONE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!("^[0-9]{{{},{}}}$", MIN_PHONE_DIGITS, MAX_PHONE_DIGITS))
        .expect("phone pattern compiles")
});

/// Field name to error message, one message per invalid field, kept in
/// form order. Serializes as a plain JSON object.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(Vec<(String, String)>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a message for `field`, replacing any earlier one.
    pub fn add(&mut self, field: &str, message: &str) {
        match self.0.iter_mut().find(|(name, _)| name == field) {
            Some((_, existing)) => *existing = message.to_string(),
            None => self.0.push((field.to_string(), message.to_string())),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, message)| message.as_str())
    }

    pub fn contains(&self, field: &str) -> bool {
        self.get(field).is_some()
    }

    pub fn fields(&self) -> Vec<&str> {
        self.0.iter().map(|(name, _)| name.as_str()).collect()
    }
}

impl Serialize for ValidationErrors {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (field, message) in &self.0 {
            map.serialize_entry(field, message)?;
        }
        map.end()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: Vec<String> = self
            .0
            .iter()
            .map(|(field, message)| format!("{}: {}", field, message))
            .collect();
        f.write_str(&rendered.join(", "))
    }
}

/// Checks every field independently and collects all failures.
/// An empty result means the form is valid.
pub fn validate_registration(request: &RegistrationRequest) -> ValidationErrors {
    let password = request.password.as_deref().unwrap_or_default();

    let checks = [
        (fields::FULL_NAME, check_full_name(request.full_name.as_deref())),
        (fields::EMAIL, check_email(request.email.as_deref())),
        (fields::PHONE, check_phone(request.phone.as_deref())),
        (fields::PASSWORD, check_password(password)),
        (
            fields::CONFIRM_PASSWORD,
            check_confirm_password(password, request.confirm_password.as_deref()),
        ),
    ];

    let mut errors = ValidationErrors::new();
    for (field, failure) in checks {
        if let Some(message) = failure {
            errors.add(field, message);
        }
    }
    errors
}

fn check_full_name(full_name: Option<&str>) -> Option<&'static str> {
    match full_name {
        Some(name) if !name.trim().is_empty() => None,
        _ => Some("Full Name is required"),
    }
}

fn check_email(email: Option<&str>) -> Option<&'static str> {
    let email = email.unwrap_or_default().trim();
    if email.is_empty() {
        Some("Email is required")
    } else if !EMAIL_PATTERN.is_match(email) {
        Some("Invalid email format")
    } else {
        None
    }
}

fn check_phone(phone: Option<&str>) -> Option<&'static str> {
    let phone = phone.unwrap_or_default().trim();
    if phone.is_empty() {
        Some("Phone is required")
    } else if !PHONE_PATTERN.is_match(phone) {
        Some("Phone must contain 10 to 15 digits only")
    } else {
        None
    }
}

// Length is counted in characters of the raw value, no trimming.
fn check_password(password: &str) -> Option<&'static str> {
    if password.is_empty() {
        Some("Password is required")
    } else if password.chars().count() < MIN_PASSWORD_LENGTH {
        Some("Password must be at least 6 characters long")
    } else {
        None
    }
}

fn check_confirm_password(password: &str, confirm_password: Option<&str>) -> Option<&'static str> {
    let confirm_password = confirm_password.unwrap_or_default();
    if confirm_password.is_empty() {
        Some("Confirm Password is required")
    } else if password != confirm_password {
        Some("Passwords do not match")
    } else {
        None
    }
}
