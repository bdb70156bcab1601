//! Contact form validation. Messages are never sent anywhere.

use thiserror::Error;

pub const CONTACT_THANKS: &str = "Thanks for your message! I will get back to you soon.";
pub const CONTACT_INCOMPLETE: &str = "Please fill in all required fields.";

/// Seconds before the status line clears itself.
pub const STATUS_CLEAR_SECS: u64 = 5;

/// Raw form input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// A form with every required field filled in (trimmed).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("Missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),
}

impl ContactError {
    pub fn user_message(&self) -> &'static str {
        CONTACT_INCOMPLETE
    }
}

impl ContactForm {
    pub fn validate(&self) -> Result<ContactSubmission, ContactError> {
        let fields = [
            ("name", self.name.trim()),
            ("email", self.email.trim()),
            ("message", self.message.trim()),
        ];
        let missing: Vec<&'static str> = fields
            .iter()
            .filter(|(_, value)| value.is_empty())
            .map(|(field, _)| *field)
            .collect();

        if !missing.is_empty() {
            return Err(ContactError::MissingFields(missing));
        }

        Ok(ContactSubmission {
            name: fields[0].1.to_string(),
            email: fields[1].1.to_string(),
            message: fields[2].1.to_string(),
        })
    }
}
