//! Contact Form Validation
//!
//! The form is a demo: a complete submission is acknowledged and nothing
//! is sent anywhere.

use crate::config::CONTACT_INCOMPLETE_HINT;

/// A complete, trimmed contact submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    /// Names of the fields left blank, in form order
    Incomplete(Vec<&'static str>),
}

impl std::fmt::Display for ContactError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContactError::Incomplete(_) => write!(f, "{}", CONTACT_INCOMPLETE_HINT),
        }
    }
}

impl std::error::Error for ContactError {}

pub fn validate_contact(name: &str, email: &str, message: &str) -> Result<ContactMessage, ContactError> {
    let (name, email, message) = (name.trim(), email.trim(), message.trim());
    let missing: Vec<&'static str> = [("name", name), ("email", email), ("message", message)]
        .into_iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(field, _)| field)
        .collect();

    if !missing.is_empty() {
        return Err(ContactError::Incomplete(missing));
    }

    Ok(ContactMessage {
        name: name.to_string(),
        email: email.to_string(),
        message: message.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complete_submission_is_trimmed() {
        let msg = validate_contact(" Ann ", "ann@example.com\n", " hi ").unwrap();
        assert_eq!(msg.name, "Ann");
        assert_eq!(msg.email, "ann@example.com");
        assert_eq!(msg.message, "hi");
    }

    #[test]
    fn test_blank_fields_are_reported() {
        let err = validate_contact("Ann", "   ", "").unwrap_err();
        assert_eq!(err, ContactError::Incomplete(vec!["email", "message"]));
        assert_eq!(err.to_string(), CONTACT_INCOMPLETE_HINT);
    }

    #[test]
    fn test_all_blank() {
        assert!(validate_contact("", "", "").is_err());
    }
}
