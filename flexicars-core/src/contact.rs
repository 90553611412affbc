//! Contact form fields and their validation gate.
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

static EMAIL_RE: Lazy<Option<Regex>> = Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").ok());
static PHONE_RE: Lazy<Option<Regex>> = Lazy::new(|| Regex::new(r"^[+]?[0-9\s\-()]{10,}$").ok());

/// Required contact fields, in the order they are checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactField {
    FirstName,
    LastName,
    Email,
    Phone,
    Subject,
    Message,
}

impl ContactField {
    pub const ALL: [Self; 6] = [
        Self::FirstName,
        Self::LastName,
        Self::Email,
        Self::Phone,
        Self::Subject,
        Self::Message,
    ];

    /// The `name` attribute of the form control.
    #[must_use]
    pub const fn form_name(self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Subject => "subject",
            Self::Message => "message",
        }
    }

    /// Lower-case label used in validation messages.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::FirstName => "first name",
            Self::LastName => "last name",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Subject => "subject",
            Self::Message => "message",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please fill in the {} field.", .0.label())]
    MissingField(ContactField),
    #[error("Please enter a valid email address.")]
    InvalidEmail,
    #[error("Please enter a valid phone number.")]
    InvalidPhone,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactFields {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub message: String,
}

impl ContactFields {
    /// Pick the contact fields out of captured form entries; unknown keys are ignored.
    #[must_use]
    pub fn from_entries(entries: &BTreeMap<String, String>) -> Self {
        let take = |field: ContactField| {
            entries
                .get(field.form_name())
                .cloned()
                .unwrap_or_default()
        };
        Self {
            first_name: take(ContactField::FirstName),
            last_name: take(ContactField::LastName),
            email: take(ContactField::Email),
            phone: take(ContactField::Phone),
            subject: take(ContactField::Subject),
            message: take(ContactField::Message),
        }
    }

    #[must_use]
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::FirstName => &self.first_name,
            ContactField::LastName => &self.last_name,
            ContactField::Email => &self.email,
            ContactField::Phone => &self.phone,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        }
    }

    #[must_use]
    pub fn to_entries(&self) -> BTreeMap<String, String> {
        ContactField::ALL
            .iter()
            .map(|field| (field.form_name().to_string(), self.get(*field).to_string()))
            .collect()
    }
}

/// Check required fields in order, then the email and phone shapes. First failure wins.
///
/// # Errors
///
/// Returns the first [`ValidationError`] encountered.
pub fn validate(fields: &ContactFields) -> Result<(), ValidationError> {
    if let Some(missing) = ContactField::ALL
        .into_iter()
        .find(|field| fields.get(*field).trim().is_empty())
    {
        return Err(ValidationError::MissingField(missing));
    }
    if !is_match(&EMAIL_RE, &fields.email) {
        return Err(ValidationError::InvalidEmail);
    }
    if !is_match(&PHONE_RE, &fields.phone) {
        return Err(ValidationError::InvalidPhone);
    }
    Ok(())
}

fn is_match(re: &Lazy<Option<Regex>>, value: &str) -> bool {
    re.as_ref().is_some_and(|re| re.is_match(value))
}

#[cfg(test)]
pub(crate) fn valid_fields() -> ContactFields {
    ContactFields {
        first_name: String::from("Asha"),
        last_name: String::from("Rao"),
        email: String::from("asha@example.com"),
        phone: String::from("+91 98765 43210"),
        subject: String::from("Booking"),
        message: String::from("Is the Q7 free next weekend?"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_well_formed_input() {
        assert_eq!(validate(&valid_fields()), Ok(()));
    }

    #[test]
    fn each_missing_field_is_reported_by_name() {
        for field in ContactField::ALL {
            let mut entries = valid_fields().to_entries();
            entries.insert(field.form_name().to_string(), String::from("   "));
            let fields = ContactFields::from_entries(&entries);
            assert_eq!(validate(&fields), Err(ValidationError::MissingField(field)));
        }
    }

    #[test]
    fn first_missing_field_wins() {
        let fields = ContactFields {
            last_name: String::new(),
            message: String::new(),
            ..valid_fields()
        };
        assert_eq!(
            validate(&fields),
            Err(ValidationError::MissingField(ContactField::LastName))
        );
    }

    #[test]
    fn rejects_bad_email_before_phone() {
        let fields = ContactFields {
            email: String::from("bad"),
            phone: String::from("12"),
            ..valid_fields()
        };
        assert_eq!(validate(&fields), Err(ValidationError::InvalidEmail));
        let fields = ContactFields {
            email: String::from("two@@example.com"),
            ..valid_fields()
        };
        assert_eq!(validate(&fields), Err(ValidationError::InvalidEmail));
    }

    #[test]
    fn phone_needs_ten_allowed_characters() {
        let short = ContactFields {
            phone: String::from("12345"),
            ..valid_fields()
        };
        assert_eq!(validate(&short), Err(ValidationError::InvalidPhone));
        let letters = ContactFields {
            phone: String::from("call me maybe"),
            ..valid_fields()
        };
        assert_eq!(validate(&letters), Err(ValidationError::InvalidPhone));
        let formatted = ContactFields {
            phone: String::from("(080) 555-0199"),
            ..valid_fields()
        };
        assert_eq!(validate(&formatted), Ok(()));
    }

    #[test]
    fn messages_match_the_alert_copy() {
        assert_eq!(
            ValidationError::MissingField(ContactField::FirstName).to_string(),
            "Please fill in the first name field."
        );
        assert_eq!(
            ValidationError::InvalidPhone.to_string(),
            "Please enter a valid phone number."
        );
    }
}
