use std::fmt::Display;

use nutype::nutype;
use serde::{Deserialize, Serialize};

use crate::email_address::EmailAddress;

/// A message submitted through the contact form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: ContactName,
    pub email: EmailAddress,
    pub org: ContactOrganization,
    pub region: ContactRegion,
    pub persona: ContactPersona,
    pub message: ContactMessageContent,
    /// Hidden form field which humans leave empty.
    pub honeypot: Option<String>,
}

impl ContactSubmission {
    /// Whether the honeypot field has been filled in.
    pub fn is_spam(&self) -> bool {
        self.honeypot.as_deref().is_some_and(|x| !x.is_empty())
    }
}

// Lengths below count Unicode scalar values, not UTF-16 code units.

#[nutype(
    validate(len_char_min = 2, len_char_max = 100),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Display, Serialize, Deserialize)
)]
pub struct ContactName(String);

#[nutype(
    validate(len_char_min = 2, len_char_max = 200),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Display, Serialize, Deserialize)
)]
pub struct ContactOrganization(String);

#[nutype(
    validate(len_char_min = 2, len_char_max = 40),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Display, Serialize, Deserialize)
)]
pub struct ContactRegion(String);

#[nutype(
    validate(len_char_min = 3, len_char_max = 2000),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Display, Serialize, Deserialize)
)]
pub struct ContactMessageContent(String);

/// How the submitter relates to the company.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactPersona {
    Enterprise,
    Oem,
    Media,
    Careers,
    Other,
}

impl ContactPersona {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Enterprise => "enterprise",
            Self::Oem => "oem",
            Self::Media => "media",
            Self::Careers => "careers",
            Self::Other => "other",
        }
    }
}

impl Display for ContactPersona {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission(honeypot: Option<&str>) -> ContactSubmission {
        ContactSubmission {
            name: "Max Mustermann".try_into().unwrap(),
            email: "max.mustermann@example.com".parse().unwrap(),
            org: "Example Corp".try_into().unwrap(),
            region: "EMEA".try_into().unwrap(),
            persona: ContactPersona::Enterprise,
            message: "Hello World!".try_into().unwrap(),
            honeypot: honeypot.map(Into::into),
        }
    }

    #[test]
    fn spam_detection() {
        assert!(!submission(None).is_spam());
        assert!(!submission(Some("")).is_spam());
        assert!(submission(Some("https://spam.example")).is_spam());
        assert!(submission(Some(" ")).is_spam());
    }

    #[test]
    fn name_length_bounds() {
        assert!(ContactName::try_new("M".to_owned()).is_err());
        assert!(ContactName::try_new("Mo".to_owned()).is_ok());
        assert!(ContactName::try_new("x".repeat(100)).is_ok());
        assert!(ContactName::try_new("x".repeat(101)).is_err());
    }

    #[test]
    fn lengths_count_characters() {
        assert!(ContactRegion::try_new("ü".repeat(40)).is_ok());
        assert!(ContactRegion::try_new("ü".repeat(41)).is_err());
        assert!(ContactName::try_new("🚀".to_owned()).is_err());
        assert!(ContactName::try_new("🚀🚀".to_owned()).is_ok());
    }

    #[test]
    fn message_length_bounds() {
        assert!(ContactMessageContent::try_new(String::new()).is_err());
        assert!(ContactMessageContent::try_new("Hi".to_owned()).is_err());
        assert!(ContactMessageContent::try_new("Hey".to_owned()).is_ok());
        assert!(ContactMessageContent::try_new("x".repeat(2000)).is_ok());
        assert!(ContactMessageContent::try_new("x".repeat(2001)).is_err());
    }

    #[test]
    fn organization_length_bounds() {
        assert!(ContactOrganization::try_new("X".to_owned()).is_err());
        assert!(ContactOrganization::try_new("x".repeat(200)).is_ok());
        assert!(ContactOrganization::try_new("x".repeat(201)).is_err());
    }

    #[test]
    fn persona_serde() {
        for (json, persona) in [
            ("\"enterprise\"", ContactPersona::Enterprise),
            ("\"oem\"", ContactPersona::Oem),
            ("\"media\"", ContactPersona::Media),
            ("\"careers\"", ContactPersona::Careers),
            ("\"other\"", ContactPersona::Other),
        ] {
            assert_eq!(serde_json::from_str::<ContactPersona>(json).unwrap(), persona);
            assert_eq!(persona.to_string(), json.trim_matches('"'));
        }

        assert!(serde_json::from_str::<ContactPersona>("\"bogus\"").is_err());
        assert!(serde_json::from_str::<ContactPersona>("\"OEM\"").is_err());
    }
}
