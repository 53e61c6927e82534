use serde::{Deserialize, Deserializer};
use summit_models::{
    contact::{
        ContactMessageContent, ContactName, ContactOrganization, ContactPersona, ContactRegion,
        ContactSubmission,
    },
    email_address::EmailAddress,
};

#[derive(Debug, Clone, Deserialize)]
pub struct ApiContactSubmission {
    pub name: ContactName,
    pub email: EmailAddress,
    pub org: ContactOrganization,
    pub region: ContactRegion,
    pub persona: ContactPersona,
    pub message: ContactMessageContent,
    /// May be omitted, but must be a string if present.
    #[serde(default, deserialize_with = "present_string")]
    pub honeypot: Option<String>,
}

fn present_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    String::deserialize(deserializer).map(Some)
}

impl From<ApiContactSubmission> for ContactSubmission {
    fn from(value: ApiContactSubmission) -> Self {
        Self {
            name: value.name,
            email: value.email,
            org: value.org,
            region: value.region,
            persona: value.persona,
            message: value.message,
            honeypot: value.honeypot,
        }
    }
}
