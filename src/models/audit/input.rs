use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// Support channel the conversation happened on
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    Email,
    Chat,
    Phone,
}

impl Channel {
    pub const ALL: [Channel; 3] = [Channel::Email, Channel::Chat, Channel::Phone];

    pub fn as_str(&self) -> &'static str {
        match self {
            Channel::Email => "email",
            Channel::Chat => "chat",
            Channel::Phone => "phone",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Channel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Channel::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| s.to_string())
    }
}

/// Request body for `POST /audit`.
///
/// Unset optional fields are left out of the JSON entirely.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AuditInput {
    pub ticket_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel: Option<Channel>,
    pub conversation: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub macros_used: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_csatscore: Option<f64>,
}

// Raw operator input, before validation
#[derive(Debug, Clone, Default)]
pub struct AuditForm {
    pub ticket_id: String,
    pub agent: String,
    pub channel: String,
    pub conversation: String,
    pub macros_used: Vec<String>,
    pub tags: Vec<String>,
    pub customer_csatscore: String,
}

impl AuditForm {
    pub fn new(ticket_id: impl Into<String>, conversation: impl Into<String>) -> Self {
        Self {
            ticket_id: ticket_id.into(),
            conversation: conversation.into(),
            ..Default::default()
        }
    }
}
