//! Error types for audit submission.

/// Client-side rejection of operator input. Never reaches the network.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    /// One or more required fields are empty.
    #[error("{} required", join_fields(.0))]
    MissingFields(Vec<&'static str>),

    #[error("unknown channel: {0}")]
    UnknownChannel(String),

    #[error("customer_csatscore is not a number: {0}")]
    InvalidCsatScore(String),
}

fn join_fields(fields: &[&'static str]) -> String {
    match fields {
        [one] => format!("{} is", one),
        many => format!("{} are", many.join(" and ")),
    }
}

impl ValidationError {
    pub fn missing_fields(&self) -> &[&'static str] {
        match self {
            Self::MissingFields(fields) => fields,
            _ => &[],
        }
    }
}

/// Audit submission errors. All of them end the current attempt.
#[derive(Debug, thiserror::Error)]
pub enum AuditError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The service answered with a non-2xx status.
    #[error("Audit failed: {status} {status_text} - {body}")]
    Request {
        status: u16,
        status_text: String,
        body: String,
    },

    /// A 2xx body that does not match the response schema.
    #[error("Audit response did not match schema: {message}")]
    Schema { message: String, body: String },

    /// Connection, DNS or body read failure.
    #[error("Audit request could not be completed: {0}")]
    Transport(#[from] reqwest::Error),

    /// A submission from this session is still running.
    #[error("an audit is already in progress")]
    InFlight,
}

impl AuditError {
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Request { status, .. } => Some(*status),
            _ => None,
        }
    }
}

pub type AuditResult<T> = Result<T, AuditError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_message_names_every_field() {
        let one = ValidationError::MissingFields(vec!["ticket_id"]);
        assert_eq!(one.to_string(), "ticket_id is required");

        let both = ValidationError::MissingFields(vec!["ticket_id", "conversation"]);
        assert_eq!(both.to_string(), "ticket_id and conversation are required");
    }

    #[test]
    fn request_error_carries_status_and_body() {
        let err = AuditError::Request {
            status: 500,
            status_text: "Internal Server Error".to_string(),
            body: "internal error".to_string(),
        };
        assert_eq!(err.status(), Some(500));
        assert_eq!(
            err.to_string(),
            "Audit failed: 500 Internal Server Error - internal error"
        );
    }
}
