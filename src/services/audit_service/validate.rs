use crate::error::ValidationError;
use crate::models::{AuditForm, AuditInput, Channel};

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

fn optional_text(value: String) -> Option<String> {
    if is_blank(&value) {
        None
    } else {
        Some(value)
    }
}

fn optional_list(values: Vec<String>) -> Option<Vec<String>> {
    let kept: Vec<String> = values.into_iter().filter(|v| !is_blank(v)).collect();
    if kept.is_empty() {
        None
    } else {
        Some(kept)
    }
}

/// Turns raw operator input into a request body, or names what is missing.
///
/// `ticket_id` and `conversation` are required. Everything else passes through
/// as typed when present and is dropped when empty, so the body never carries
/// `""` or `[]` for an optional field.
pub fn validate(form: AuditForm) -> Result<AuditInput, ValidationError> {
    let mut missing = Vec::new();
    if is_blank(&form.ticket_id) {
        missing.push("ticket_id");
    }
    if is_blank(&form.conversation) {
        missing.push("conversation");
    }
    if !missing.is_empty() {
        return Err(ValidationError::MissingFields(missing));
    }

    let channel = match optional_text(form.channel) {
        Some(raw) => Some(
            raw.parse::<Channel>()
                .map_err(ValidationError::UnknownChannel)?,
        ),
        None => None,
    };

    let customer_csatscore = match optional_text(form.customer_csatscore) {
        Some(raw) => Some(
            raw.trim()
                .parse::<f64>()
                .ok()
                .filter(|n| n.is_finite())
                .ok_or(ValidationError::InvalidCsatScore(raw))?,
        ),
        None => None,
    };

    Ok(AuditInput {
        ticket_id: form.ticket_id,
        agent: optional_text(form.agent),
        channel,
        conversation: form.conversation,
        macros_used: optional_list(form.macros_used),
        tags: optional_list(form.tags),
        customer_csatscore,
    })
}
