use crate::models::{AuditOutput, DisplayModel};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq)]
pub struct RenderedAudit {
    pub output: AuditOutput,
    pub display: DisplayModel,
    pub received_at: DateTime<Utc>,
}

// Submission lifecycle. Exactly one of these at a time, so a stale result
// can never sit next to a fresh error or a running request.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Failed {
        message: String,
    },
    Validating,
    Submitting {
        ticket_id: String,
    },
    Rendered(Box<RenderedAudit>),
}

/// Interaction state owned by one operator session.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub(crate) status: SubmissionStatus,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> &SubmissionStatus {
        &self.status
    }

    // The submission control is disabled while this is true
    pub fn is_loading(&self) -> bool {
        matches!(self.status, SubmissionStatus::Submitting { .. })
    }

    pub fn result(&self) -> Option<&RenderedAudit> {
        match &self.status {
            SubmissionStatus::Rendered(rendered) => Some(&**rendered),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.status {
            SubmissionStatus::Failed { message } => Some(message.as_str()),
            _ => None,
        }
    }
}
