use crate::error::{AuditError, AuditResult};
use crate::models::{AppState, AuditForm, AuditInput, AuditOutput, RenderedAudit, SubmissionStatus};
use crate::services::{project, validate, AuditClient};
use chrono::Utc;
use log::{info, warn};

impl AppState {
    /// Starts a new submission.
    ///
    /// Refused while another one is in flight, leaving the state as is.
    /// Otherwise the previous result or error is cleared before validation.
    pub fn begin(&mut self, form: AuditForm) -> AuditResult<AuditInput> {
        if self.is_loading() {
            return Err(AuditError::InFlight);
        }

        self.status = SubmissionStatus::Validating;
        match validate(form) {
            Ok(input) => {
                info!("Audit form for ticket {} is valid", input.ticket_id);
                self.status = SubmissionStatus::Submitting {
                    ticket_id: input.ticket_id.clone(),
                };
                Ok(input)
            }
            Err(e) => {
                let err = AuditError::from(e);
                self.fail(&err);
                Err(err)
            }
        }
    }

    /// Records the outcome of the in-flight request.
    pub fn finish(&mut self, result: AuditResult<AuditOutput>) -> AuditResult<&RenderedAudit> {
        match result {
            Ok(output) => {
                let display = project(&output);
                self.status = SubmissionStatus::Rendered(Box::new(RenderedAudit {
                    output,
                    display,
                    received_at: Utc::now(),
                }));
                match &self.status {
                    SubmissionStatus::Rendered(rendered) => Ok(&**rendered),
                    _ => unreachable!("status was just set to Rendered"),
                }
            }
            Err(err) => {
                self.fail(&err);
                Err(err)
            }
        }
    }

    /// Validate, send, and record: one full pass through the lifecycle.
    pub async fn submit(
        &mut self,
        client: &AuditClient,
        form: AuditForm,
    ) -> AuditResult<&RenderedAudit> {
        let input = self.begin(form)?;
        let result = client.submit(&input).await;
        self.finish(result)
    }

    fn fail(&mut self, err: &AuditError) {
        warn!("Audit submission failed: {}", err);
        self.status = SubmissionStatus::Failed {
            message: err.to_string(),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Metadata, SectionResult, Sections, ZeroTolerance};

    fn output() -> AuditOutput {
        let empty = SectionResult {
            score: 0.0,
            subscores: Default::default(),
        };
        AuditOutput {
            sections: Sections {
                effectiveness: empty.clone(),
                efficiency: empty.clone(),
                tone_and_phrasing: empty,
            },
            zero_tolerance: ZeroTolerance {
                triggered: false,
                reason: None,
                evidence: vec![],
            },
            overall: 0.0,
            metadata: Metadata {
                ticket_id: "T-1".to_string(),
                agent: None,
                channel: None,
                tags: None,
                macros_used: None,
                model: "m1".to_string(),
                rubric_version: "v1".to_string(),
                redacted: true,
            },
        }
    }

    #[test]
    fn invalid_form_goes_back_to_idle_with_error() {
        let mut state = AppState::new();
        let err = state.begin(AuditForm::new("", "hi")).unwrap_err();
        assert!(matches!(err, AuditError::Validation(_)));
        assert_eq!(state.error(), Some("ticket_id is required"));
        assert!(!state.is_loading());
    }

    #[test]
    fn second_begin_while_in_flight_is_refused() {
        let mut state = AppState::new();
        state.begin(AuditForm::new("T-1", "hi")).unwrap();
        assert!(state.is_loading());

        let err = state.begin(AuditForm::new("T-2", "hello")).unwrap_err();
        assert!(matches!(err, AuditError::InFlight));
        assert_eq!(
            state.status(),
            &SubmissionStatus::Submitting {
                ticket_id: "T-1".to_string()
            }
        );
    }

    #[test]
    fn new_submission_clears_previous_result() {
        let mut state = AppState::new();
        state.begin(AuditForm::new("T-1", "hi")).unwrap();
        state.finish(Ok(output())).unwrap();
        assert!(state.result().is_some());

        state.begin(AuditForm::new("T-2", "again")).unwrap();
        assert!(state.result().is_none());
        assert!(state.error().is_none());

        state
            .finish(Err(AuditError::Request {
                status: 502,
                status_text: "Bad Gateway".to_string(),
                body: "upstream down".to_string(),
            }))
            .unwrap_err();
        assert!(state.result().is_none());
        assert_eq!(state.error(), Some("Audit failed: 502 Bad Gateway - upstream down"));
    }

    #[test]
    fn failed_begin_clears_previous_result_too() {
        let mut state = AppState::new();
        state.begin(AuditForm::new("T-1", "hi")).unwrap();
        state.finish(Ok(output())).unwrap();

        state.begin(AuditForm::new("T-1", "")).unwrap_err();
        assert!(state.result().is_none());
        assert_eq!(state.error(), Some("conversation is required"));
    }
}
