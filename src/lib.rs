//! Client for a remote customer-support QA audit service.
//!
//! Validates operator input, submits it over HTTP, and turns the typed
//! verdict into an ordered display model for the text renderers.

pub mod error;
pub mod models;
pub mod services;
pub mod utils;
pub mod views;

pub use error::{AuditError, AuditResult, ValidationError};
pub use models::{AppState, AuditForm, AuditInput, AuditOutput, DisplayModel, SubmissionStatus};
pub use services::{project, validate, AuditClient};
pub use utils::AuditConfig;
pub use views::{render_scorecard, RenderOptions};
