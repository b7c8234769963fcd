// src/models/mod.rs

pub mod app;
pub mod audit;
pub mod report;

pub use app::{AppState, RenderedAudit, SubmissionStatus};
pub use audit::{
    AuditForm, AuditInput, AuditOutput, Channel, HealthStatus, Metadata, SectionResult, Sections,
    SubScore, ZeroTolerance,
};
pub use report::{
    DisplayModel, MetadataDisplay, SectionDisplay, SectionKind, SubscoreDisplay, ZtpBadge,
    ZtpBanner,
};
