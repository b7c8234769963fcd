pub mod input;
pub mod output;

pub use input::{AuditForm, AuditInput, Channel};
pub use output::{
    AuditOutput, HealthStatus, Metadata, SectionResult, Sections, SubScore, ZeroTolerance,
};
