pub mod audit_service;
pub mod result_service;
pub mod session_service;

pub use audit_service::{validate, AuditClient};
pub use result_service::{project, project_section};
