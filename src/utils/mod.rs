pub mod config;
pub mod log_utils;
pub mod text_utils;

pub use config::{AuditConfig, AUDIT_API_ENV, DEFAULT_AUDIT_API};
pub use log_utils::init_logging;
pub use text_utils::{elide, humanize_key};
