// src/services/audit_service/mod.rs

pub mod client;
pub mod validate;

pub use client::AuditClient;
pub use validate::validate;
