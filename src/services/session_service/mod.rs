// src/services/session_service/mod.rs
//
// Submission lifecycle transitions on AppState: begin, finish, submit.

pub mod submit;
