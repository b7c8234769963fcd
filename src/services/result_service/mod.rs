pub mod project;

pub use project::{project, project_section};
