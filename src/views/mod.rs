// src/views/mod.rs
//
// Stateless plain-text renderers over a projected DisplayModel.

pub mod banner;
pub mod scorecard;
pub mod section;

pub use banner::{render_banner, POLICY_BREACH_FALLBACK};
pub use scorecard::{render_footer, render_header, render_scorecard};
pub use section::render_section;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Max characters per evidence quote. Overflow is elided in the output
    /// text only.
    pub evidence_width: Option<usize>,
}
