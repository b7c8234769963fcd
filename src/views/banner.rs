use crate::models::DisplayModel;
use crate::views::section::push_evidence;
use crate::views::RenderOptions;
use std::fmt::Write;

pub const POLICY_BREACH_FALLBACK: &str = "policy breach";

/// Zero-tolerance banner. `None` unless the flag was triggered.
pub fn render_banner(model: &DisplayModel, opts: &RenderOptions) -> Option<String> {
    let banner = model.banner.as_ref()?;
    let reason = banner
        .reason
        .as_deref()
        .filter(|r| !r.trim().is_empty())
        .unwrap_or(POLICY_BREACH_FALLBACK);

    let mut out = String::new();
    let _ = writeln!(out, "!! Zero Tolerance Triggered: {}", reason);
    if !banner.evidence.is_empty() {
        push_evidence(&mut out, &banner.evidence, "   ", opts);
    }
    Some(out)
}
