use crate::models::DisplayModel;
use crate::views::{render_banner, render_section, RenderOptions};
use std::fmt::Write;

// Always shown once a result exists
pub fn render_header(model: &DisplayModel) -> String {
    format!(
        "Audit Results    Overall: {}    ZTP: {}\n",
        model.overall, model.badge
    )
}

pub fn render_footer(model: &DisplayModel) -> String {
    let meta = &model.metadata;
    format!(
        "Ticket {} · model {} · rubric {} · {}\n",
        meta.ticket_id,
        meta.model,
        meta.rubric_version,
        if meta.redacted { "redacted" } else { "unredacted" }
    )
}

/// The full result: header, optional banner, the three sections, footer.
pub fn render_scorecard(model: &DisplayModel, opts: &RenderOptions) -> String {
    let mut out = render_header(model);
    if let Some(banner) = render_banner(model, opts) {
        out.push('\n');
        out.push_str(&banner);
    }
    for section in &model.sections {
        out.push('\n');
        out.push_str(&render_section(section, opts));
    }
    let _ = write!(out, "\n{}", render_footer(model));
    out
}
