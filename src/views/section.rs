use crate::models::SectionDisplay;
use crate::utils::elide;
use crate::views::RenderOptions;
use std::fmt::Write;

pub(crate) fn push_evidence(out: &mut String, evidence: &[String], indent: &str, opts: &RenderOptions) {
    for quote in evidence {
        let quote = match opts.evidence_width {
            Some(width) => elide(quote, width),
            None => quote.clone(),
        };
        let _ = writeln!(out, "{}- “{}”", indent, quote);
    }
}

/// One section block: title and score, then each subscore with its evidence.
pub fn render_section(section: &SectionDisplay, opts: &RenderOptions) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} (Score: {})", section.title, section.score);
    for sub in &section.subscores {
        let _ = writeln!(out, "  {}: {}", sub.label, sub.score);
        // no evidence block at all for an empty list
        if !sub.evidence.is_empty() {
            push_evidence(&mut out, &sub.evidence, "      ", opts);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{SectionKind, SubscoreDisplay};

    fn section() -> SectionDisplay {
        SectionDisplay {
            kind: SectionKind::ToneAndPhrasing,
            title: SectionKind::ToneAndPhrasing.title(),
            score: 3.7,
            subscores: vec![
                SubscoreDisplay {
                    key: "empathy".to_string(),
                    label: "empathy".to_string(),
                    score: 4.0,
                    evidence: vec!["I'm so sorry about the delay, let me fix that.".to_string()],
                },
                SubscoreDisplay {
                    key: "professionalism".to_string(),
                    label: "professionalism".to_string(),
                    score: 4.0,
                    evidence: vec![],
                },
            ],
        }
    }

    #[test]
    fn renders_scores_and_quotes() {
        let text = render_section(&section(), &RenderOptions::default());
        assert_eq!(
            text,
            "Tone & Phrasing (Score: 3.7)\n\
             \x20 empathy: 4\n\
             \x20     - “I'm so sorry about the delay, let me fix that.”\n\
             \x20 professionalism: 4\n"
        );
    }

    #[test]
    fn empty_evidence_renders_no_list() {
        let text = render_section(&section(), &RenderOptions::default());
        let after = text.split("professionalism: 4\n").nth(1).unwrap();
        assert!(after.is_empty());
        assert_eq!(text.matches('“').count(), 1);
    }

    #[test]
    fn width_elides_rendered_quote_only() {
        let model = section();
        let opts = RenderOptions {
            evidence_width: Some(12),
        };
        let text = render_section(&model, &opts);
        assert!(text.contains("- “I'm so sorr…”"));
        assert_eq!(
            model.subscores[0].evidence[0],
            "I'm so sorry about the delay, let me fix that."
        );
    }
}
