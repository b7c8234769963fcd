use crate::models::{
    AuditOutput, DisplayModel, MetadataDisplay, SectionDisplay, SectionKind, SectionResult,
    Sections, SubscoreDisplay, ZtpBadge, ZtpBanner,
};
use crate::utils::humanize_key;

fn section_of(sections: &Sections, kind: SectionKind) -> &SectionResult {
    match kind {
        SectionKind::Effectiveness => &sections.effectiveness,
        SectionKind::Efficiency => &sections.efficiency,
        SectionKind::ToneAndPhrasing => &sections.tone_and_phrasing,
    }
}

pub fn project_section(kind: SectionKind, section: &SectionResult) -> SectionDisplay {
    // IndexMap iterates in insertion order, i.e. the order the service sent
    let subscores = section
        .subscores
        .iter()
        .map(|(key, sub)| SubscoreDisplay {
            key: key.clone(),
            label: humanize_key(key),
            score: sub.score,
            evidence: sub.evidence.clone(),
        })
        .collect();

    SectionDisplay {
        kind,
        title: kind.title(),
        score: section.score,
        subscores,
    }
}

/// Maps a service response onto the structure the views render.
///
/// Pure: the same output always yields the same model. Subscore order and
/// evidence lists are carried over exactly.
pub fn project(output: &AuditOutput) -> DisplayModel {
    let ztp = &output.zero_tolerance;
    let (badge, banner) = if ztp.triggered {
        (
            ZtpBadge::Triggered,
            Some(ZtpBanner {
                reason: ztp.reason.clone(),
                evidence: ztp.evidence.clone(),
            }),
        )
    } else {
        (ZtpBadge::Clear, None)
    };

    DisplayModel {
        overall: output.overall,
        badge,
        banner,
        sections: SectionKind::ORDER
            .map(|kind| project_section(kind, section_of(&output.sections, kind))),
        metadata: MetadataDisplay {
            ticket_id: output.metadata.ticket_id.clone(),
            model: output.metadata.model.clone(),
            rubric_version: output.metadata.rubric_version.clone(),
            redacted: output.metadata.redacted,
        },
    }
}
