use crate::models::report::section::{SectionDisplay, SectionKind};
use serde::Serialize;
use std::fmt;

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ZtpBadge {
    Triggered,
    Clear,
}

impl fmt::Display for ZtpBadge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let badge_str = match self {
            ZtpBadge::Triggered => "Triggered",
            ZtpBadge::Clear => "Clear",
        };
        write!(f, "{}", badge_str)
    }
}

// Present only for a triggered zero-tolerance flag
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ZtpBanner {
    pub reason: Option<String>,
    pub evidence: Vec<String>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct MetadataDisplay {
    pub ticket_id: String,
    pub model: String,
    pub rubric_version: String,
    pub redacted: bool,
}

/// Display-ready projection of an audit result.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct DisplayModel {
    pub overall: f64,
    pub badge: ZtpBadge,
    pub banner: Option<ZtpBanner>,
    pub sections: [SectionDisplay; 3],
    pub metadata: MetadataDisplay,
}

impl DisplayModel {
    pub fn section(&self, kind: SectionKind) -> &SectionDisplay {
        // sections are always built in SectionKind::ORDER
        let idx = SectionKind::ORDER
            .iter()
            .position(|k| *k == kind)
            .unwrap_or_default();
        &self.sections[idx]
    }
}
