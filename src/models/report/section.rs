use serde::Serialize;
use std::fmt;

// Which of the three fixed sections a display block belongs to
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    Effectiveness,
    Efficiency,
    ToneAndPhrasing,
}

impl SectionKind {
    // Display order of the sections
    pub const ORDER: [SectionKind; 3] = [
        SectionKind::Effectiveness,
        SectionKind::Efficiency,
        SectionKind::ToneAndPhrasing,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            SectionKind::Effectiveness => "Effectiveness",
            SectionKind::Efficiency => "Efficiency",
            SectionKind::ToneAndPhrasing => "Tone & Phrasing",
        }
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let key = match self {
            SectionKind::Effectiveness => "effectiveness",
            SectionKind::Efficiency => "efficiency",
            SectionKind::ToneAndPhrasing => "tone_and_phrasing",
        };
        write!(f, "{}", key)
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct SubscoreDisplay {
    /// Subscore name exactly as the service sent it.
    pub key: String,
    /// `key` with underscores shown as spaces. Cosmetic only.
    pub label: String,
    pub score: f64,
    pub evidence: Vec<String>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct SectionDisplay {
    pub kind: SectionKind,
    pub title: &'static str,
    pub score: f64,
    pub subscores: Vec<SubscoreDisplay>,
}

impl SectionDisplay {
    pub fn subscore(&self, key: &str) -> Option<&SubscoreDisplay> {
        self.subscores.iter().find(|s| s.key == key)
    }
}
