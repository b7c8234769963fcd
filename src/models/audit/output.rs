use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

// pub struct for a single named scoring dimension
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct SubScore {
    pub score: f64,
    #[serde(default)]
    pub evidence: Vec<String>,
}

// pub struct for one scoring section. Subscores keep the order the service emitted.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct SectionResult {
    pub score: f64,
    pub subscores: IndexMap<String, SubScore>,
}

// The three fixed sections; none of them is optional
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Sections {
    pub effectiveness: SectionResult,
    pub efficiency: SectionResult,
    pub tone_and_phrasing: SectionResult,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ZeroTolerance {
    pub triggered: bool,
    #[serde(default)]
    pub reason: Option<String>,
    #[serde(default)]
    pub evidence: Vec<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Metadata {
    pub ticket_id: String,
    #[serde(default)]
    pub agent: Option<String>,
    #[serde(default)]
    pub channel: Option<String>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    #[serde(default)]
    pub macros_used: Option<Vec<String>>,
    pub model: String,
    pub rubric_version: String,
    #[serde(default = "default_redacted")]
    pub redacted: bool,
}

fn default_redacted() -> bool {
    true
}

/// Response body of a successful `POST /audit`.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct AuditOutput {
    pub sections: Sections,
    pub zero_tolerance: ZeroTolerance,
    pub overall: f64,
    pub metadata: Metadata,
}

// Body of the service liveness probe (`GET /`)
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct HealthStatus {
    pub status: String,
}
