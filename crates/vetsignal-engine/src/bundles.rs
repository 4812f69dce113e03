//! Analyzer output bundles.
//!
//! One bundle per analyzer per candidate (failure analysis) or per
//! candidate and species (rationale, vet evidence, risk). Bundles are
//! transient: the synthesizer consumes them immediately and only the
//! fused signal is ever persisted.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Taxonomies
// ---------------------------------------------------------------------------

/// Why the compound failed in its original indication.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureType {
    Efficacy,
    TrialDesign,
    Strategy,
    Pk,
    Toxicity,
    #[serde(other)]
    Unknown,
}

impl FailureType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FailureType::Efficacy => "efficacy",
            FailureType::TrialDesign => "trial_design",
            FailureType::Strategy => "strategy",
            FailureType::Pk => "pk",
            FailureType::Toxicity => "toxicity",
            FailureType::Unknown => "unknown",
        }
    }
}

/// Overall strength grade of a veterinary evidence set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvidenceStrength {
    Weak,
    Moderate,
    Strong,
    /// Catch-all for strengths outside the recognized taxonomy; scored
    /// below `Weak`.
    #[serde(other)]
    Ungraded,
}

impl EvidenceStrength {
    pub fn as_str(&self) -> &'static str {
        match self {
            EvidenceStrength::Weak => "weak",
            EvidenceStrength::Moderate => "moderate",
            EvidenceStrength::Strong => "strong",
            EvidenceStrength::Ungraded => "ungraded",
        }
    }
}

// ---------------------------------------------------------------------------
// Failure analysis
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyReason {
    pub reason: String,
    pub evidence_doc_ids: Vec<String>,
    pub confidence: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrialMetadata {
    pub phase: String,
    pub endpoint: String,
    pub population: String,
    pub dose_range: String,
}

/// Failure history of the compound/indication pair (one per candidate).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FailureBundle {
    pub compound: String,
    pub original_indication: String,
    pub failure_type: FailureType,
    pub key_reasons: Vec<KeyReason>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trial_metadata: Option<TrialMetadata>,
}

// ---------------------------------------------------------------------------
// Species rationale
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RationalePoint {
    pub hypothesis: String,
    pub biological_basis: String,
    pub evidence_doc_ids: Vec<String>,
    pub confidence: f64,
}

/// Why the compound might work in one target species.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeciesRationaleBundle {
    pub compound: String,
    pub target_species: String,
    pub rationale_points: Vec<RationalePoint>,
    pub pk_pd_notes: String,
}

// ---------------------------------------------------------------------------
// Veterinary evidence
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvidenceItem {
    #[serde(rename = "type")]
    pub item_type: String,
    pub finding: String,
    pub sample_size: String,
    pub evidence_doc_ids: Vec<String>,
    pub strength_grade: EvidenceStrength,
}

/// Clinical evidence mined for one target species.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VetEvidenceBundle {
    pub compound: String,
    pub target_species: String,
    pub target_condition: String,
    pub evidence_items: Vec<EvidenceItem>,
    pub overall_strength: EvidenceStrength,
}

// ---------------------------------------------------------------------------
// Risk screening
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskFlag {
    pub flag: String,
    pub severity: u8,
    pub evidence_doc_ids: Vec<String>,
}

/// Known risk profile for one target species. `overall_risk` is 0–100.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskBundle {
    pub compound: String,
    pub target_species: String,
    pub risk_flags: Vec<RiskFlag>,
    pub overall_risk: i64,
}
