//! The terminal signal record — the only artifact the pipeline persists.
//!
//! Field names and nesting are a bit-exact contract with downstream
//! consumers (dashboard, partner exports); see ARCHITECTURE.md §5.
//! A signal is immutable once synthesized.

use serde::{Deserialize, Serialize};

use crate::bundles::{EvidenceStrength, FailureType};
use crate::scoring::ScoreTerms;

/// Fixed disclaimer attached verbatim to every signal. Downstream
/// consumers gate display on its exact presence.
pub const SIGNAL_DISCLAIMER: &str = "Research hypothesis only; not medical advice.";

/// Recommended follow-up actions, most conservative first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NextStep {
    DoNotPursue,
    RetrospectiveReview,
    InVitro,
    PilotStudy,
}

impl NextStep {
    pub fn as_str(&self) -> &'static str {
        match self {
            NextStep::DoNotPursue => "do_not_pursue",
            NextStep::RetrospectiveReview => "retrospective_review",
            NextStep::InVitro => "in_vitro",
            NextStep::PilotStudy => "pilot_study",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FailureNarrative {
    pub summary: String,
    pub failure_type: FailureType,
    pub key_points: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeciesNarrative {
    pub summary: String,
    pub key_points: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvidenceSection {
    pub vet_strength: EvidenceStrength,
    /// Deduplicated evidence document ids, first-seen order.
    pub key_docs: Vec<String>,
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskSection {
    pub overall_risk: i64,
    /// Rendered as `"<flag> (severity <severity>)"`.
    pub key_flags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Provenance {
    pub agent_run_ids: Vec<String>,
    pub timestamps: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeciesSummary {
    pub species: String,
    pub summary: String,
}

/// Derived prose restating the structured fields. The text must agree
/// with the fields it restates — it is built from them, never authored
/// independently.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReasoningSummaries {
    pub executive_summary: Vec<String>,
    pub failure_summary: String,
    pub species_benefit_summary: Vec<SpeciesSummary>,
    pub evidence_summary: String,
    pub risk_summary: String,
    pub next_steps_summary: String,
}

/// Prior-art screening result (stub shape; see `prior_art` module).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriorArt {
    pub signal_id: String,
    pub related_patents: Vec<String>,
    pub overlap_assessment: String,
    pub white_space_notes: String,
    pub disclaimer: String,
}

/// A ranked, scored research hypothesis with full provenance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepurposeSignal {
    pub signal_id: String,
    pub compound: String,
    pub proposed_species: Vec<String>,
    pub proposed_condition: String,
    pub summary_hypothesis: String,
    pub why_failed_originally: FailureNarrative,
    pub why_it_might_work_in_animals: SpeciesNarrative,
    pub evidence: EvidenceSection,
    pub risk: RiskSection,
    pub novelty_vectors: Vec<String>,
    pub confidence_score: i64,
    pub addressability_score: i64,
    pub translation_risk: i64,
    pub score_breakdown: ScoreTerms,
    pub recommended_next_steps: Vec<NextStep>,
    pub provenance: Provenance,
    pub reasoning_summaries: ReasoningSummaries,
    pub disclaimer: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prior_art: Option<PriorArt>,
}
