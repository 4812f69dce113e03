//! Evidence-provider interface and the static knowledge implementation.
//!
//! Analyzers never consult tables directly; they go through the
//! `KnowledgeBase` trait so the bundled static tables are one trivial
//! implementation among several (fixture-backed, API-backed,
//! database-backed). A `None` return is a normal, expected outcome —
//! every analyzer has a documented default for it.

use crate::bundles::{
    EvidenceItem, EvidenceStrength, FailureType, KeyReason, RationalePoint, RiskFlag,
    TrialMetadata,
};

/// Failure history for a compound, before candidate fields are attached.
#[derive(Debug, Clone)]
pub struct FailureRecord {
    pub failure_type: FailureType,
    pub key_reasons: Vec<KeyReason>,
    pub trial_metadata: Option<TrialMetadata>,
}

/// Mined veterinary evidence for a (compound, species) pair.
#[derive(Debug, Clone)]
pub struct VetEvidenceRecord {
    pub condition: String,
    pub evidence_items: Vec<EvidenceItem>,
    pub overall_strength: EvidenceStrength,
}

/// Screened risk profile for a (compound, species) pair.
#[derive(Debug, Clone)]
pub struct RiskRecord {
    pub overall_risk: i64,
    pub risk_flags: Vec<RiskFlag>,
}

/// Lookup capability the analyzer set is polymorphic over.
pub trait KnowledgeBase: Send + Sync {
    fn failure_record(&self, compound: &str) -> Option<FailureRecord>;
    fn rationale_points(&self, compound: &str, species: &str) -> Option<Vec<RationalePoint>>;
    fn vet_evidence(&self, compound: &str, species: &str) -> Option<VetEvidenceRecord>;
    fn risk_profile(&self, compound: &str, species: &str) -> Option<RiskRecord>;
}

/// The bundled curated tables. Stand-in for a real mining capability;
/// the compounds are worked examples, not real assets.
#[derive(Debug, Clone, Default)]
pub struct StaticKnowledge;

const AX_17: &str = "Compound AX-17 (example)";
const RN_44: &str = "Compound RN-44 (example)";
const LM_12: &str = "Compound LM-12 (example)";

fn reason(text: &str, doc_ids: &[&str], confidence: f64) -> KeyReason {
    KeyReason {
        reason: text.to_string(),
        evidence_doc_ids: doc_ids.iter().map(|s| s.to_string()).collect(),
        confidence,
    }
}

fn rationale(
    hypothesis: &str,
    biological_basis: &str,
    doc_ids: &[&str],
    confidence: f64,
) -> RationalePoint {
    RationalePoint {
        hypothesis: hypothesis.to_string(),
        biological_basis: biological_basis.to_string(),
        evidence_doc_ids: doc_ids.iter().map(|s| s.to_string()).collect(),
        confidence,
    }
}

fn evidence_item(
    item_type: &str,
    finding: &str,
    sample_size: &str,
    doc_ids: &[&str],
    strength_grade: EvidenceStrength,
) -> EvidenceItem {
    EvidenceItem {
        item_type: item_type.to_string(),
        finding: finding.to_string(),
        sample_size: sample_size.to_string(),
        evidence_doc_ids: doc_ids.iter().map(|s| s.to_string()).collect(),
        strength_grade,
    }
}

fn risk_flag(flag: &str, severity: u8, doc_ids: &[&str]) -> RiskFlag {
    RiskFlag {
        flag: flag.to_string(),
        severity,
        evidence_doc_ids: doc_ids.iter().map(|s| s.to_string()).collect(),
    }
}

fn trial(phase: &str, endpoint: &str, population: &str) -> TrialMetadata {
    TrialMetadata {
        phase: phase.to_string(),
        endpoint: endpoint.to_string(),
        population: population.to_string(),
        dose_range: "Example dosing range".to_string(),
    }
}

impl KnowledgeBase for StaticKnowledge {
    fn failure_record(&self, compound: &str) -> Option<FailureRecord> {
        match compound {
            AX_17 => Some(FailureRecord {
                failure_type: FailureType::Efficacy,
                key_reasons: vec![
                    reason(
                        "Primary endpoint did not reach statistical significance in target population.",
                        &["ctgov:EXAMPLE-OA-001"],
                        0.7,
                    ),
                    reason(
                        "Enrollment skewed toward late-stage disease, limiting responsiveness.",
                        &["ctgov:EXAMPLE-OA-001"],
                        0.55,
                    ),
                ],
                trial_metadata: Some(trial(
                    "Phase 2",
                    "Pain score reduction",
                    "Adults with advanced OA",
                )),
            }),
            RN_44 => Some(FailureRecord {
                failure_type: FailureType::Pk,
                key_reasons: vec![reason(
                    "Insufficient bioavailability at planned dosing window.",
                    &["ctgov:EXAMPLE-CKD-002"],
                    0.65,
                )],
                trial_metadata: Some(trial("Phase 2", "eGFR stabilization", "Stage 3 CKD")),
            }),
            LM_12 => Some(FailureRecord {
                failure_type: FailureType::TrialDesign,
                key_reasons: vec![reason(
                    "Trial endpoints focused on short-term perfusion and missed chronic outcomes.",
                    &["ctgov:EXAMPLE-LAM-003"],
                    0.6,
                )],
                trial_metadata: Some(trial(
                    "Phase 1/2",
                    "Perfusion index",
                    "Peripheral vascular disease",
                )),
            }),
            _ => None,
        }
    }

    fn rationale_points(&self, compound: &str, species: &str) -> Option<Vec<RationalePoint>> {
        match (compound, species) {
            (AX_17, "canine") => Some(vec![rationale(
                "Canine inflammatory response may be more responsive to short-term modulation.",
                "Species differences in inflammatory mediator profiles and activity patterns.",
                &["pmid:EXAMPLE-VET-101"],
                0.55,
            )]),
            (RN_44, "feline") => Some(vec![rationale(
                "Feline CKD progression windows may allow earlier intervention.",
                "Different progression tempo and management context in cats.",
                &["pmid:EXAMPLE-VET-202"],
                0.5,
            )]),
            (LM_12, "equine") => Some(vec![rationale(
                "Equine laminitis endpoints differ from human perfusion metrics.",
                "Different clinical outcome measures and care pathways.",
                &["pmid:EXAMPLE-VET-303"],
                0.52,
            )]),
            _ => None,
        }
    }

    fn vet_evidence(&self, compound: &str, species: &str) -> Option<VetEvidenceRecord> {
        match (compound, species) {
            (AX_17, "canine") => Some(VetEvidenceRecord {
                condition: "Osteoarthritis".to_string(),
                evidence_items: vec![evidence_item(
                    "case_report",
                    "Single case report suggests improved mobility in canine OA model.",
                    "n=1",
                    &["pmid:EXAMPLE-VET-101"],
                    EvidenceStrength::Weak,
                )],
                overall_strength: EvidenceStrength::Weak,
            }),
            (RN_44, "feline") => Some(VetEvidenceRecord {
                condition: "Chronic kidney disease".to_string(),
                evidence_items: vec![evidence_item(
                    "retrospective",
                    "Retrospective review notes potential stabilization signal.",
                    "n=18",
                    &["pmid:EXAMPLE-VET-202"],
                    EvidenceStrength::Moderate,
                )],
                overall_strength: EvidenceStrength::Moderate,
            }),
            (LM_12, "equine") => Some(VetEvidenceRecord {
                condition: "Laminitis".to_string(),
                evidence_items: vec![evidence_item(
                    "mechanistic",
                    "Mechanistic study aligns with perfusion support hypothesis.",
                    "n=12",
                    &["pmid:EXAMPLE-VET-303"],
                    EvidenceStrength::Weak,
                )],
                overall_strength: EvidenceStrength::Weak,
            }),
            _ => None,
        }
    }

    fn risk_profile(&self, compound: &str, species: &str) -> Option<RiskRecord> {
        match (compound, species) {
            (AX_17, "canine") => Some(RiskRecord {
                overall_risk: 35,
                risk_flags: vec![risk_flag(
                    "GI intolerance risk",
                    2,
                    &["ctgov:EXAMPLE-OA-001"],
                )],
            }),
            (RN_44, "feline") => Some(RiskRecord {
                overall_risk: 55,
                risk_flags: vec![risk_flag(
                    "Renal clearance uncertainty",
                    3,
                    &["ctgov:EXAMPLE-CKD-002"],
                )],
            }),
            (LM_12, "equine") => Some(RiskRecord {
                overall_risk: 72,
                risk_flags: vec![risk_flag(
                    "Cardiovascular risk profile unclear",
                    4,
                    &["ctgov:EXAMPLE-LAM-003"],
                )],
            }),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_compound_has_failure_record() {
        let kb = StaticKnowledge;
        let record = kb.failure_record(AX_17).unwrap();
        assert_eq!(record.failure_type, FailureType::Efficacy);
        assert_eq!(record.key_reasons.len(), 2);
    }

    #[test]
    fn test_unknown_compound_misses_every_table() {
        let kb = StaticKnowledge;
        assert!(kb.failure_record("Novel compound").is_none());
        assert!(kb.rationale_points("Novel compound", "canine").is_none());
        assert!(kb.vet_evidence("Novel compound", "canine").is_none());
        assert!(kb.risk_profile("Novel compound", "canine").is_none());
    }

    #[test]
    fn test_species_mismatch_misses() {
        let kb = StaticKnowledge;
        // AX-17 is only known for canine
        assert!(kb.rationale_points(AX_17, "feline").is_none());
        assert!(kb.vet_evidence(AX_17, "equine").is_none());
    }
}
