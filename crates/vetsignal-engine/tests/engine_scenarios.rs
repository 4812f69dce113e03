//! End-to-end engine scenarios over the bundled knowledge tables.

use std::collections::HashSet;
use std::sync::Arc;

use vetsignal_engine::bundles::{EvidenceStrength, FailureType};
use vetsignal_engine::knowledge::{
    FailureRecord, KnowledgeBase, RiskRecord, StaticKnowledge, VetEvidenceRecord,
};
use vetsignal_engine::problems::default_problem_briefs;
use vetsignal_engine::signal::NextStep;
use vetsignal_engine::RepurposeEngine;

/// A knowledge source with no entries at all; every lookup misses.
struct EmptyKnowledge;

impl KnowledgeBase for EmptyKnowledge {
    fn failure_record(&self, _compound: &str) -> Option<FailureRecord> {
        None
    }
    fn rationale_points(
        &self,
        _compound: &str,
        _species: &str,
    ) -> Option<Vec<vetsignal_engine::bundles::RationalePoint>> {
        None
    }
    fn vet_evidence(&self, _compound: &str, _species: &str) -> Option<VetEvidenceRecord> {
        None
    }
    fn risk_profile(&self, _compound: &str, _species: &str) -> Option<RiskRecord> {
        None
    }
}

#[tokio::test]
async fn full_run_produces_bounded_deduplicated_signals() {
    let engine = RepurposeEngine::new(Arc::new(StaticKnowledge));
    let signals = engine
        .run(&default_problem_briefs(), "run-itest")
        .await
        .unwrap();

    assert_eq!(signals.len(), 3);
    for signal in &signals {
        assert!((0..=100).contains(&signal.confidence_score));
        assert!((0..=100).contains(&signal.addressability_score));
        assert!((0..=100).contains(&signal.translation_risk));
        assert!((0..=100).contains(&signal.risk.overall_risk));

        let unique: HashSet<&String> = signal.evidence.key_docs.iter().collect();
        assert_eq!(unique.len(), signal.evidence.key_docs.len());

        assert_eq!(
            signal.disclaimer,
            "Research hypothesis only; not medical advice."
        );
        assert_eq!(
            signal.provenance.agent_run_ids,
            vec!["run-itest".to_string()]
        );
    }
}

#[tokio::test]
async fn osteoarthritis_candidate_matches_worked_example() {
    let engine = RepurposeEngine::new(Arc::new(StaticKnowledge));
    let signals = engine
        .run(&default_problem_briefs(), "run-itest")
        .await
        .unwrap();

    let signal = &signals[0];
    assert_eq!(
        signal.signal_id,
        "repurpose-compound-ax-17-example-osteoarthritis-01"
    );
    assert_eq!(signal.confidence_score, 28);
    assert_eq!(signal.addressability_score, 70);
    assert_eq!(signal.translation_risk, 30);
    assert_eq!(signal.score_breakdown.vet_evidence, 12);
    assert_eq!(signal.score_breakdown.species_rationale, 14);
    assert_eq!(signal.score_breakdown.addressability, 14);
    assert_eq!(signal.score_breakdown.recency_volume, 2);
    assert_eq!(signal.score_breakdown.risk_penalty, 14);
    assert_eq!(
        signal.recommended_next_steps,
        vec![
            NextStep::RetrospectiveReview,
            NextStep::InVitro,
            NextStep::PilotStudy
        ]
    );
}

#[tokio::test]
async fn high_risk_candidate_is_gated_regardless_of_evidence() {
    let engine = RepurposeEngine::new(Arc::new(StaticKnowledge));
    let signals = engine
        .run(&default_problem_briefs(), "run-itest")
        .await
        .unwrap();

    let laminitis = signals
        .iter()
        .find(|s| s.proposed_condition == "Laminitis")
        .unwrap();
    assert_eq!(laminitis.risk.overall_risk, 72);
    assert_eq!(laminitis.recommended_next_steps, vec![NextStep::DoNotPursue]);

    // And the gate never fires below the threshold
    for signal in signals.iter().filter(|s| s.risk.overall_risk < 70) {
        assert_ne!(signal.recommended_next_steps, vec![NextStep::DoNotPursue]);
    }
}

#[tokio::test]
async fn unknown_compound_still_yields_fully_formed_signal() {
    // Same candidate set, but every knowledge lookup misses
    let engine = RepurposeEngine::new(Arc::new(EmptyKnowledge));
    let signals = engine
        .run(&default_problem_briefs(), "run-itest")
        .await
        .unwrap();

    assert_eq!(signals.len(), 3);
    for signal in &signals {
        assert_eq!(signal.why_failed_originally.failure_type, FailureType::Unknown);
        assert_eq!(signal.evidence.vet_strength, EvidenceStrength::Weak);
        assert_eq!(signal.risk.overall_risk, 40);
        assert!(!signal.why_failed_originally.key_points.is_empty());
        assert!(!signal.reasoning_summaries.executive_summary.is_empty());
        // Candidate source docs flow into the evidence set via the defaults
        assert!(!signal.evidence.key_docs.is_empty());
        // Serializes without missing fields
        let json = serde_json::to_value(signal).unwrap();
        for field in [
            "signal_id",
            "compound",
            "proposed_species",
            "proposed_condition",
            "summary_hypothesis",
            "why_failed_originally",
            "why_it_might_work_in_animals",
            "evidence",
            "risk",
            "novelty_vectors",
            "confidence_score",
            "addressability_score",
            "translation_risk",
            "score_breakdown",
            "recommended_next_steps",
            "provenance",
            "reasoning_summaries",
            "disclaimer",
        ] {
            assert!(json.get(field).is_some(), "missing field {field}");
        }
    }
}
