//! Signal synthesizer: fuses all analyzer bundles for one candidate into
//! a single immutable signal record.
//!
//! Order matters here — evidence dedup feeds the scoring volume term, and
//! the prose summaries are derived from the structured fields after the
//! decision rules run, so the text always agrees with what it restates.

use chrono::{SecondsFormat, Utc};
use std::collections::HashSet;

use crate::bundles::{
    EvidenceStrength, FailureBundle, RationalePoint, RiskBundle, SpeciesRationaleBundle,
    VetEvidenceBundle,
};
use crate::candidates::Candidate;
use crate::ids::build_signal_id;
use crate::scoring::score_signal;
use crate::signal::{
    EvidenceSection, FailureNarrative, NextStep, Provenance, ReasoningSummaries, RepurposeSignal,
    RiskSection, SpeciesNarrative, SpeciesSummary, SIGNAL_DISCLAIMER,
};

/// Mean rationale confidence; 0.3 when no points were gathered.
fn average_confidence(points: &[&RationalePoint]) -> f64 {
    if points.is_empty() {
        return 0.3;
    }
    points.iter().map(|p| p.confidence).sum::<f64>() / points.len() as f64
}

/// Join the first `limit` entries with single spaces.
fn join_top(items: impl Iterator<Item = String>, limit: usize) -> String {
    items.take(limit).collect::<Vec<_>>().join(" ")
}

/// Deduplicate by exact string equality, preserving first-seen order.
fn dedup_docs<'a>(groups: impl Iterator<Item = &'a [String]>) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut docs = Vec::new();
    for group in groups {
        for doc in group {
            if seen.insert(doc.clone()) {
                docs.push(doc.clone());
            }
        }
    }
    docs
}

/// Fuse all bundles for a candidate into one `RepurposeSignal`.
pub fn build_signal(
    candidate: &Candidate,
    failure_bundle: &FailureBundle,
    species_bundles: &[SpeciesRationaleBundle],
    vet_evidence_bundles: &[VetEvidenceBundle],
    risk_bundles: &[RiskBundle],
    run_id: &str,
) -> RepurposeSignal {
    let rationale_points: Vec<&RationalePoint> = species_bundles
        .iter()
        .flat_map(|b| b.rationale_points.iter())
        .collect();
    let rationale_confidence = average_confidence(&rationale_points);

    let vet_strength = vet_evidence_bundles
        .first()
        .map(|b| b.overall_strength)
        .unwrap_or(EvidenceStrength::Weak);

    // Cited-item count before dedup; the evidence summary reports it.
    let vet_docs: Vec<&String> = vet_evidence_bundles
        .iter()
        .flat_map(|b| b.evidence_items.iter())
        .flat_map(|item| item.evidence_doc_ids.iter())
        .collect();

    // Dedup across all bundle groups: vet evidence, failure reasons,
    // rationale points — in that order.
    let evidence_docs = dedup_docs(
        vet_evidence_bundles
            .iter()
            .flat_map(|b| b.evidence_items.iter())
            .map(|item| item.evidence_doc_ids.as_slice())
            .chain(
                failure_bundle
                    .key_reasons
                    .iter()
                    .map(|r| r.evidence_doc_ids.as_slice()),
            )
            .chain(
                rationale_points
                    .iter()
                    .map(|p| p.evidence_doc_ids.as_slice()),
            ),
    );

    // Maximum across species bundles, floored at zero
    let risk_overall = risk_bundles
        .iter()
        .map(|r| r.overall_risk)
        .fold(0, i64::max);
    let risk_flags: Vec<String> = risk_bundles
        .iter()
        .flat_map(|r| r.risk_flags.iter())
        .map(|f| format!("{} (severity {})", f.flag, f.severity))
        .collect();

    let scoring = score_signal(
        failure_bundle.failure_type,
        vet_strength,
        rationale_confidence,
        risk_overall,
        evidence_docs.len(),
    );

    let failure_summary = {
        let joined = join_top(
            failure_bundle.key_reasons.iter().map(|r| r.reason.clone()),
            2,
        );
        if joined.is_empty() {
            "Failure reason not clearly disclosed in public sources.".to_string()
        } else {
            joined
        }
    };

    let why_animals_summary = {
        let joined = join_top(rationale_points.iter().map(|p| p.hypothesis.clone()), 2);
        if joined.is_empty() {
            "Species rationale not yet established.".to_string()
        } else {
            joined
        }
    };

    let evidence_summary = if vet_evidence_bundles.is_empty() {
        "No veterinary evidence found in current sources.".to_string()
    } else {
        format!(
            "Veterinary evidence is {} with {} cited item(s). Evidence remains limited.",
            vet_strength.as_str(),
            vet_docs.len()
        )
    };

    // The risk summary must say "high" exactly when the do-not-pursue
    // gate fires.
    let risk_summary = if risk_overall >= 70 {
        "Risk profile is high. Not recommended for further pursuit.".to_string()
    } else {
        format!(
            "Risk profile is moderate ({risk_overall}/100) with flagged contraindications requiring review."
        )
    };

    // Decision rule, first match wins: high risk trumps everything.
    let recommended_next_steps = if risk_overall >= 70 {
        vec![NextStep::DoNotPursue]
    } else if vet_strength == EvidenceStrength::Strong {
        vec![NextStep::RetrospectiveReview, NextStep::PilotStudy]
    } else {
        vec![
            NextStep::RetrospectiveReview,
            NextStep::InVitro,
            NextStep::PilotStudy,
        ]
    };

    let next_steps_summary = format!(
        "Next steps: {} (research-only).",
        recommended_next_steps
            .iter()
            .map(|s| s.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    );

    let species_summaries: Vec<SpeciesSummary> = species_bundles
        .iter()
        .map(|bundle| SpeciesSummary {
            species: bundle.target_species.clone(),
            summary: if bundle.rationale_points.is_empty() {
                "Species rationale requires additional review.".to_string()
            } else {
                bundle
                    .rationale_points
                    .iter()
                    .map(|p| p.hypothesis.clone())
                    .collect::<Vec<_>>()
                    .join(" ")
            },
        })
        .collect();

    let executive_summary = vec![
        format!("{}: {}", candidate.compound, failure_summary),
        species_summaries
            .first()
            .map(|s| s.summary.clone())
            .unwrap_or_else(|| "Species rationale requires additional review.".to_string()),
        evidence_summary.clone(),
        risk_summary.clone(),
    ];

    RepurposeSignal {
        signal_id: build_signal_id(
            &candidate.compound,
            &candidate.target_condition,
            candidate.index,
        ),
        compound: candidate.compound.clone(),
        proposed_species: candidate.target_species.clone(),
        proposed_condition: candidate.target_condition.clone(),
        summary_hypothesis: format!(
            "Research hypothesis: {} may warrant evaluation for {} in {}.",
            candidate.compound,
            candidate.target_condition,
            candidate.target_species.join(", ")
        ),
        why_failed_originally: FailureNarrative {
            summary: failure_summary.clone(),
            failure_type: failure_bundle.failure_type,
            key_points: failure_bundle
                .key_reasons
                .iter()
                .map(|r| r.reason.clone())
                .collect(),
        },
        why_it_might_work_in_animals: SpeciesNarrative {
            summary: why_animals_summary,
            key_points: rationale_points
                .iter()
                .map(|p| p.hypothesis.clone())
                .collect(),
        },
        evidence: EvidenceSection {
            vet_strength,
            key_docs: evidence_docs,
            notes: "Evidence is research-only and requires validation.".to_string(),
        },
        risk: RiskSection {
            overall_risk: risk_overall,
            key_flags: risk_flags,
        },
        novelty_vectors: vec!["new_species".to_string(), "new_indication".to_string()],
        confidence_score: scoring.confidence_score,
        addressability_score: scoring.addressability_score,
        translation_risk: scoring.translation_risk,
        score_breakdown: scoring.breakdown,
        recommended_next_steps,
        provenance: Provenance {
            agent_run_ids: vec![run_id.to_string()],
            timestamps: vec![Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)],
        },
        reasoning_summaries: ReasoningSummaries {
            executive_summary,
            failure_summary: format!(
                "{} Failure type: {}.",
                failure_summary,
                failure_bundle.failure_type.as_str()
            ),
            species_benefit_summary: species_summaries,
            evidence_summary,
            risk_summary,
            next_steps_summary,
        },
        disclaimer: SIGNAL_DISCLAIMER.to_string(),
        prior_art: None,
    }
}
