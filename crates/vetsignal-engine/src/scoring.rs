//! Signal confidence scoring.
//! Implements the fixed formula from ARCHITECTURE.md §4.
//!
//! The weights are a frozen contract: downstream consumers compare scores
//! across runs, so the arithmetic must reproduce exactly, including
//! rounding and clamp order.

use serde::{Deserialize, Serialize};

use crate::bundles::{EvidenceStrength, FailureType};

/// Contribution of the veterinary evidence grade to the confidence sum.
fn vet_evidence_score(strength: EvidenceStrength) -> i64 {
    match strength {
        EvidenceStrength::Weak => 12,
        EvidenceStrength::Moderate => 22,
        EvidenceStrength::Strong => 32,
        EvidenceStrength::Ungraded => 10,
    }
}

/// How fixable the original failure is, on a 0–1 scale. Toxicity is
/// barely addressable by changing species; endpoint and design problems
/// mostly are.
fn failure_addressability(failure_type: FailureType) -> f64 {
    match failure_type {
        FailureType::Efficacy => 0.7,
        FailureType::TrialDesign => 0.7,
        FailureType::Strategy => 0.65,
        FailureType::Pk => 0.6,
        FailureType::Toxicity => 0.3,
        FailureType::Unknown => 0.4,
    }
}

/// Contributing terms of a confidence score, exposed for transparency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreTerms {
    pub vet_evidence: i64,
    pub species_rationale: i64,
    pub addressability: i64,
    pub recency_volume: i64,
    pub risk_penalty: i64,
}

/// Full scoring output for one signal.
///
/// `addressability_score` is the 0–100 report scale; the `addressability`
/// term inside `breakdown` is the 0–20 contribution to the confidence
/// sum. Both scales are part of the record contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub confidence_score: i64,
    pub addressability_score: i64,
    pub translation_risk: i64,
    pub breakdown: ScoreTerms,
}

fn clamp(value: i64, min: i64, max: i64) -> i64 {
    value.min(max).max(min)
}

/// Score one candidate's fused analyzer outputs.
///
/// `rationale_confidence` is the mean confidence across every rationale
/// point gathered for the candidate; `risk_score` the maximum overall
/// risk across species bundles; `signal_volume` the count of distinct
/// evidence doc ids (already deduplicated).
pub fn score_signal(
    failure_type: FailureType,
    vet_evidence_strength: EvidenceStrength,
    rationale_confidence: f64,
    risk_score: i64,
    signal_volume: usize,
) -> ScoreBreakdown {
    let vet_score = vet_evidence_score(vet_evidence_strength);
    let rationale_score = clamp((rationale_confidence * 25.0).round() as i64, 0, 25);
    let addressability = failure_addressability(failure_type);
    let addressability_score = (addressability * 20.0).round() as i64;
    let recency_score = clamp(signal_volume as i64, 0, 10);
    let risk_penalty = ((risk_score as f64 / 100.0) * 40.0).round() as i64;

    let confidence = clamp(
        vet_score + rationale_score + addressability_score + recency_score - risk_penalty,
        0,
        100,
    );

    let translation_risk = clamp((100.0 - addressability * 100.0).round() as i64, 0, 100);

    ScoreBreakdown {
        confidence_score: confidence,
        addressability_score: (addressability * 100.0).round() as i64,
        translation_risk,
        breakdown: ScoreTerms {
            vet_evidence: vet_score,
            species_rationale: rationale_score,
            addressability: addressability_score,
            recency_volume: recency_score,
            risk_penalty,
        },
    }
}
