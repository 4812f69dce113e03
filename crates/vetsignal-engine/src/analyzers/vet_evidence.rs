//! Evidence miner: published veterinary evidence per target species.

use crate::bundles::{EvidenceStrength, VetEvidenceBundle};
use crate::candidates::Candidate;
use crate::knowledge::KnowledgeBase;

/// One bundle per target species. On a miss, an empty item list graded
/// weak — absence of evidence is itself a finding.
pub fn mine_vet_evidence(
    candidate: &Candidate,
    knowledge: &dyn KnowledgeBase,
) -> Vec<VetEvidenceBundle> {
    candidate
        .target_species
        .iter()
        .map(|species| match knowledge.vet_evidence(&candidate.compound, species) {
            Some(record) => VetEvidenceBundle {
                compound: candidate.compound.clone(),
                target_species: species.clone(),
                target_condition: record.condition,
                evidence_items: record.evidence_items,
                overall_strength: record.overall_strength,
            },
            None => VetEvidenceBundle {
                compound: candidate.compound.clone(),
                target_species: species.clone(),
                target_condition: candidate.target_condition.clone(),
                evidence_items: Vec::new(),
                overall_strength: EvidenceStrength::Weak,
            },
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::knowledge::StaticKnowledge;
    use crate::problems::default_problem_briefs;

    #[test]
    fn test_miss_yields_weak_empty_bundle() {
        let mut candidate = crate::candidates::find_candidates(&default_problem_briefs())
            .into_iter()
            .next()
            .unwrap();
        candidate.compound = "Compound ZZ-99".to_string();
        let bundles = mine_vet_evidence(&candidate, &StaticKnowledge);
        assert_eq!(bundles.len(), 1);
        assert!(bundles[0].evidence_items.is_empty());
        assert_eq!(bundles[0].overall_strength, EvidenceStrength::Weak);
        // Miss falls back to the candidate's own condition
        assert_eq!(bundles[0].target_condition, "Osteoarthritis");
    }

    #[test]
    fn test_hit_carries_table_condition() {
        let candidate = crate::candidates::find_candidates(&default_problem_briefs())
            .into_iter()
            .nth(1)
            .unwrap();
        let bundles = mine_vet_evidence(&candidate, &StaticKnowledge);
        assert_eq!(bundles[0].overall_strength, EvidenceStrength::Moderate);
        assert_eq!(bundles[0].evidence_items.len(), 1);
    }
}
