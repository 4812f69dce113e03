//! Species-rationale analyzer: why might the compound work in this species?

use crate::bundles::{RationalePoint, SpeciesRationaleBundle};
use crate::candidates::Candidate;
use crate::knowledge::KnowledgeBase;

/// One bundle per target species. On a miss, a single generic rationale
/// point with confidence 0.3 citing the candidate's source docs.
pub fn analyze_species_rationale(
    candidate: &Candidate,
    knowledge: &dyn KnowledgeBase,
) -> Vec<SpeciesRationaleBundle> {
    candidate
        .target_species
        .iter()
        .map(|species| {
            let rationale_points = knowledge
                .rationale_points(&candidate.compound, species)
                .unwrap_or_else(|| {
                    vec![RationalePoint {
                        hypothesis: "Species-specific factors may alter response.".to_string(),
                        biological_basis: "Limited public evidence; requires targeted review."
                            .to_string(),
                        evidence_doc_ids: candidate.source_docs.clone(),
                        confidence: 0.3,
                    }]
                });
            SpeciesRationaleBundle {
                compound: candidate.compound.clone(),
                target_species: species.clone(),
                rationale_points,
                pk_pd_notes: "No dosing guidance provided; research-only hypothesis.".to_string(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::knowledge::StaticKnowledge;
    use crate::problems::default_problem_briefs;

    #[test]
    fn test_one_bundle_per_species() {
        let mut candidate = crate::candidates::find_candidates(&default_problem_briefs())
            .into_iter()
            .next()
            .unwrap();
        candidate.target_species = vec!["canine".to_string(), "feline".to_string()];
        let bundles = analyze_species_rationale(&candidate, &StaticKnowledge);
        assert_eq!(bundles.len(), 2);
        assert_eq!(bundles[0].target_species, "canine");
        assert_eq!(bundles[1].target_species, "feline");
        // canine is a table hit, feline a miss with the generic point
        assert!((bundles[0].rationale_points[0].confidence - 0.55).abs() < 1e-9);
        assert!((bundles[1].rationale_points[0].confidence - 0.3).abs() < 1e-9);
    }
}
