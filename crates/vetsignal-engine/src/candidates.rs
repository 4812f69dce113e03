//! Candidate finder: maps each problem brief to known candidate compounds.
//!
//! The `index` assigned here is the candidate's position across the whole
//! run and is the sole source of signal-id determinism. The finder must
//! preserve brief order and, within a condition, the table's declaration
//! order — see ARCHITECTURE.md §3.

use serde::{Deserialize, Serialize};

use crate::problems::ProblemBrief;

/// A specific compound proposed against a problem brief.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub compound: String,
    pub original_indication: String,
    pub mechanism: String,
    pub source_docs: Vec<String>,
    pub target_species: Vec<String>,
    pub target_condition: String,
    pub problem_id: String,
    /// Zero-based position within the run; never reassigned.
    pub index: usize,
}

/// A compound known to have failed in its original indication, keyed by
/// the condition it might transfer to.
struct CandidateSeed {
    compound: &'static str,
    original_indication: &'static str,
    mechanism: &'static str,
    source_docs: &'static [&'static str],
}

/// Condition → candidate compounds, in declaration order. A slice (not a
/// map) so iteration order is part of the contract.
const CANDIDATE_TABLE: &[(&str, &[CandidateSeed])] = &[
    (
        "Osteoarthritis",
        &[CandidateSeed {
            compound: "Compound AX-17 (example)",
            original_indication: "Human osteoarthritis",
            mechanism: "Inflammatory pathway modulation",
            source_docs: &["ctgov:EXAMPLE-OA-001"],
        }],
    ),
    (
        "Chronic kidney disease",
        &[CandidateSeed {
            compound: "Compound RN-44 (example)",
            original_indication: "Human CKD fibrosis",
            mechanism: "Anti-fibrotic signaling",
            source_docs: &["ctgov:EXAMPLE-CKD-002"],
        }],
    ),
    (
        "Laminitis",
        &[CandidateSeed {
            compound: "Compound LM-12 (example)",
            original_indication: "Human peripheral vascular disease",
            mechanism: "Microvascular perfusion support",
            source_docs: &["ctgov:EXAMPLE-LAM-003"],
        }],
    ),
];

/// Look up candidate compounds for each brief. Unknown conditions yield
/// zero candidates, not an error.
pub fn find_candidates(briefs: &[ProblemBrief]) -> Vec<Candidate> {
    let mut candidates = Vec::new();
    for brief in briefs {
        let seeds = CANDIDATE_TABLE
            .iter()
            .find(|(condition, _)| *condition == brief.condition)
            .map(|(_, seeds)| *seeds)
            .unwrap_or(&[]);
        for seed in seeds {
            let index = candidates.len();
            candidates.push(Candidate {
                compound: seed.compound.to_string(),
                original_indication: seed.original_indication.to_string(),
                mechanism: seed.mechanism.to_string(),
                source_docs: seed.source_docs.iter().map(|s| s.to_string()).collect(),
                target_species: brief.target_species.clone(),
                target_condition: brief.condition.clone(),
                problem_id: brief.problem_id.clone(),
                index,
            });
        }
    }
    candidates
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::problems::default_problem_briefs;

    #[test]
    fn test_indexes_follow_brief_order() {
        let candidates = find_candidates(&default_problem_briefs());
        assert_eq!(candidates.len(), 3);
        for (i, candidate) in candidates.iter().enumerate() {
            assert_eq!(candidate.index, i);
        }
        assert_eq!(candidates[0].compound, "Compound AX-17 (example)");
        assert_eq!(candidates[1].compound, "Compound RN-44 (example)");
        assert_eq!(candidates[2].compound, "Compound LM-12 (example)");
    }

    #[test]
    fn test_unknown_condition_yields_nothing() {
        let brief = ProblemBrief {
            problem_id: "caprine-test".to_string(),
            target_species: vec!["caprine".to_string()],
            condition: "Unknown condition".to_string(),
            keywords: vec![],
            rationale: "test".to_string(),
        };
        assert!(find_candidates(&[brief]).is_empty());
    }

    #[test]
    fn test_candidates_inherit_brief_fields() {
        let candidates = find_candidates(&default_problem_briefs());
        let first = &candidates[0];
        assert_eq!(first.problem_id, "canine-osteoarthritis");
        assert_eq!(first.target_condition, "Osteoarthritis");
        assert_eq!(first.target_species, vec!["canine"]);
    }

    #[test]
    fn test_skipped_brief_does_not_gap_indexes() {
        let mut briefs = default_problem_briefs();
        briefs[1].condition = "No candidates here".to_string();
        let candidates = find_candidates(&briefs);
        assert_eq!(candidates.len(), 2);
        assert_eq!(candidates[0].index, 0);
        assert_eq!(candidates[1].index, 1);
        assert_eq!(candidates[1].compound, "Compound LM-12 (example)");
    }
}
