//! Failure analyzer: why did the compound fail originally?

use crate::bundles::{FailureBundle, FailureType, KeyReason};
use crate::candidates::Candidate;
use crate::knowledge::KnowledgeBase;

/// Analyze the candidate's original failure. On an unknown compound the
/// bundle degrades to `failure_type = unknown` with a single
/// low-confidence generic reason citing the candidate's own source docs.
pub fn analyze_failure(candidate: &Candidate, knowledge: &dyn KnowledgeBase) -> FailureBundle {
    let record = knowledge.failure_record(&candidate.compound);

    let (failure_type, key_reasons, trial_metadata) = match record {
        Some(r) => (r.failure_type, r.key_reasons, r.trial_metadata),
        None => (
            FailureType::Unknown,
            vec![KeyReason {
                reason: "Failure reason not clearly disclosed in public summary.".to_string(),
                evidence_doc_ids: candidate.source_docs.clone(),
                confidence: 0.3,
            }],
            None,
        ),
    };

    FailureBundle {
        compound: candidate.compound.clone(),
        original_indication: candidate.original_indication.clone(),
        failure_type,
        key_reasons,
        trial_metadata,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::knowledge::StaticKnowledge;
    use crate::problems::default_problem_briefs;

    fn first_candidate() -> Candidate {
        crate::candidates::find_candidates(&default_problem_briefs())
            .into_iter()
            .next()
            .unwrap()
    }

    #[test]
    fn test_known_compound_keeps_taxonomy() {
        let bundle = analyze_failure(&first_candidate(), &StaticKnowledge);
        assert_eq!(bundle.failure_type, FailureType::Efficacy);
        assert!(bundle.trial_metadata.is_some());
    }

    #[test]
    fn test_unknown_compound_gets_default_bundle() {
        let mut candidate = first_candidate();
        candidate.compound = "Compound ZZ-99".to_string();
        let bundle = analyze_failure(&candidate, &StaticKnowledge);
        assert_eq!(bundle.failure_type, FailureType::Unknown);
        assert_eq!(bundle.key_reasons.len(), 1);
        assert!((bundle.key_reasons[0].confidence - 0.3).abs() < 1e-9);
        // Default reason cites the candidate's own source docs
        assert_eq!(bundle.key_reasons[0].evidence_doc_ids, candidate.source_docs);
        assert!(bundle.trial_metadata.is_none());
    }
}
