//! Risk screener: known contraindication signals per target species.

use crate::bundles::RiskBundle;
use crate::candidates::Candidate;
use crate::knowledge::KnowledgeBase;

/// Moderate default applied when a (compound, species) pair has no
/// screened profile. Not zero: unknown is not the same as safe.
const DEFAULT_OVERALL_RISK: i64 = 40;

/// One bundle per target species. On a miss, the fixed moderate default
/// and no flags.
pub fn screen_risks(candidate: &Candidate, knowledge: &dyn KnowledgeBase) -> Vec<RiskBundle> {
    candidate
        .target_species
        .iter()
        .map(|species| {
            let (overall_risk, risk_flags) =
                match knowledge.risk_profile(&candidate.compound, species) {
                    Some(record) => (record.overall_risk, record.risk_flags),
                    None => (DEFAULT_OVERALL_RISK, Vec::new()),
                };
            RiskBundle {
                compound: candidate.compound.clone(),
                target_species: species.clone(),
                risk_flags,
                overall_risk,
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
    fn test_miss_uses_moderate_default() {
        let mut candidate = crate::candidates::find_candidates(&default_problem_briefs())
            .into_iter()
            .next()
            .unwrap();
        candidate.compound = "Compound ZZ-99".to_string();
        let bundles = screen_risks(&candidate, &StaticKnowledge);
        assert_eq!(bundles[0].overall_risk, 40);
        assert!(bundles[0].risk_flags.is_empty());
    }

    #[test]
    fn test_hit_carries_screened_profile() {
        let candidate = crate::candidates::find_candidates(&default_problem_briefs())
            .into_iter()
            .nth(2)
            .unwrap();
        let bundles = screen_risks(&candidate, &StaticKnowledge);
        assert_eq!(bundles[0].overall_risk, 72);
        assert_eq!(bundles[0].risk_flags.len(), 1);
    }
}
