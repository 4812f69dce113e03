//! Prior-art screening capability.
//!
//! Presently a stub that returns a constant shape and performs no search;
//! modeled as a trait so a real patent-search implementation can slot in
//! without touching the synthesizer.

use crate::signal::{PriorArt, RepurposeSignal};

/// Capability contract for prior-art screening of a synthesized signal.
pub trait PriorArtScout: Send + Sync {
    fn scout(&self, signal: &RepurposeSignal) -> PriorArt;
}

/// Placeholder scout: no search, fixed low-overlap assessment.
#[derive(Debug, Clone, Default)]
pub struct StubPriorArtScout;

impl PriorArtScout for StubPriorArtScout {
    fn scout(&self, signal: &RepurposeSignal) -> PriorArt {
        PriorArt {
            signal_id: signal.signal_id.clone(),
            related_patents: Vec::new(),
            overlap_assessment: "low".to_string(),
            white_space_notes: "Patent search not yet enabled in MVP.".to_string(),
            disclaimer: "Not legal advice.".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzers::{
        analyze_failure, analyze_species_rationale, mine_vet_evidence, screen_risks,
    };
    use crate::candidates::find_candidates;
    use crate::knowledge::StaticKnowledge;
    use crate::problems::default_problem_briefs;
    use crate::synthesizer::build_signal;

    #[test]
    fn test_stub_echoes_signal_id() {
        let candidate = find_candidates(&default_problem_briefs())
            .into_iter()
            .next()
            .unwrap();
        let kb = StaticKnowledge;
        let signal = build_signal(
            &candidate,
            &analyze_failure(&candidate, &kb),
            &analyze_species_rationale(&candidate, &kb),
            &mine_vet_evidence(&candidate, &kb),
            &screen_risks(&candidate, &kb),
            "run-test",
        );
        let prior_art = StubPriorArtScout.scout(&signal);
        assert_eq!(prior_art.signal_id, signal.signal_id);
        assert!(prior_art.related_patents.is_empty());
        assert_eq!(prior_art.overlap_assessment, "low");
    }
}
