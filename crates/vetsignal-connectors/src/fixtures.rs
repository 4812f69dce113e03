//! Bundled fixture data: the offline document set and a canned signal
//! list for fixture-mode runs.
//!
//! Fixtures are compiled into the binary with `include_str!` so a
//! fixture-mode run has no filesystem or network preconditions.

use tracing::warn;

use vetsignal_common::Document;
use vetsignal_engine::RepurposeSignal;

const DOCUMENTS_JSON: &str = include_str!("../fixtures/documents.json");

const SIGNAL_FIXTURES: &[&str] = &[include_str!(
    "../fixtures/signals/repurpose-compound-ax-17-example-osteoarthritis-01.json"
)];

/// The bundled document set, normalized.
pub fn fixture_documents() -> Vec<Document> {
    let docs: Vec<Document> =
        serde_json::from_str(DOCUMENTS_JSON).expect("bundled documents.json is valid");
    docs.into_iter().map(Document::normalized).collect()
}

/// The canned signal set for fixture-mode runs. A malformed fixture is
/// skipped with a warning rather than failing the run.
pub fn fixture_signals() -> Vec<RepurposeSignal> {
    SIGNAL_FIXTURES
        .iter()
        .filter_map(|raw| match serde_json::from_str(raw) {
            Ok(signal) => Some(signal),
            Err(e) => {
                warn!("Skipping malformed signal fixture: {e}");
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_documents_parse_and_normalize() {
        let docs = fixture_documents();
        assert_eq!(docs.len(), 6);
        // Species synonyms are folded during normalization
        let canine_doc = docs.iter().find(|d| d.id == "pmid:EXAMPLE-VET-101").unwrap();
        assert_eq!(canine_doc.entities.species, vec!["canine"]);
        let equine_doc = docs.iter().find(|d| d.id == "pmid:EXAMPLE-VET-303").unwrap();
        assert_eq!(equine_doc.entities.species, vec!["equine"]);
    }

    #[test]
    fn test_fixture_signals_parse() {
        let signals = fixture_signals();
        assert_eq!(signals.len(), 1);
        let signal = &signals[0];
        assert_eq!(
            signal.signal_id,
            "repurpose-compound-ax-17-example-osteoarthritis-01"
        );
        assert_eq!(signal.confidence_score, 28);
        assert_eq!(
            signal.disclaimer,
            "Research hypothesis only; not medical advice."
        );
    }

    #[test]
    fn test_fixture_signal_matches_live_synthesis() {
        // The canned signal must stay in lockstep with what the engine
        // produces for the same candidate, provenance aside.
        use vetsignal_engine::analyzers::{
            analyze_failure, analyze_species_rationale, mine_vet_evidence, screen_risks,
        };
        use vetsignal_engine::knowledge::StaticKnowledge;
        use vetsignal_engine::problems::default_problem_briefs;
        use vetsignal_engine::synthesizer::build_signal;

        let candidate = vetsignal_engine::find_candidates(&default_problem_briefs())
            .into_iter()
            .next()
            .unwrap();
        let kb = StaticKnowledge;
        let mut live = build_signal(
            &candidate,
            &analyze_failure(&candidate, &kb),
            &analyze_species_rationale(&candidate, &kb),
            &mine_vet_evidence(&candidate, &kb),
            &screen_risks(&candidate, &kb),
            "repurpose-fixture-run",
        );
        let fixture = fixture_signals().into_iter().next().unwrap();
        live.provenance = fixture.provenance.clone();
        assert_eq!(live, fixture);
    }
}
