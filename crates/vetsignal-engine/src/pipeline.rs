//! Run orchestration: fan-out over candidates, join before publication.
//!
//! Each candidate's analysis is independent of every other candidate's, so
//! candidates are processed as concurrent tasks. Indexes are assigned by
//! the candidate finder before the fan-out begins and never reassigned;
//! signals are collected back in candidate order.

use std::sync::Arc;

use tracing::{debug, info, instrument};

use vetsignal_common::{Result, VetSignalError};

use crate::analyzers::{
    analyze_failure, analyze_species_rationale, mine_vet_evidence, screen_risks,
};
use crate::candidates::{find_candidates, Candidate};
use crate::knowledge::KnowledgeBase;
use crate::prior_art::PriorArtScout;
use crate::problems::ProblemBrief;
use crate::signal::RepurposeSignal;
use crate::synthesizer::build_signal;

/// The evidence-fusion engine. Holds the injected knowledge source and
/// the optional prior-art capability; both are shared read-only across
/// candidate tasks.
pub struct RepurposeEngine {
    knowledge: Arc<dyn KnowledgeBase>,
    prior_art: Option<Arc<dyn PriorArtScout>>,
}

/// Analyze one candidate through all four analyzers and synthesize its
/// signal. Pure given the knowledge source.
fn analyze_candidate(
    candidate: &Candidate,
    knowledge: &dyn KnowledgeBase,
    prior_art: Option<&dyn PriorArtScout>,
    run_id: &str,
) -> RepurposeSignal {
    let failure_bundle = analyze_failure(candidate, knowledge);
    let species_bundles = analyze_species_rationale(candidate, knowledge);
    let vet_evidence_bundles = mine_vet_evidence(candidate, knowledge);
    let risk_bundles = screen_risks(candidate, knowledge);

    let mut signal = build_signal(
        candidate,
        &failure_bundle,
        &species_bundles,
        &vet_evidence_bundles,
        &risk_bundles,
        run_id,
    );

    if let Some(scout) = prior_art {
        signal.prior_art = Some(scout.scout(&signal));
    }

    debug!(
        signal_id = %signal.signal_id,
        confidence = signal.confidence_score,
        risk = signal.risk.overall_risk,
        "Candidate analyzed"
    );
    signal
}

impl RepurposeEngine {
    pub fn new(knowledge: Arc<dyn KnowledgeBase>) -> Self {
        Self {
            knowledge,
            prior_art: None,
        }
    }

    /// Enable prior-art screening for this engine instance.
    pub fn with_prior_art(mut self, scout: Arc<dyn PriorArtScout>) -> Self {
        self.prior_art = Some(scout);
        self
    }

    /// Run the full pipeline over the given problem briefs.
    ///
    /// Candidates are processed concurrently; the returned signal list is
    /// in candidate-index order regardless of task completion order.
    #[instrument(skip(self, briefs))]
    pub async fn run(&self, briefs: &[ProblemBrief], run_id: &str) -> Result<Vec<RepurposeSignal>> {
        let candidates = find_candidates(briefs);
        info!(
            briefs = briefs.len(),
            candidates = candidates.len(),
            run_id,
            "Starting repurpose run"
        );

        let mut handles = Vec::with_capacity(candidates.len());
        for candidate in candidates {
            let knowledge = Arc::clone(&self.knowledge);
            let prior_art = self.prior_art.clone();
            let run_id = run_id.to_string();
            handles.push(tokio::spawn(async move {
                analyze_candidate(
                    &candidate,
                    knowledge.as_ref(),
                    prior_art.as_deref(),
                    &run_id,
                )
            }));
        }

        let mut signals = Vec::with_capacity(handles.len());
        for handle in handles {
            let signal = handle
                .await
                .map_err(|e| VetSignalError::Pipeline(format!("candidate task failed: {e}")))?;
            signals.push(signal);
        }

        info!(signals = signals.len(), run_id, "Repurpose run complete");
        Ok(signals)
    }
}
