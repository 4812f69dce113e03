//! vetsignal-connectors — thin I/O wrappers around the external catalogs,
//! plus the bundled fixture document and signal sets.
//!
//! The pipeline itself never performs network I/O; everything here sits at
//! the interface boundary and produces normalized `Document` records. The
//! live path is opt-in and falls back to fixtures on any fetch error.

pub mod fixtures;
pub mod sources;

use tracing::warn;

use vetsignal_common::Document;

use crate::sources::clinicaltrials::ClinicalTrialsClient;
use crate::sources::pubmed::PubMedClient;

/// Load the input document set: live from the catalogs when requested,
/// bundled fixtures otherwise — and on any live-fetch failure.
pub async fn gather_documents(fetch_live: bool) -> Vec<Document> {
    if fetch_live {
        match fetch_live_documents().await {
            Ok(docs) => return docs,
            Err(e) => {
                warn!("Live fetch failed, falling back to fixtures: {e}");
            }
        }
    }
    fixtures::fixture_documents()
}

async fn fetch_live_documents() -> anyhow::Result<Vec<Document>> {
    let pubmed = PubMedClient::new(None)?;
    let trials = ClinicalTrialsClient::new()?;
    let (vet_docs, trial_docs) = tokio::try_join!(
        pubmed.fetch_vet_signals(),
        trials.fetch_failed_trials("drug terminated", "TERMINATED", 10),
    )?;
    Ok(vet_docs.into_iter().chain(trial_docs).collect())
}
