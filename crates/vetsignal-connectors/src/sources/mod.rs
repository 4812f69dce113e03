//! Catalog source clients.

pub mod clinicaltrials;
pub mod pubmed;

use async_trait::async_trait;

use vetsignal_common::Document;

/// Common interface for all document source clients.
#[async_trait]
pub trait DocumentSource: Send + Sync {
    /// Search the catalog and return normalized documents.
    async fn search(&self, term: &str, max_results: usize) -> anyhow::Result<Vec<Document>>;
}
