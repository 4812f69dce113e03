//! PubMed E-utilities client.
//!
//! Endpoint used:
//!   esearch: https://eutils.ncbi.nlm.nih.gov/entrez/eutils/esearch.fcgi
//!
//! Only the PMID list is consumed; records are published as lightweight
//! pointer documents (`pmid:<id>` with the record page URL), which is all
//! the downstream document sinks need.

use async_trait::async_trait;
use chrono::{SecondsFormat, Utc};
use tracing::{debug, instrument};

use vetsignal_common::sandbox::SandboxClient as Client;
use vetsignal_common::{DocEntities, Document};

use super::DocumentSource;

const ESEARCH_URL: &str = "https://eutils.ncbi.nlm.nih.gov/entrez/eutils/esearch.fcgi";

pub struct PubMedClient {
    client: Client,
    api_key: Option<String>,
}

impl PubMedClient {
    pub fn new(api_key: Option<String>) -> anyhow::Result<Self> {
        Ok(Self {
            client: Client::new()?,
            api_key,
        })
    }

    /// Search PubMed and return a list of PMIDs, newest first.
    #[instrument(skip(self))]
    async fn esearch(&self, term: &str, max: usize) -> anyhow::Result<Vec<String>> {
        let mut params = vec![
            ("db", "pubmed".to_string()),
            ("term", term.to_string()),
            ("retmax", max.to_string()),
            ("sort", "date".to_string()),
            ("retmode", "json".to_string()),
        ];
        if let Some(key) = &self.api_key {
            params.push(("api_key", key.clone()));
        }

        let resp: serde_json::Value = self
            .client
            .get(ESEARCH_URL)?
            .query(&params)
            .send()
            .await?
            .json()
            .await?;

        let ids = resp["esearchresult"]["idlist"]
            .as_array()
            .cloned()
            .unwrap_or_default()
            .iter()
            .filter_map(|v| v.as_str().map(String::from))
            .collect();

        debug!(?ids, "PubMed esearch returned PMIDs");
        Ok(ids)
    }

    /// The standing veterinary-signal query.
    pub async fn fetch_vet_signals(&self) -> anyhow::Result<Vec<Document>> {
        self.search("veterinary case report drug", 10).await
    }
}

fn to_document(pmid: &str, query: &str) -> Document {
    Document {
        id: format!("pmid:{pmid}"),
        source: "pubmed".to_string(),
        url: format!("https://pubmed.ncbi.nlm.nih.gov/{pmid}/"),
        title: format!("PubMed {pmid}"),
        authors: String::new(),
        date: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        abstract_or_snippet: format!("Query match: {query}"),
        doc_type: "review".to_string(),
        entities: DocEntities::default(),
    }
    .normalized()
}

#[async_trait]
impl DocumentSource for PubMedClient {
    async fn search(&self, term: &str, max_results: usize) -> anyhow::Result<Vec<Document>> {
        let pmids = self.esearch(term, max_results).await?;
        Ok(pmids.iter().map(|pmid| to_document(pmid, term)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_document_shape() {
        let doc = to_document("12345", "veterinary case report drug");
        assert_eq!(doc.id, "pmid:12345");
        assert_eq!(doc.source, "pubmed");
        assert_eq!(doc.url, "https://pubmed.ncbi.nlm.nih.gov/12345/");
        assert!(doc.abstract_or_snippet.contains("veterinary case report drug"));
    }

    #[tokio::test]
    #[ignore] // Network call
    async fn test_live_esearch() {
        let client = PubMedClient::new(None).unwrap();
        let docs = client.fetch_vet_signals().await.unwrap();
        assert!(!docs.is_empty());
    }
}
