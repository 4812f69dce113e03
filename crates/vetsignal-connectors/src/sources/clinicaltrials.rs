//! ClinicalTrials.gov v2 API client.
//!
//! API docs: https://clinicaltrials.gov/data-api/api
//! Endpoint: https://clinicaltrials.gov/api/v2/studies
//!
//! Failed/terminated studies are the raw material for repurposing leads:
//! each study becomes a `ctgov:<nctId>` document whose snippet carries the
//! condition and phase.

use async_trait::async_trait;
use chrono::{SecondsFormat, Utc};
use tracing::{debug, instrument};

use vetsignal_common::sandbox::SandboxClient as Client;
use vetsignal_common::{DocEntities, Document};

use super::DocumentSource;

const CT_API_URL: &str = "https://clinicaltrials.gov/api/v2/studies";

pub struct ClinicalTrialsClient {
    client: Client,
}

impl ClinicalTrialsClient {
    pub fn new() -> anyhow::Result<Self> {
        Ok(Self {
            client: Client::new()?,
        })
    }

    async fn search_studies(
        &self,
        term: &str,
        status: &str,
        page_size: usize,
    ) -> anyhow::Result<Vec<serde_json::Value>> {
        let resp: serde_json::Value = self
            .client
            .get(CT_API_URL)?
            .query(&[
                ("query.term", term),
                ("filter.overallStatus", status),
                ("pageSize", &page_size.to_string()),
            ])
            .send()
            .await?
            .json()
            .await?;

        Ok(resp["studies"].as_array().cloned().unwrap_or_default())
    }

    /// Fetch terminated studies matching a term.
    #[instrument(skip(self))]
    pub async fn fetch_failed_trials(
        &self,
        term: &str,
        status: &str,
        page_size: usize,
    ) -> anyhow::Result<Vec<Document>> {
        let studies = self.search_studies(term, status, page_size).await?;
        debug!(n = studies.len(), "ClinicalTrials.gov studies retrieved");
        Ok(studies.iter().map(to_document).collect())
    }
}

fn to_document(study: &serde_json::Value) -> Document {
    let ident = &study["protocolSection"]["identificationModule"];
    let nct_id = ident["nctId"].as_str().unwrap_or("");
    let title = ident["briefTitle"].as_str().unwrap_or("Clinical trial");
    let condition = study["protocolSection"]["conditionsModule"]["conditions"][0]
        .as_str()
        .unwrap_or("");
    let phase = study["protocolSection"]["designModule"]["phases"][0]
        .as_str()
        .unwrap_or("");

    let snippet = if phase.is_empty() {
        format!("Condition: {condition}")
    } else {
        format!("Condition: {condition}; Phase: {phase}")
    };

    Document {
        id: if nct_id.is_empty() {
            format!("ctgov:{title}")
        } else {
            format!("ctgov:{nct_id}")
        },
        source: "clinicaltrials".to_string(),
        url: if nct_id.is_empty() {
            String::new()
        } else {
            format!("https://clinicaltrials.gov/study/{nct_id}")
        },
        title: title.to_string(),
        authors: String::new(),
        date: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        abstract_or_snippet: snippet,
        doc_type: "trial".to_string(),
        entities: DocEntities {
            conditions: if condition.is_empty() {
                vec![]
            } else {
                vec![condition.to_string()]
            },
            ..Default::default()
        },
    }
    .normalized()
}

#[async_trait]
impl DocumentSource for ClinicalTrialsClient {
    async fn search(&self, term: &str, max_results: usize) -> anyhow::Result<Vec<Document>> {
        self.fetch_failed_trials(term, "TERMINATED", max_results)
            .await
    }
}
