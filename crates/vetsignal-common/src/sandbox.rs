use reqwest::{Client, ClientBuilder};
use std::collections::HashSet;
use std::time::Duration;
use url::Url;

use crate::error::VetSignalError;

/// A sandbox-capped HTTP client that only allows requests to approved domains.
/// The connector layer is the sole network surface of the system; capping it
/// here keeps every other crate free of network capability.
#[derive(Debug, Clone)]
pub struct SandboxClient {
    client: Client,
    allowlist: HashSet<String>,
}

impl SandboxClient {
    /// Creates a new SandboxClient with the default allowlist of catalog domains.
    pub fn new() -> Result<Self, VetSignalError> {
        let mut allowlist = HashSet::new();
        let domains = [
            "eutils.ncbi.nlm.nih.gov", // PubMed E-utilities
            "pubmed.ncbi.nlm.nih.gov", // PubMed record pages
            "clinicaltrials.gov",      // ClinicalTrials.gov v2 API
            "localhost",               // test servers
            "127.0.0.1",
        ];

        for d in domains {
            allowlist.insert(d.to_string());
        }

        let client = ClientBuilder::new()
            .timeout(Duration::from_secs(30))
            .user_agent("VetSignal/0.1 (research)")
            .build()
            .map_err(VetSignalError::Http)?;

        Ok(Self { client, allowlist })
    }

    /// Appends an exact hostname to the allowlist.
    pub fn allow_domain(&mut self, domain: &str) {
        self.allowlist.insert(domain.to_string());
    }

    /// Validates if a URL is permitted under the current sandbox policy.
    pub fn is_allowed(&self, url: &str) -> bool {
        if let Ok(parsed) = Url::parse(url) {
            if let Some(host) = parsed.host_str() {
                // Exact match or subdomain of an allowed domain
                for allowed in &self.allowlist {
                    if host == allowed || host.ends_with(&format!(".{allowed}")) {
                        return true;
                    }
                }
            }
        }
        false
    }

    /// Exposes the inner `reqwest::Client` builder pattern for GET requests.
    pub fn get(&self, url: &str) -> Result<reqwest::RequestBuilder, VetSignalError> {
        if !self.is_allowed(url) {
            return Err(VetSignalError::Security(format!(
                "Network capabilities capped: domain not in allowlist for URL {url}"
            )));
        }
        Ok(self.client.get(url))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allowlist_accepts_catalog_domains() {
        let client = SandboxClient::new().unwrap();
        assert!(client.is_allowed("https://eutils.ncbi.nlm.nih.gov/entrez/eutils/esearch.fcgi"));
        assert!(client.is_allowed("https://clinicaltrials.gov/api/v2/studies"));
    }

    #[test]
    fn test_allowlist_rejects_unknown_domains() {
        let client = SandboxClient::new().unwrap();
        assert!(!client.is_allowed("https://example.com/feed"));
        assert!(client.get("https://example.com/feed").is_err());
    }

    #[test]
    fn test_allow_domain_extends_policy() {
        let mut client = SandboxClient::new().unwrap();
        assert!(!client.is_allowed("https://api.example.org/v1"));
        client.allow_domain("api.example.org");
        assert!(client.is_allowed("https://api.example.org/v1"));
    }
}
