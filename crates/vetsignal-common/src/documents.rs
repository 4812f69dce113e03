//! Normalized document model shared by connectors, fixtures, and the publisher.
//!
//! Every record entering the system — whether fetched live or loaded from
//! bundled fixtures — is folded into this one shape. Entity lists are
//! deduplicated and species mentions collapsed onto canonical names so
//! downstream lookups never have to reason about "dog" vs "canine".

use serde::{Deserialize, Serialize};

/// Entities extracted from a document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocEntities {
    #[serde(default)]
    pub drugs: Vec<String>,
    #[serde(default)]
    pub species: Vec<String>,
    #[serde(default)]
    pub conditions: Vec<String>,
    #[serde(default)]
    pub mechanisms: Vec<String>,
}

/// A normalized literature or trial record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Opaque identifier, e.g. `pmid:12345` or `ctgov:NCT04956640`.
    pub id: String,
    /// Originating source name (`pubmed`, `clinicaltrials`, `fixture`).
    pub source: String,
    pub url: String,
    pub title: String,
    #[serde(default)]
    pub authors: String,
    pub date: String,
    pub abstract_or_snippet: String,
    pub doc_type: String,
    #[serde(default)]
    pub entities: DocEntities,
}

impl Document {
    /// Return a copy with entity lists cleaned: species folded onto
    /// canonical names, empties dropped, duplicates removed in
    /// first-seen order.
    pub fn normalized(mut self) -> Self {
        self.entities = DocEntities {
            drugs: normalize_list(self.entities.drugs, |v| Some(v)),
            species: normalize_list(self.entities.species, |v| Some(normalize_species(&v))),
            conditions: normalize_list(self.entities.conditions, |v| Some(v)),
            mechanisms: normalize_list(self.entities.mechanisms, |v| Some(v)),
        };
        self
    }
}

/// Fold common species synonyms onto their canonical veterinary name.
/// Unknown species pass through unchanged.
pub fn normalize_species(value: &str) -> String {
    match value.to_lowercase().as_str() {
        "dog" | "dogs" | "canine" => "canine".to_string(),
        "cat" | "cats" | "feline" => "feline".to_string(),
        "horse" | "horses" | "equine" => "equine".to_string(),
        "cattle" | "bovine" => "bovine".to_string(),
        _ => value.to_string(),
    }
}

/// Apply a normalizer to each entry, drop empties, dedup in first-seen order.
fn normalize_list<F>(list: Vec<String>, normalize: F) -> Vec<String>
where
    F: Fn(String) -> Option<String>,
{
    let mut seen = std::collections::HashSet::new();
    let mut out = Vec::new();
    for item in list {
        if let Some(value) = normalize(item) {
            if !value.is_empty() && seen.insert(value.clone()) {
                out.push(value);
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_species_synonyms_fold() {
        assert_eq!(normalize_species("Dog"), "canine");
        assert_eq!(normalize_species("cats"), "feline");
        assert_eq!(normalize_species("Horses"), "equine");
        assert_eq!(normalize_species("cattle"), "bovine");
        assert_eq!(normalize_species("ferret"), "ferret");
    }

    #[test]
    fn test_normalized_dedups_species() {
        let doc = Document {
            id: "pmid:1".to_string(),
            source: "pubmed".to_string(),
            url: String::new(),
            title: "t".to_string(),
            authors: String::new(),
            date: "2024-01-01".to_string(),
            abstract_or_snippet: String::new(),
            doc_type: "review".to_string(),
            entities: DocEntities {
                drugs: vec!["carprofen".to_string(), "carprofen".to_string()],
                species: vec!["dog".to_string(), "dogs".to_string(), "canine".to_string()],
                conditions: vec![],
                mechanisms: vec![],
            },
        };
        let doc = doc.normalized();
        assert_eq!(doc.entities.drugs, vec!["carprofen"]);
        assert_eq!(doc.entities.species, vec!["canine"]);
    }

    #[test]
    fn test_json_roundtrip_defaults_entities() {
        let json = r#"{
            "id": "ctgov:NCT1",
            "source": "clinicaltrials",
            "url": "",
            "title": "Trial",
            "date": "2024-01-01",
            "abstract_or_snippet": "Condition: OA",
            "doc_type": "trial"
        }"#;
        let doc: Document = serde_json::from_str(json).unwrap();
        assert!(doc.entities.drugs.is_empty());
        assert!(doc.authors.is_empty());
    }
}
