//! Problem source: the target species/condition pairs a run starts from.
//!
//! The default set is fixed data regenerated on every invocation. Users can
//! point `VETSIGNAL_PROBLEMS_FILE` at a YAML list to investigate their own
//! problems without touching code.

use serde::{Deserialize, Serialize};
use std::path::Path;

use vetsignal_common::Result;

/// A target species/condition pair with supporting rationale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProblemBrief {
    pub problem_id: String,
    pub target_species: Vec<String>,
    pub condition: String,
    #[serde(default)]
    pub keywords: Vec<String>,
    pub rationale: String,
}

/// The built-in problem set.
pub fn default_problem_briefs() -> Vec<ProblemBrief> {
    vec![
        ProblemBrief {
            problem_id: "canine-osteoarthritis".to_string(),
            target_species: vec!["canine".to_string()],
            condition: "Osteoarthritis".to_string(),
            keywords: vec![
                "pain".to_string(),
                "inflammation".to_string(),
                "mobility".to_string(),
            ],
            rationale: "High prevalence with ongoing need for safer long-term management."
                .to_string(),
        },
        ProblemBrief {
            problem_id: "feline-ckd".to_string(),
            target_species: vec!["feline".to_string()],
            condition: "Chronic kidney disease".to_string(),
            keywords: vec![
                "renal".to_string(),
                "fibrosis".to_string(),
                "glomerular".to_string(),
            ],
            rationale: "Progressive disease with limited disease-modifying options.".to_string(),
        },
        ProblemBrief {
            problem_id: "equine-laminitis".to_string(),
            target_species: vec!["equine".to_string()],
            condition: "Laminitis".to_string(),
            keywords: vec![
                "inflammation".to_string(),
                "vascular".to_string(),
                "metabolic".to_string(),
            ],
            rationale: "Severe outcomes; need for mechanism-based interventions.".to_string(),
        },
    ]
}

/// Load problem briefs from a YAML file.
pub fn load_problem_briefs(path: &Path) -> Result<Vec<ProblemBrief>> {
    let content = std::fs::read_to_string(path)?;
    let briefs: Vec<ProblemBrief> = serde_yaml::from_str(&content)?;
    Ok(briefs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_briefs_cover_three_species() {
        let briefs = default_problem_briefs();
        assert_eq!(briefs.len(), 3);
        let species: Vec<&str> = briefs
            .iter()
            .flat_map(|b| b.target_species.iter().map(String::as_str))
            .collect();
        assert_eq!(species, vec!["canine", "feline", "equine"]);
    }

    #[test]
    fn test_yaml_roundtrip() {
        let briefs = default_problem_briefs();
        let yaml = serde_yaml::to_string(&briefs).unwrap();
        let parsed: Vec<ProblemBrief> = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(briefs, parsed);
    }
}
