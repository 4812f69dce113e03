//! Run invocation options.
//!
//! The runner is configured entirely through environment variables (a
//! `.env` file is honored via dotenvy before these are read):
//!
//!   VETSIGNAL_RUN_ID             override the generated run id
//!   VETSIGNAL_USE_FIXTURES       "1"/"true": publish the canned signal set
//!   VETSIGNAL_FETCH_LIVE         "1"/"true": fetch documents from catalogs
//!   VETSIGNAL_INCLUDE_PRIOR_ART  "1"/"true": attach the prior-art stub
//!   VETSIGNAL_OUTPUT_ROOT        sink root directory (default ".")
//!   VETSIGNAL_PROBLEMS_FILE      YAML file overriding the problem briefs

use std::path::PathBuf;

/// Recognized options for one engine invocation.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Run id override; a fresh one is generated when absent.
    pub run_id: Option<String>,
    /// Bypass analysis and publish the bundled fixture signal set.
    pub use_fixtures: bool,
    /// Source input documents from the external catalogs instead of
    /// fixtures, falling back to fixtures on any fetch error.
    pub fetch_live: bool,
    /// Attach the prior-art sub-object to every signal.
    pub include_prior_art: bool,
    /// Directory the output sinks are created under.
    pub output_root: PathBuf,
    /// Optional YAML file overriding the default problem briefs.
    pub problems_file: Option<PathBuf>,
}

impl RunOptions {
    /// Read options from the process environment.
    pub fn from_env() -> Self {
        Self {
            run_id: non_empty_var("VETSIGNAL_RUN_ID"),
            use_fixtures: flag_var("VETSIGNAL_USE_FIXTURES"),
            fetch_live: flag_var("VETSIGNAL_FETCH_LIVE"),
            include_prior_art: flag_var("VETSIGNAL_INCLUDE_PRIOR_ART"),
            output_root: non_empty_var("VETSIGNAL_OUTPUT_ROOT")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(".")),
            problems_file: non_empty_var("VETSIGNAL_PROBLEMS_FILE").map(PathBuf::from),
        }
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

fn flag_var(name: &str) -> bool {
    matches!(
        std::env::var(name).unwrap_or_default().trim(),
        "1" | "true" | "TRUE" | "yes"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_env() {
        // Variables unset in the test environment
        let opts = RunOptions::default();
        assert!(opts.run_id.is_none());
        assert!(!opts.use_fixtures);
        assert!(!opts.fetch_live);
        assert!(!opts.include_prior_art);
    }

    #[test]
    fn test_flag_parsing() {
        std::env::set_var("VETSIGNAL_TEST_FLAG_A", "1");
        std::env::set_var("VETSIGNAL_TEST_FLAG_B", "true");
        std::env::set_var("VETSIGNAL_TEST_FLAG_C", "0");
        assert!(flag_var("VETSIGNAL_TEST_FLAG_A"));
        assert!(flag_var("VETSIGNAL_TEST_FLAG_B"));
        assert!(!flag_var("VETSIGNAL_TEST_FLAG_C"));
        assert!(!flag_var("VETSIGNAL_TEST_FLAG_UNSET"));
    }
}
