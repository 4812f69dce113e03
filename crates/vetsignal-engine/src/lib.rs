//! vetsignal-engine — the evidence-fusion pipeline.
//!
//! Turns a small set of target problems into ranked, scored research
//! hypotheses ("signals"), each backed by deduplicated evidence references
//! and a deterministic confidence score:
//!
//!   problem briefs → candidate compounds → per-candidate analyzer set
//!   → scoring + synthesis → RepurposeSignal records
//!
//! Every stage is a pure function of its input plus an injected knowledge
//! source; the engine performs no network I/O and no persistence.

pub mod analyzers;
pub mod bundles;
pub mod candidates;
pub mod ids;
pub mod knowledge;
pub mod pipeline;
pub mod prior_art;
pub mod problems;
pub mod scoring;
pub mod signal;
pub mod synthesizer;

pub use bundles::{EvidenceStrength, FailureType};
pub use candidates::{find_candidates, Candidate};
pub use knowledge::{KnowledgeBase, StaticKnowledge};
pub use pipeline::RepurposeEngine;
pub use problems::{default_problem_briefs, ProblemBrief};
pub use signal::RepurposeSignal;
