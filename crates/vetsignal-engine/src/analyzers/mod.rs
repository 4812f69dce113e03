//! The analyzer set: four independent, per-candidate analysis stages.
//!
//! Each analyzer is a pure function of a candidate plus an injected
//! `KnowledgeBase`. Failure analysis runs once per candidate (failure
//! history is intrinsic to the compound/indication pair); the other three
//! run once per target species. A lookup miss is never an error — every
//! analyzer has a documented default, so the set is total over the
//! candidate space.

pub mod failure;
pub mod risk;
pub mod species_rationale;
pub mod vet_evidence;

pub use failure::analyze_failure;
pub use risk::screen_risks;
pub use species_rationale::analyze_species_rationale;
pub use vet_evidence::mine_vet_evidence;
