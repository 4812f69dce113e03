//! vetsignal-common — Shared types, errors, and HTTP plumbing used across all VetSignal crates.

pub mod documents;
pub mod error;
pub mod options;
pub mod sandbox;

pub use documents::{DocEntities, Document};
pub use error::{Result, VetSignalError};
pub use options::RunOptions;
