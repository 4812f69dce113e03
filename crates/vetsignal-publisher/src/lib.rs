//! vetsignal-publisher — multi-sink, atomic publication of signal sets.
//!
//! The publisher fans identical copies out to every configured sink: a
//! working-storage sink (`memory/`), a docs sink, and a public-facing
//! sink. Each sink receives the aggregate index plus one document per
//! signal. Every write is tempfile-then-rename, so a failed write never
//! leaves a partially written document behind. Republication with the
//! same run id fully replaces prior files.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use vetsignal_common::{Document, Result, VetSignalError};
use vetsignal_engine::RepurposeSignal;

const INDEX_NAME: &str = "signals.json";

// ── Sinks ─────────────────────────────────────────────────────────────────────

/// The output directory set for one publisher instance. Constructed
/// explicitly by the run entry point; there is no ambient process-wide
/// output state.
#[derive(Debug, Clone)]
pub struct SinkSet {
    pub memory_dir: PathBuf,
    pub docs_dir: PathBuf,
    pub public_dir: PathBuf,
}

impl SinkSet {
    /// The conventional layout under an output root.
    pub fn under(root: &Path) -> Self {
        Self {
            memory_dir: root.join("memory").join("repurpose"),
            docs_dir: root.join("docs").join("repurpose"),
            public_dir: root.join("public").join("repurpose"),
        }
    }

    fn all(&self) -> [&Path; 3] {
        [&self.memory_dir, &self.docs_dir, &self.public_dir]
    }
}

/// Index paths written, one per sink.
#[derive(Debug, Clone, Serialize)]
pub struct PublishOutputs {
    pub memory: PathBuf,
    pub docs: PathBuf,
    pub public: PathBuf,
}

// ── Index documents ───────────────────────────────────────────────────────────

/// Abbreviated view of one signal inside the run index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexEntry {
    pub signal_id: String,
    pub compound: String,
    pub proposed_species: Vec<String>,
    pub proposed_condition: String,
    pub confidence_score: i64,
    pub risk_overall: i64,
    pub summary_hypothesis: String,
    pub executive_summary: Vec<String>,
    pub disclaimer: String,
}

impl IndexEntry {
    fn from_signal(signal: &RepurposeSignal) -> Self {
        Self {
            signal_id: signal.signal_id.clone(),
            compound: signal.compound.clone(),
            proposed_species: signal.proposed_species.clone(),
            proposed_condition: signal.proposed_condition.clone(),
            confidence_score: signal.confidence_score,
            risk_overall: signal.risk.overall_risk,
            summary_hypothesis: signal.summary_hypothesis.clone(),
            executive_summary: signal.reasoning_summaries.executive_summary.clone(),
            disclaimer: signal.disclaimer.clone(),
        }
    }
}

/// The aggregate run index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunIndex {
    pub run_id: String,
    pub updated_at: String,
    pub total: usize,
    pub signals: Vec<IndexEntry>,
}

/// Last-run marker, written to the working sink once per invocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunMarker {
    pub run_id: String,
    pub updated_at: String,
}

/// Published view of the input document set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentsPayload {
    pub updated_at: String,
    pub total: usize,
    pub documents: Vec<Document>,
}

// ── Publisher ─────────────────────────────────────────────────────────────────

pub struct Publisher {
    sinks: SinkSet,
}

impl Publisher {
    pub fn new(sinks: SinkSet) -> Self {
        Self { sinks }
    }

    /// Publish the signal set: one document per signal plus the aggregate
    /// index to every sink, then the last-run marker. Signal documents are
    /// written before the index so a failure cannot leave an index that
    /// references missing documents.
    pub fn publish_signals(
        &self,
        signals: &[RepurposeSignal],
        run_id: &str,
    ) -> Result<PublishOutputs> {
        self.publish_signals_at(signals, run_id, Utc::now())
    }

    /// Same as `publish_signals` with an explicit timestamp, so identical
    /// inputs produce byte-identical output files.
    pub fn publish_signals_at(
        &self,
        signals: &[RepurposeSignal],
        run_id: &str,
        updated_at: DateTime<Utc>,
    ) -> Result<PublishOutputs> {
        let stamp = iso_stamp(updated_at);
        let index = RunIndex {
            run_id: run_id.to_string(),
            updated_at: stamp.clone(),
            total: signals.len(),
            signals: signals.iter().map(IndexEntry::from_signal).collect(),
        };

        for signal in signals {
            let file_name = format!("{}.json", signal.signal_id);
            for sink in self.sinks.all() {
                write_json_atomic(&sink.join("signals").join(&file_name), signal)?;
            }
            debug!(signal_id = %signal.signal_id, "Signal published");
        }

        for sink in self.sinks.all() {
            write_json_atomic(&sink.join(INDEX_NAME), &index)?;
        }

        let marker = RunMarker {
            run_id: run_id.to_string(),
            updated_at: stamp,
        };
        write_json_atomic(&self.sinks.memory_dir.join("last-run.json"), &marker)?;

        info!(run_id, total = signals.len(), "Signal set published");
        Ok(PublishOutputs {
            memory: self.sinks.memory_dir.join(INDEX_NAME),
            docs: self.sinks.docs_dir.join(INDEX_NAME),
            public: self.sinks.public_dir.join(INDEX_NAME),
        })
    }

    /// Publish the input document set to every sink. Returns the count.
    pub fn publish_documents(&self, documents: &[Document]) -> Result<usize> {
        self.publish_documents_at(documents, Utc::now())
    }

    pub fn publish_documents_at(
        &self,
        documents: &[Document],
        updated_at: DateTime<Utc>,
    ) -> Result<usize> {
        let payload = DocumentsPayload {
            updated_at: iso_stamp(updated_at),
            total: documents.len(),
            documents: documents.to_vec(),
        };
        for sink in self.sinks.all() {
            write_json_atomic(&sink.join("documents.json"), &payload)?;
        }
        Ok(payload.total)
    }

    /// Write the per-run JSON log under the working sink. Returns the
    /// log path for the console summary.
    pub fn write_run_log(&self, run_id: &str, payload: &serde_json::Value) -> Result<PathBuf> {
        let path = self
            .sinks
            .memory_dir
            .join("logs")
            .join(format!("{run_id}.json"));
        write_json_atomic(&path, payload)?;
        Ok(path)
    }
}

// ── Atomic write ──────────────────────────────────────────────────────────────

/// Serialize to pretty JSON and atomically replace `path`: the document
/// is staged in a temp file in the target directory and renamed into
/// place, so readers never observe a partial write.
fn write_json_atomic<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let dir = path
        .parent()
        .ok_or_else(|| VetSignalError::Publish(format!("no parent directory: {}", path.display())))?;
    std::fs::create_dir_all(dir)?;

    let json = serde_json::to_string_pretty(value)?;
    let mut staged = tempfile::NamedTempFile::new_in(dir)?;
    staged.write_all(json.as_bytes())?;
    staged
        .persist(path)
        .map_err(|e| VetSignalError::Publish(format!("{}: {}", path.display(), e.error)))?;
    Ok(())
}

fn iso_stamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}
