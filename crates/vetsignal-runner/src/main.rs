//! VetSignal — Veterinary Drug-Repurposing Signal Engine
//! Entry point for the runner binary.
//!
//! One invocation is one run: load documents (fixtures or live), analyze
//! candidates or replay the canned signal set, publish everything, write
//! the run log, print a summary. Any unhandled failure exits non-zero
//! before a partial signal set reaches the sinks.

use std::sync::Arc;

use chrono::{SecondsFormat, Utc};
use tracing::info;
use tracing_subscriber::EnvFilter;

use vetsignal_common::RunOptions;
use vetsignal_connectors::fixtures::fixture_signals;
use vetsignal_connectors::gather_documents;
use vetsignal_engine::ids::build_run_id;
use vetsignal_engine::prior_art::StubPriorArtScout;
use vetsignal_engine::problems::{default_problem_briefs, load_problem_briefs};
use vetsignal_engine::{RepurposeEngine, StaticKnowledge};
use vetsignal_publisher::{Publisher, SinkSet};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Honor a local .env before options are read
    let _ = dotenvy::dotenv();

    // Initialise structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("vetsignal=debug,info")),
        )
        .init();

    info!("VetSignal starting up...");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));

    let options = RunOptions::from_env();
    let run_id = options.run_id.clone().unwrap_or_else(build_run_id);
    let started_at = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);

    let briefs = match options.problems_file {
        Some(ref path) => {
            info!("Loading problem briefs from {}", path.display());
            load_problem_briefs(path)?
        }
        None => default_problem_briefs(),
    };

    let publisher = Publisher::new(SinkSet::under(&options.output_root));

    let documents = gather_documents(options.fetch_live).await;
    let document_count = publisher.publish_documents(&documents)?;
    info!(document_count, "Documents published");

    let signals = if options.use_fixtures {
        info!("Fixture mode: publishing the canned signal set");
        fixture_signals()
    } else {
        let mut engine = RepurposeEngine::new(Arc::new(StaticKnowledge));
        if options.include_prior_art {
            engine = engine.with_prior_art(Arc::new(StubPriorArtScout));
        }
        engine.run(&briefs, &run_id).await?
    };

    let outputs = publisher.publish_signals(&signals, &run_id)?;

    let log_payload = serde_json::json!({
        "run_id": run_id,
        "started_at": started_at,
        "use_fixtures": options.use_fixtures,
        "fetch_live": options.fetch_live,
        "include_prior_art": options.include_prior_art,
        "document_count": document_count,
        "signal_count": signals.len(),
        "outputs": outputs,
    });
    let log_path = publisher.write_run_log(&run_id, &log_payload)?;

    info!("Repurpose run complete: {run_id}");
    info!("Signals: {}", signals.len());
    info!("Log: {}", log_path.display());

    Ok(())
}
