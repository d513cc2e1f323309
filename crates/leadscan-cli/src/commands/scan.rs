//! Scan command - submit one scanned badge payload.

use std::fs;
use std::io::Read;
use std::path::PathBuf;

use clap::Args;
use tracing::info;

use leadscan_core::{
    RecordStore, SubmissionPipeline, TemplateConfig, TracingSink, TranscriptSink,
};

use super::load_config;
use crate::notify::{notify_outcome, ConsoleSink};
use crate::store::{DryRunStore, RestRecordStore};

/// Arguments for the scan command.
#[derive(Args)]
pub struct ScanArgs {
    /// Scanned payload (reads stdin when neither this nor --file is given)
    payload: Option<String>,

    /// Read the payload from a file
    #[arg(short, long, conflicts_with = "payload")]
    file: Option<PathBuf>,

    /// Override the configured template with a pattern
    #[arg(long, conflicts_with = "structured")]
    pattern: Option<String>,

    /// Override the configured template with structured-object mode
    #[arg(long)]
    structured: bool,

    /// Submit to an in-process store and print the would-be record
    #[arg(long)]
    dry_run: bool,

    /// Print the submission transcript to stdout
    #[arg(long)]
    show_transcript: bool,
}

pub async fn run(args: ScanArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let mut config = load_config(config_path)?;

    if let Some(pattern) = args.pattern.clone() {
        config.template = TemplateConfig::Pattern { pattern };
    } else if args.structured {
        config.template = TemplateConfig::Structured;
    }

    let payload = read_payload(&args)?;
    info!("processing scanned payload ({} bytes)", payload.len());

    let pipeline = SubmissionPipeline::from_config(&config)
        .map_err(|e| anyhow::anyhow!("cannot build pipeline: {}", e))?;

    let rest_store;
    let store: &dyn RecordStore = if args.dry_run {
        &DryRunStore
    } else {
        rest_store = RestRecordStore::from_config(&config.store)
            .map_err(|e| anyhow::anyhow!("cannot reach record store: {}", e))?;
        &rest_store
    };

    let console_sink = ConsoleSink;
    let tracing_sink = TracingSink;
    let sink: &dyn TranscriptSink = if args.show_transcript {
        &console_sink
    } else {
        &tracing_sink
    };

    let outcome = pipeline
        .handle_scan(std::slice::from_ref(&payload), store, sink)
        .await;

    notify_outcome(&outcome, &config, args.dry_run);

    if !outcome.is_success() {
        std::process::exit(1);
    }

    Ok(())
}

fn read_payload(args: &ScanArgs) -> anyhow::Result<String> {
    if let Some(payload) = &args.payload {
        return Ok(payload.clone());
    }

    if let Some(path) = &args.file {
        if !path.exists() {
            anyhow::bail!("Payload file not found: {}", path.display());
        }
        // Strip the trailing newline editors append; anchored patterns
        // would otherwise never match.
        return Ok(fs::read_to_string(path)?.trim_end_matches('\n').to_string());
    }

    let mut payload = String::new();
    std::io::stdin().read_to_string(&mut payload)?;
    Ok(payload.trim_end_matches('\n').to_string())
}
