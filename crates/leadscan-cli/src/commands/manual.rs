//! Manual command - the fallback path when scanning is not usable.

use clap::Args;

use leadscan_core::{DraftRecord, RecordStore, SubmissionPipeline, TracingSink, TranscriptSink};

use super::load_config;
use crate::notify::{notify_outcome, ConsoleSink};
use crate::store::{DryRunStore, RestRecordStore};

/// Arguments for the manual command.
#[derive(Args)]
pub struct ManualArgs {
    /// First name
    #[arg(long)]
    first: String,

    /// Last name
    #[arg(long)]
    last: String,

    /// Company
    #[arg(long)]
    company: String,

    /// Phone number
    #[arg(long)]
    phone: Option<String>,

    /// Email address
    #[arg(long)]
    email: Option<String>,

    /// Submit to an in-process store and print the would-be record
    #[arg(long)]
    dry_run: bool,

    /// Print the submission transcript to stdout
    #[arg(long)]
    show_transcript: bool,
}

pub async fn run(args: ManualArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;

    let draft = DraftRecord {
        first_name: args.first.clone(),
        last_name: args.last.clone(),
        company: args.company.clone(),
        phone: args.phone.clone(),
        email: args.email.clone(),
    };

    // The submit gate lives here, on the caller side, not in the pipeline.
    if !draft.is_submittable() {
        anyhow::bail!("first name, last name, and company must all be non-empty");
    }

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

    let outcome = pipeline.submit_manual(&draft, store, sink).await;

    notify_outcome(&outcome, &config, args.dry_run);

    if !outcome.is_success() {
        std::process::exit(1);
    }

    Ok(())
}
