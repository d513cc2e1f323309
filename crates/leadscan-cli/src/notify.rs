//! Console implementations of the operator feedback sinks.

use console::style;

use leadscan_core::{
    Link, Navigator, Notifier, ScanConfig, Severity, SubmissionOutcome, TranscriptSink,
};

/// Styled console notifier.
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, label: &str, severity: Severity, link: Option<&Link>) {
        match severity {
            Severity::Success => println!("{} {}", style("✓").green(), label),
            Severity::Error => eprintln!("{} {}", style("✗").red(), label),
        }
        if let Some(link) = link {
            println!("  {}: {}", link.label, style(&link.url).underlined());
        }
    }
}

/// Console navigator: surfaces the open-creation-form intent as a URL the
/// operator can follow.
pub struct ConsoleNavigator {
    base_url: String,
}

impl ConsoleNavigator {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

impl Navigator for ConsoleNavigator {
    fn open_create_form(&self, object_type: &str) {
        println!(
            "{} Open the {} creation form: {}/records/{}/new",
            style("→").cyan(),
            object_type,
            self.base_url,
            object_type
        );
    }
}

/// Prints the flushed submission transcript for the operator.
pub struct ConsoleSink;

impl TranscriptSink for ConsoleSink {
    fn publish(&self, transcript: &str) {
        println!("{}", style("--- transcript ---").dim());
        println!("{}", transcript);
        println!("{}", style("------------------").dim());
    }
}

/// Surface a submission outcome through the notifier, with a record link
/// when the store base URL leads somewhere real.
pub(crate) fn notify_outcome(outcome: &SubmissionOutcome, config: &ScanConfig, dry_run: bool) {
    let notifier = ConsoleNotifier;
    match outcome {
        SubmissionOutcome::Success { record_id } => {
            let link = (!dry_run && !config.store.base_url.is_empty()).then(|| Link {
                label: "View record".to_string(),
                url: format!(
                    "{}/records/{}",
                    config.store.base_url.trim_end_matches('/'),
                    record_id
                ),
            });
            notifier.notify(
                &format!("{} created with Id: {}", config.target.object_type, record_id),
                Severity::Success,
                link.as_ref(),
            );
        }
        SubmissionOutcome::Failure { message } => {
            notifier.notify(&format!("Error: {}", message), Severity::Error, None);
        }
    }
}
