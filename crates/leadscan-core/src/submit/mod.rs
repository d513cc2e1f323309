//! Submission pipeline: extract, map, and create records.

mod sinks;

pub use sinks::{Link, Navigator, Notifier, Severity};

use async_trait::async_trait;
use chrono::Utc;
use tracing::{debug, warn};

use crate::error::{LeadscanError, StoreError};
use crate::extract::{ExtractionTemplate, Extractor};
use crate::models::config::ScanConfig;
use crate::models::record::{
    CreatedRecord, DraftRecord, FieldBag, FieldMap, SubmissionOutcome, TargetSchema,
};
use crate::transcript::{Transcript, TranscriptSink};

/// Fixed message surfaced when the scanner collaborator itself fails.
pub const SCANNER_FAILURE_MESSAGE: &str = "Scanning failed. Enter the contact manually instead.";

/// Persists new records. The only suspension point of an attempt is this
/// call; timeouts and retries are the implementation's concern, not the
/// pipeline's.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Create a record of the given type from a bag of field values.
    async fn create(&self, object_type: &str, fields: &FieldBag)
        -> Result<CreatedRecord, StoreError>;
}

/// Drives one end-to-end submission attempt.
///
/// The extractor and target schema are supplied once and persist for the
/// pipeline's lifetime; payload, field map, and transcript are created
/// fresh per attempt. Every attempt flushes its transcript exactly once,
/// on success and on every failure path.
pub struct SubmissionPipeline {
    extractor: Extractor,
    schema: TargetSchema,
}

impl SubmissionPipeline {
    /// Build a pipeline from an extractor and a target schema.
    pub fn new(extractor: Extractor, schema: TargetSchema) -> Self {
        Self { extractor, schema }
    }

    /// Build a pipeline from configuration.
    pub fn from_config(config: &ScanConfig) -> crate::error::Result<Self> {
        let extractor = Extractor::new(ExtractionTemplate::from(&config.template))
            .map_err(LeadscanError::from)?;
        Ok(Self::new(extractor, config.target.to_schema()))
    }

    /// The schema this pipeline submits against.
    pub fn schema(&self) -> &TargetSchema {
        &self.schema
    }

    /// Handle a scan event: extract fields from the first decoded barcode
    /// and submit them. All extraction and store errors are converted to a
    /// `Failure` outcome here; none propagate.
    pub async fn handle_scan(
        &self,
        barcodes: &[String],
        store: &dyn RecordStore,
        sink: &dyn TranscriptSink,
    ) -> SubmissionOutcome {
        let mut log = Transcript::start(format!("Scan received at {}", Utc::now().to_rfc3339()));
        let result = self.scan_attempt(barcodes, store, &mut log).await;
        let outcome = conclude(result, &mut log);
        log.flush(sink);
        outcome
    }

    /// Submit manually entered fields, bypassing the extractor. The
    /// non-empty first/last/company gate belongs to the caller; the
    /// submission steps are identical to the scan path.
    pub async fn submit_manual(
        &self,
        draft: &DraftRecord,
        store: &dyn RecordStore,
        sink: &dyn TranscriptSink,
    ) -> SubmissionOutcome {
        let mut log = Transcript::start(format!("Manual entry at {}", Utc::now().to_rfc3339()));
        let fields = draft.to_field_map();
        let result = self.create_record(&fields, store, &mut log).await;
        let outcome = conclude(result, &mut log);
        log.flush(sink);
        outcome
    }

    /// Handle a scan-error event from the scanner collaborator. No
    /// extraction is attempted; the operator is directed to manual entry.
    pub fn handle_scan_failure(&self, detail: &str, sink: &dyn TranscriptSink) -> SubmissionOutcome {
        warn!("scanner reported an error: {}", detail);

        let mut log = Transcript::start(format!("Scan failed at {}", Utc::now().to_rfc3339()));
        log.append(&format!("Scanner error: {}", detail));
        log.flush(sink);

        SubmissionOutcome::Failure {
            message: SCANNER_FAILURE_MESSAGE.to_string(),
        }
    }

    async fn scan_attempt(
        &self,
        barcodes: &[String],
        store: &dyn RecordStore,
        log: &mut Transcript,
    ) -> Result<CreatedRecord, LeadscanError> {
        // Only the first decoded barcode is ever consumed.
        let payload = barcodes.first().map(String::as_str).unwrap_or("");

        // Operators diagnose template mismatches from these two lines.
        log.append(&format!("Scanned payload: {}", payload));
        log.append(&format!(
            "Active template: {}",
            self.extractor.template().describe()
        ));

        log.append("Extracting fields...");
        let fields = self.extractor.extract(payload)?;
        log.append_inline(" ok!");

        self.create_record(&fields, store, log).await
    }

    /// The submission steps shared by both callers: map logical fields to
    /// target identifiers, then ask the store to create the record.
    async fn create_record(
        &self,
        fields: &FieldMap,
        store: &dyn RecordStore,
        log: &mut Transcript,
    ) -> Result<CreatedRecord, LeadscanError> {
        log.append("Mapping fields...");
        let bag = self.map_fields(fields);
        log.append_inline(" ok!");
        log.append(&format!(
            "Record input for {}: {:?}",
            self.schema.object_type, bag
        ));

        debug!(
            "creating {} record with {} fields",
            self.schema.object_type,
            bag.len()
        );

        log.append(&format!("Creating {} record...", self.schema.object_type));
        let record = store.create(&self.schema.object_type, &bag).await?;
        log.append_inline(" ok!");
        log.append(&format!("Created record with Id: {}", record.id));

        Ok(record)
    }

    /// Build the output field bag. A logical field goes in only when the
    /// schema maps it and the extracted value is non-empty; extracted keys
    /// with no configured target field are dropped silently. Nothing is
    /// required at this layer.
    fn map_fields(&self, fields: &FieldMap) -> FieldBag {
        let mut bag = FieldBag::new();
        for (logical, field_id) in &self.schema.fields {
            if let Some(value) = fields.get(logical).filter(|v| !v.is_empty()) {
                bag.insert(field_id.clone(), value.to_string());
            }
        }
        bag
    }
}

fn conclude(
    result: Result<CreatedRecord, LeadscanError>,
    log: &mut Transcript,
) -> SubmissionOutcome {
    match result {
        Ok(record) => SubmissionOutcome::Success {
            record_id: record.id,
        },
        Err(err) => {
            let message = err.to_string();
            log.append(&format!("Error: {}", message));
            SubmissionOutcome::Failure { message }
        }
    }
}
