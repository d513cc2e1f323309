//! Core library for badge scan capture.
//!
//! This crate provides:
//! - Template-driven field extraction from scanned payloads (structured
//!   JSON or a configurable regex pattern with named capture groups)
//! - A submission pipeline that maps extracted fields onto a target
//!   record schema and creates the record through a store collaborator
//! - A per-attempt progress transcript flushed to an observability sink
//! - A manual-entry fallback sharing the same submission path

pub mod error;
pub mod extract;
pub mod models;
pub mod submit;
pub mod transcript;

pub use error::{ExtractionError, LeadscanError, Result, StoreError};
pub use extract::{ExtractionTemplate, Extractor};
pub use models::config::{ScanConfig, StoreConfig, TargetConfig, TemplateConfig};
pub use models::record::{
    CreatedRecord, DraftRecord, FieldBag, FieldMap, SubmissionOutcome, TargetSchema,
};
pub use submit::{
    Link, Navigator, Notifier, RecordStore, Severity, SubmissionPipeline,
    SCANNER_FAILURE_MESSAGE,
};
pub use transcript::{TracingSink, Transcript, TranscriptSink};
