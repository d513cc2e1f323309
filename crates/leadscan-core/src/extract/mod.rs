//! Template-driven field extraction from scanned payloads.

mod pattern;
mod structured;

use regex::{Regex, RegexBuilder};
use tracing::debug;

use crate::error::ExtractionError;
use crate::models::config::TemplateConfig;
use crate::models::record::FieldMap;

/// Result type for extraction operations.
pub type Result<T> = std::result::Result<T, ExtractionError>;

/// Configuration describing how to turn a payload into fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractionTemplate {
    /// Payload is a serialized object with a nested name object.
    Structured,

    /// Payload matches a regular expression with named capture groups.
    Pattern(String),
}

impl ExtractionTemplate {
    /// Short description used when echoing the active template.
    pub fn describe(&self) -> String {
        match self {
            ExtractionTemplate::Structured => "structured object".to_string(),
            ExtractionTemplate::Pattern(src) => format!("pattern {}", src),
        }
    }
}

impl From<&TemplateConfig> for ExtractionTemplate {
    fn from(config: &TemplateConfig) -> Self {
        match config {
            TemplateConfig::Structured => ExtractionTemplate::Structured,
            TemplateConfig::Pattern { pattern } => ExtractionTemplate::Pattern(pattern.clone()),
        }
    }
}

#[derive(Debug)]
enum Mode {
    Structured,
    Pattern(Regex),
}

/// Turns scanned payloads into field maps according to a template.
///
/// The template is fixed at construction; a pattern template is compiled
/// exactly once, case-insensitive and with `.` matching newlines so
/// multi-line payloads parse.
#[derive(Debug)]
pub struct Extractor {
    template: ExtractionTemplate,
    mode: Mode,
}

impl Extractor {
    /// Create an extractor for the given template.
    pub fn new(template: ExtractionTemplate) -> Result<Self> {
        let mode = match &template {
            ExtractionTemplate::Structured => Mode::Structured,
            ExtractionTemplate::Pattern(src) => Mode::Pattern(
                RegexBuilder::new(src)
                    .case_insensitive(true)
                    .dot_matches_new_line(true)
                    .build()?,
            ),
        };
        Ok(Self { template, mode })
    }

    /// The template this extractor was configured with.
    pub fn template(&self) -> &ExtractionTemplate {
        &self.template
    }

    /// Extract a field map from a raw scanned payload.
    pub fn extract(&self, payload: &str) -> Result<FieldMap> {
        debug!("extracting fields from {} byte payload", payload.len());

        let fields = match &self.mode {
            Mode::Structured => structured::extract(payload)?,
            Mode::Pattern(re) => pattern::extract(re, payload)?,
        };

        debug!("extracted {} fields", fields.len());
        Ok(fields)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_invalid_pattern_template_rejected() {
        let err = Extractor::new(ExtractionTemplate::Pattern("(?<F>".to_string())).unwrap_err();
        assert!(matches!(err, ExtractionError::Template(_)));
    }

    #[test]
    fn test_extraction_is_idempotent() {
        let extractor =
            Extractor::new(ExtractionTemplate::Pattern(r"F:(?<F>\w+);L:(?<L>\w+)".to_string()))
                .unwrap();
        let first = extractor.extract("F:Jane;L:Doe").unwrap();
        let second = extractor.extract("F:Jane;L:Doe").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_template_from_config() {
        let template = ExtractionTemplate::from(&TemplateConfig::Structured);
        assert_eq!(template, ExtractionTemplate::Structured);

        let template = ExtractionTemplate::from(&TemplateConfig::Pattern {
            pattern: "abc".to_string(),
        });
        assert_eq!(template, ExtractionTemplate::Pattern("abc".to_string()));
    }
}
