//! Configuration structures for the scan capture pipeline.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::record::TargetSchema;

/// Main configuration, supplied once per component instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// How scanned payloads are turned into fields.
    pub template: TemplateConfig,

    /// Target record type and field mapping.
    pub target: TargetConfig,

    /// Record store endpoint settings.
    pub store: StoreConfig,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            template: TemplateConfig::default(),
            target: TargetConfig::default(),
            store: StoreConfig::default(),
        }
    }
}

/// Extraction template configuration.
///
/// Deployments configure the expected badge layout here; the pattern is
/// runtime configuration, not a compile-time schema.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum TemplateConfig {
    /// Payload is a serialized object with a nested name object.
    Structured,

    /// Payload matches a regular expression with named capture groups.
    Pattern {
        /// Pattern source with named groups, at minimum `F` and `L`.
        pattern: String,
    },
}

/// Badge layout used when no pattern is configured: `F:..;L:..;C:..` with
/// optional `;P:..` and `;E:..` tails.
pub const DEFAULT_BADGE_PATTERN: &str =
    r"^F:(?<F>[^;]+);L:(?<L>[^;]+);C:(?<C>[^;]+)(?:;P:(?<P>[^;]+))?(?:;E:(?<E>[^;]+))?$";

impl Default for TemplateConfig {
    fn default() -> Self {
        Self::Pattern {
            pattern: DEFAULT_BADGE_PATTERN.to_string(),
        }
    }
}

/// Target record type and logical-field mapping.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TargetConfig {
    /// API name of the record type to create.
    pub object_type: String,

    /// Logical field name -> target field identifier.
    pub fields: BTreeMap<String, String>,
}

impl Default for TargetConfig {
    fn default() -> Self {
        let schema = TargetSchema::lead();
        Self {
            object_type: schema.object_type,
            fields: schema.fields,
        }
    }
}

impl TargetConfig {
    /// Build the schema value the submission pipeline consumes.
    pub fn to_schema(&self) -> TargetSchema {
        TargetSchema {
            object_type: self.object_type.clone(),
            fields: self.fields.clone(),
        }
    }
}

/// Record store endpoint settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Base URL of the record API.
    pub base_url: String,

    /// Bearer token sent with create requests.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_token: Option<String>,

    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            api_token: None,
            timeout_secs: 30,
        }
    }
}

impl ScanConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<(), std::io::Error> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))?;
        std::fs::write(path, content)
    }
}
