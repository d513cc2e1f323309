//! Record data models: extracted fields, target mapping, and outcomes.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

// Logical field keys produced by the structured extraction path and the
// manual-entry draft.
pub const FIRST_NAME: &str = "firstname";
pub const LAST_NAME: &str = "lastname";
pub const COMPANY: &str = "company";
pub const PHONE: &str = "phone";
pub const EMAIL: &str = "email";

/// Target field identifier -> value, as handed to the record store.
pub type FieldBag = BTreeMap<String, String>;

/// Mapping from logical field name to extracted string value.
///
/// Keys are present only when the corresponding capture group participated
/// in the match or the corresponding JSON key existed; absent keys are
/// omitted, never stored as empty strings by the extractor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldMap(BTreeMap<String, String>);

impl FieldMap {
    /// Create an empty field map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value under a logical field name.
    pub fn insert(&mut self, logical: impl Into<String>, value: impl Into<String>) {
        self.0.insert(logical.into(), value.into());
    }

    /// Get the value for a logical field name, if present.
    pub fn get(&self, logical: &str) -> Option<&str> {
        self.0.get(logical).map(String::as_str)
    }

    /// Number of extracted fields.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check whether no fields were extracted.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over (logical name, value) pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl FromIterator<(String, String)> for FieldMap {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Mapping from logical field names to a target record type and its field
/// identifiers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetSchema {
    /// API name of the record type to create.
    pub object_type: String,

    /// Logical field name -> target field identifier.
    pub fields: BTreeMap<String, String>,
}

impl TargetSchema {
    /// Create a schema for an arbitrary record type.
    pub fn new(object_type: impl Into<String>) -> Self {
        Self {
            object_type: object_type.into(),
            fields: BTreeMap::new(),
        }
    }

    /// Map a logical field name to a target field identifier.
    pub fn with_field(mut self, logical: impl Into<String>, field_id: impl Into<String>) -> Self {
        self.fields.insert(logical.into(), field_id.into());
        self
    }

    /// The fixed Lead mapping used before the schema became configurable.
    /// Covers both the structured-payload keys and the single-letter group
    /// names of the default badge pattern.
    pub fn lead() -> Self {
        Self::new("Lead")
            .with_field(FIRST_NAME, "FirstName")
            .with_field(LAST_NAME, "LastName")
            .with_field(COMPANY, "Company")
            .with_field(PHONE, "Phone")
            .with_field(EMAIL, "Email")
            .with_field("F", "FirstName")
            .with_field("L", "LastName")
            .with_field("C", "Company")
            .with_field("P", "Phone")
            .with_field("E", "Email")
    }
}

impl Default for TargetSchema {
    fn default() -> Self {
        Self::lead()
    }
}

/// Manually entered field values, the fallback when scanning is not usable.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DraftRecord {
    /// First name (required to submit).
    pub first_name: String,

    /// Last name (required to submit).
    pub last_name: String,

    /// Company (required to submit).
    pub company: String,

    /// Phone number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    /// Email address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl DraftRecord {
    /// The caller-side gate for the manual path: first name, last name, and
    /// company must all be non-empty before submission is offered.
    pub fn is_submittable(&self) -> bool {
        !self.first_name.trim().is_empty()
            && !self.last_name.trim().is_empty()
            && !self.company.trim().is_empty()
    }

    /// Convert the draft into the same field map shape the extractor
    /// produces, so both paths share one submission function.
    pub fn to_field_map(&self) -> FieldMap {
        let mut fields = FieldMap::new();
        if !self.first_name.is_empty() {
            fields.insert(FIRST_NAME, self.first_name.clone());
        }
        if !self.last_name.is_empty() {
            fields.insert(LAST_NAME, self.last_name.clone());
        }
        if !self.company.is_empty() {
            fields.insert(COMPANY, self.company.clone());
        }
        if let Some(phone) = self.phone.as_deref().filter(|p| !p.is_empty()) {
            fields.insert(PHONE, phone);
        }
        if let Some(email) = self.email.as_deref().filter(|e| !e.is_empty()) {
            fields.insert(EMAIL, email);
        }
        fields
    }
}

/// Identifier returned by the record store on a successful create.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedRecord {
    /// Store-assigned record identifier.
    pub id: String,
}

/// Outcome of one submission attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum SubmissionOutcome {
    /// A record was created.
    Success {
        /// Identifier of the created record.
        record_id: String,
    },

    /// The attempt failed; the message is safe to surface to the operator.
    Failure {
        /// User-facing failure description.
        message: String,
    },
}

impl SubmissionOutcome {
    /// Whether the attempt created a record.
    pub fn is_success(&self) -> bool {
        matches!(self, SubmissionOutcome::Success { .. })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_lead_schema_covers_contact_fields() {
        let schema = TargetSchema::lead();
        assert_eq!(schema.object_type, "Lead");
        assert_eq!(schema.fields.get(FIRST_NAME).unwrap(), "FirstName");
        assert_eq!(schema.fields.get(LAST_NAME).unwrap(), "LastName");
        assert_eq!(schema.fields.get(COMPANY).unwrap(), "Company");
        assert_eq!(schema.fields.get(PHONE).unwrap(), "Phone");
        assert_eq!(schema.fields.get(EMAIL).unwrap(), "Email");
        // Badge-group aliases land on the same target fields.
        assert_eq!(schema.fields.get("F").unwrap(), "FirstName");
        assert_eq!(schema.fields.get("E").unwrap(), "Email");
    }

    #[test]
    fn test_draft_gate_requires_first_last_company() {
        let mut draft = DraftRecord {
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            company: "Acme".to_string(),
            ..Default::default()
        };
        assert!(draft.is_submittable());

        draft.company = "   ".to_string();
        assert!(!draft.is_submittable());
    }

    #[test]
    fn test_draft_to_field_map_omits_empty_optionals() {
        let draft = DraftRecord {
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            company: "Acme".to_string(),
            phone: Some(String::new()),
            email: None,
        };
        let fields = draft.to_field_map();
        assert_eq!(fields.len(), 3);
        assert_eq!(fields.get(PHONE), None);
        assert_eq!(fields.get(EMAIL), None);
    }
}
