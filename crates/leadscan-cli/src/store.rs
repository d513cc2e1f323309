//! Record store implementations for the CLI.

use std::time::Duration;

use async_trait::async_trait;
use console::style;
use tracing::debug;

use leadscan_core::{CreatedRecord, FieldBag, RecordStore, StoreConfig, StoreError};

/// REST-backed record store: `POST {base_url}/api/records/{object_type}`
/// with the field bag as a JSON object, expecting `{"id": ...}` back.
pub struct RestRecordStore {
    client: reqwest::Client,
    base_url: String,
    api_token: Option<String>,
}

impl RestRecordStore {
    /// Build a store client from endpoint settings.
    pub fn from_config(config: &StoreConfig) -> Result<Self, StoreError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_token: config.api_token.clone(),
        })
    }
}

#[async_trait]
impl RecordStore for RestRecordStore {
    async fn create(
        &self,
        object_type: &str,
        fields: &FieldBag,
    ) -> Result<CreatedRecord, StoreError> {
        let url = format!("{}/api/records/{}", self.base_url, object_type);
        debug!("POST {} with {} fields", url, fields.len());

        let mut request = self.client.post(&url).json(fields);
        if let Some(token) = &self.api_token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(StoreError::Rejected(format!("{} {}", status, detail.trim())));
        }

        response
            .json::<CreatedRecord>()
            .await
            .map_err(|e| StoreError::Rejected(format!("unreadable create response: {}", e)))
    }
}

/// In-process store for `--dry-run`: prints the would-be record and
/// returns a synthetic identifier.
pub struct DryRunStore;

#[async_trait]
impl RecordStore for DryRunStore {
    async fn create(
        &self,
        object_type: &str,
        fields: &FieldBag,
    ) -> Result<CreatedRecord, StoreError> {
        println!("{} Would create {} record:", style("ℹ").blue(), object_type);
        for (field, value) in fields {
            println!("    {} = {}", field, value);
        }

        Ok(CreatedRecord {
            id: "DRYRUN-0001".to_string(),
        })
    }
}
