// storage/supabase.rs

use crate::model::{OutputRecord, StorageError};
use crate::storage::Upserter;
use reqwest::Client;
use std::time::Duration;
use tracing::{info, warn};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);
const CONFLICT_COLUMNS: &str = "code,name";
const PREFER: &str = "resolution=merge-duplicates,return=representation";

/// Upserts through the PostgREST endpoint of a Supabase project.
pub struct SupabaseUpserter {
    client: Client,
    endpoint: String,
    api_key: String,
}

impl SupabaseUpserter {
    pub fn new(base_url: &str, table: &str, api_key: &str) -> Result<Self, StorageError> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| StorageError::Http(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self::with_client(client, base_url, table, api_key))
    }

    pub fn with_client(client: Client, base_url: &str, table: &str, api_key: &str) -> Self {
        Self {
            client,
            endpoint: Self::build_url(base_url, table),
            api_key: api_key.to_string(),
        }
    }

    fn build_url(base_url: &str, table: &str) -> String {
        format!(
            "{}/rest/v1/{}?on_conflict={}",
            base_url.trim_end_matches('/'),
            table,
            CONFLICT_COLUMNS
        )
    }
}

#[async_trait::async_trait]
impl Upserter for SupabaseUpserter {
    async fn upsert(&self, batch: &[OutputRecord]) -> Result<usize, StorageError> {
        info!("📤 POST {} ({} rows)", self.endpoint, batch.len());
        let response = self
            .client
            .post(&self.endpoint)
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .header("Prefer", PREFER)
            .json(batch)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    StorageError::Timeout
                } else {
                    StorageError::Http(e.to_string())
                }
            })?;

        let status = response.status();
        let body = response.text().await.unwrap_or_else(|_| "unknown".into());
        if !status.is_success() {
            warn!("❌ Supabase responded [{}]: {}", status, body);
            return Err(StorageError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        let returned = serde_json::from_str::<Vec<serde_json::Value>>(&body)
            .map(|rows| rows.len())
            .unwrap_or(batch.len());
        Ok(returned)
    }
}
