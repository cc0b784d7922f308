use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::json;
use tracing::debug;

use chime_core::config::StoreConfig;
use chime_core::reminder::{Device, Reminder, Settings};

use crate::error::StoreError;
use crate::store::ReminderStore;

/// Supabase/PostgREST client.
///
/// Every table is reachable under `{project}/rest/v1/{table}`; reads are
/// plain GETs with a `select=*` query, the single write this service
/// performs is a PATCH filtered by primary key. Auth is the service-role
/// key in both the `apikey` and `Authorization` headers.
#[derive(Debug, Clone)]
pub struct SupabaseStore {
    client: reqwest::Client,
    base_url: String,
    key: String,
}

impl SupabaseStore {
    pub fn new(config: &StoreConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: config.url.trim_end_matches('/').to_string(),
            key: config.key.clone(),
        }
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url, table)
    }

    fn apply_auth(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        builder
            .header("apikey", &self.key)
            .header("Authorization", format!("Bearer {}", self.key))
    }

    /// GET `{table}?select=*` and decode the rows.
    async fn select_all<T: DeserializeOwned>(&self, table: &str) -> Result<Vec<T>, StoreError> {
        debug!(table, "fetching rows");

        let builder = self
            .client
            .get(self.table_url(table))
            .query(&[("select", "*")]);
        let resp = self.apply_auth(builder).send().await?;

        let status = resp.status().as_u16();
        if !resp.status().is_success() {
            let message = resp.text().await.unwrap_or_default();
            return Err(StoreError::Api { status, message });
        }

        resp.json::<Vec<T>>()
            .await
            .map_err(|e| StoreError::Parse(e.to_string()))
    }
}

#[async_trait]
impl ReminderStore for SupabaseStore {
    async fn fetch_reminders(&self) -> Result<Vec<Reminder>, StoreError> {
        self.select_all("reminders").await
    }

    async fn fetch_devices(&self) -> Result<Vec<Device>, StoreError> {
        self.select_all("devices").await
    }

    async fn fetch_settings(&self) -> Result<Option<Settings>, StoreError> {
        debug!("fetching settings singleton");

        let builder = self
            .client
            .get(self.table_url("settings"))
            .query(&[("select", "*"), ("limit", "1")]);
        let resp = self.apply_auth(builder).send().await?;

        let status = resp.status().as_u16();
        if !resp.status().is_success() {
            let message = resp.text().await.unwrap_or_default();
            return Err(StoreError::Api { status, message });
        }

        let mut rows: Vec<Settings> = resp
            .json()
            .await
            .map_err(|e| StoreError::Parse(e.to_string()))?;
        Ok(if rows.is_empty() {
            None
        } else {
            Some(rows.remove(0))
        })
    }

    async fn update_next_date(
        &self,
        id: &str,
        next_date: Option<&str>,
    ) -> Result<(), StoreError> {
        debug!(reminder_id = %id, next_date = ?next_date, "updating due timestamp");

        let builder = self
            .client
            .patch(self.table_url("reminders"))
            .query(&[("id", format!("eq.{id}"))])
            .header("Prefer", "return=minimal")
            .json(&json!({ "next_date": next_date }));
        let resp = self.apply_auth(builder).send().await?;

        let status = resp.status().as_u16();
        if !resp.status().is_success() {
            let message = resp.text().await.unwrap_or_default();
            return Err(StoreError::Api { status, message });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store(url: &str) -> SupabaseStore {
        SupabaseStore::new(&StoreConfig {
            url: url.to_string(),
            key: "service-role-key".to_string(),
        })
    }

    #[test]
    fn table_url_joins_rest_path() {
        let s = store("https://proj.supabase.co");
        assert_eq!(
            s.table_url("reminders"),
            "https://proj.supabase.co/rest/v1/reminders"
        );
    }

    #[test]
    fn trailing_slash_in_project_url_is_stripped() {
        let s = store("https://proj.supabase.co/");
        assert_eq!(
            s.table_url("devices"),
            "https://proj.supabase.co/rest/v1/devices"
        );
    }
}
