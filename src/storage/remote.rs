use async_trait::async_trait;
use reqwest::{Client, Response};
use serde_json::json;
use tracing::info;

use crate::error::{KioskError, Result};
use crate::models::{NewOrderRecord, OrderStatus, RawOrderRow};
use crate::storage::OrderStore;

const ORDERS_TABLE: &str = "orders";

/// Supabase (PostgREST) backed order store.
#[derive(Clone)]
pub struct SupabaseStore {
    client: Client,
    base_url: String,
    anon_key: String,
}

impl SupabaseStore {
    pub fn new(base_url: impl Into<String>, anon_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            anon_key: anon_key.into(),
        }
    }

    fn table_url(&self) -> String {
        format!("{}/rest/v1/{}", self.base_url, ORDERS_TABLE)
    }

    fn authorized(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        builder
            .header("apikey", &self.anon_key)
            .bearer_auth(&self.anon_key)
    }
}

/// Turn a non-2xx response into a storage error carrying the body.
async fn check_status(response: Response) -> Result<Response> {
    if response.status().is_success() {
        return Ok(response);
    }
    let status = response.status().as_u16();
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "Failed to read error body".to_string());
    Err(KioskError::Storage { status, body })
}

#[async_trait]
impl OrderStore for SupabaseStore {
    async fn list_orders(&self) -> Result<Vec<RawOrderRow>> {
        let response = self
            .authorized(self.client.get(self.table_url()))
            .query(&[("select", "*"), ("order", "created_at.desc")])
            .send()
            .await?;

        let rows: Vec<RawOrderRow> = check_status(response).await?.json().await?;
        info!(count = rows.len(), "fetched orders");
        Ok(rows)
    }

    async fn insert_order(&self, record: &NewOrderRecord) -> Result<RawOrderRow> {
        let response = self
            .authorized(self.client.post(self.table_url()))
            .header("Prefer", "return=representation")
            .json(&[record])
            .send()
            .await?;

        let rows: Vec<RawOrderRow> = check_status(response).await?.json().await?;
        let row = rows.into_iter().next().ok_or_else(|| KioskError::Storage {
            status: 200,
            body: "insert returned no rows".to_string(),
        })?;
        info!(id = ?row.id, "inserted order");
        Ok(row)
    }

    async fn update_order_status(&self, id: &str, status: OrderStatus) -> Result<()> {
        let filter = format!("eq.{}", id);
        let response = self
            .authorized(self.client.patch(self.table_url()))
            .query(&[("id", filter.as_str())])
            .json(&json!({ "status": status }))
            .send()
            .await?;

        check_status(response).await?;
        info!(id, %status, "updated order status");
        Ok(())
    }
}
