use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::{SecondsFormat, Utc};
use tokio::sync::Mutex;
use tracing::info;
use uuid::Uuid;

use crate::error::{KioskError, Result};
use crate::models::{NewOrderRecord, OrderStatus, RawOrderRow};
use crate::storage::OrderStore;

/// Order store kept in a local JSON file, for kiosks running without a backend.
///
/// A missing file is an empty store.
pub struct JsonFileStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl JsonFileStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            lock: Mutex::new(()),
        }
    }

    async fn load_rows(&self) -> Result<Vec<RawOrderRow>> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(content) if content.trim().is_empty() => Ok(Vec::new()),
            Ok(content) => Ok(serde_json::from_str(&content)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(e.into()),
        }
    }

    async fn save_rows(&self, rows: &[RawOrderRow]) -> Result<()> {
        let json = serde_json::to_string_pretty(rows)?;
        tokio::fs::write(&self.path, json).await?;
        Ok(())
    }
}

#[async_trait]
impl OrderStore for JsonFileStore {
    async fn list_orders(&self) -> Result<Vec<RawOrderRow>> {
        let _guard = self.lock.lock().await;
        let mut rows = self.load_rows().await?;
        // RFC 3339 UTC strings sort chronologically.
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(rows)
    }

    async fn insert_order(&self, record: &NewOrderRecord) -> Result<RawOrderRow> {
        let _guard = self.lock.lock().await;
        let mut rows = self.load_rows().await?;

        let row = RawOrderRow {
            id: Some(Uuid::new_v4().to_string()),
            created_at: Some(Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true)),
            customer_name: Some(record.customer_name.clone()),
            salad_type: Some(record.salad_type.clone()),
            goal: None,
            size: Some(record.size.clone()),
            toppings: Some(record.toppings.clone()),
            price: Some(record.price),
            status: Some(record.status.as_str().to_string()),
        };

        rows.push(row.clone());
        self.save_rows(&rows).await?;
        info!(id = ?row.id, path = %self.path.display(), "inserted order");
        Ok(row)
    }

    async fn update_order_status(&self, id: &str, status: OrderStatus) -> Result<()> {
        let _guard = self.lock.lock().await;
        let mut rows = self.load_rows().await?;

        let row = rows
            .iter_mut()
            .find(|r| r.id.as_deref() == Some(id))
            .ok_or_else(|| KioskError::OrderNotFound(id.to_string()))?;
        row.status = Some(status.as_str().to_string());

        self.save_rows(&rows).await?;
        info!(id, %status, "updated order status");
        Ok(())
    }
}
