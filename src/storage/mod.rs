//! Order storage collaborator.
//!
//! The kiosk never owns order data; it hands records to an [`OrderStore`] and
//! reads rows back. Calls are independent round trips: no queueing, no
//! retries, no timeout beyond the HTTP client's own.

mod file;
pub mod projection;
mod remote;

use async_trait::async_trait;

use crate::error::Result;
use crate::models::{NewOrderRecord, OrderStatus, RawOrderRow};

pub use file::JsonFileStore;
pub use projection::{
    build_order_record, created_at_label, order_code, parse_fruit_list, project_confirmed_row,
    project_row,
};
pub use remote::SupabaseStore;

#[async_trait]
pub trait OrderStore: Send + Sync {
    /// All rows, newest first.
    async fn list_orders(&self) -> Result<Vec<RawOrderRow>>;

    /// Insert a record and return the stored row, including its generated id and timestamp.
    async fn insert_order(&self, record: &NewOrderRecord) -> Result<RawOrderRow>;

    async fn update_order_status(&self, id: &str, status: OrderStatus) -> Result<()>;
}

#[async_trait]
impl<S: OrderStore + ?Sized> OrderStore for Box<S> {
    async fn list_orders(&self) -> Result<Vec<RawOrderRow>> {
        (**self).list_orders().await
    }

    async fn insert_order(&self, record: &NewOrderRecord) -> Result<RawOrderRow> {
        (**self).insert_order(record).await
    }

    async fn update_order_status(&self, id: &str, status: OrderStatus) -> Result<()> {
        (**self).update_order_status(id, status).await
    }
}
