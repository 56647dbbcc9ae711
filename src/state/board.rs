use chrono::FixedOffset;
use tracing::{error, info, warn};

use crate::error::{KioskError, Result};
use crate::models::{Order, OrderStatus, PreferenceProfile, Recommendation};
use crate::storage::{build_order_record, project_confirmed_row, project_row, OrderStore};

/// Admin view of submitted orders, newest first, backed by an order store.
pub struct OrderBoard<S> {
    store: S,
    offset: FixedOffset,
    orders: Vec<Order>,
}

impl<S: OrderStore> OrderBoard<S> {
    /// Create an empty board. Timestamps are labelled in `offset`.
    pub fn new(store: S, offset: FixedOffset) -> Self {
        Self {
            store,
            offset,
            orders: Vec::new(),
        }
    }

    /// Replace the local list with the store's rows.
    ///
    /// On failure the list is left empty and the error is returned.
    pub async fn refresh(&mut self) -> Result<&[Order]> {
        match self.store.list_orders().await {
            Ok(rows) => {
                self.orders = rows.iter().map(|r| project_row(r, &self.offset)).collect();
                info!(count = self.orders.len(), "order board refreshed");
                Ok(&self.orders)
            }
            Err(e) => {
                error!("order fetch failed: {}", e);
                self.orders.clear();
                Err(e)
            }
        }
    }

    /// Store a confirmed order and put it at the top of the board.
    ///
    /// The local list is untouched when the store rejects the insert.
    pub async fn confirm(
        &mut self,
        profile: &PreferenceProfile,
        rec: &Recommendation,
    ) -> Result<&Order> {
        let record = build_order_record(profile, rec);
        let row = self.store.insert_order(&record).await.inspect_err(|e| {
            error!("order insert failed: {}", e);
        })?;

        let order = project_confirmed_row(&row, profile, rec, &self.offset);
        info!(code = %order.code, "order confirmed");
        self.orders.insert(0, order);
        Ok(&self.orders[0])
    }

    /// Set an order's status locally, then in the store.
    ///
    /// If the store fails, the local status is rolled back to its previous value.
    pub async fn update_status(&mut self, id: &str, status: OrderStatus) -> Result<()> {
        let index = self
            .position(id)
            .ok_or_else(|| KioskError::OrderNotFound(id.to_string()))?;

        let previous = std::mem::replace(&mut self.orders[index].status, status);

        if let Err(e) = self.store.update_order_status(id, status).await {
            error!("order status update failed for {}: {}", id, e);
            warn!("rolling back order {} to {}", id, previous);
            self.orders[index].status = previous;
            return Err(e);
        }

        Ok(())
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn get(&self, id: &str) -> Option<&Order> {
        self.position(id).map(|i| &self.orders[i])
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.orders
            .iter()
            .position(|o| o.id.as_deref() == Some(id))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;
    use crate::models::{Goal, NewOrderRecord, Portion, RawOrderRow};
    use crate::recommender::recommend;

    /// In-memory store that can be told to fail.
    #[derive(Default)]
    struct FakeStore {
        rows: Mutex<Vec<RawOrderRow>>,
        fail: bool,
    }

    impl FakeStore {
        fn with_rows(rows: Vec<RawOrderRow>) -> Self {
            Self {
                rows: Mutex::new(rows),
                fail: false,
            }
        }

        fn failing() -> Self {
            Self {
                fail: true,
                ..Default::default()
            }
        }

        fn check(&self) -> Result<()> {
            if self.fail {
                Err(KioskError::Storage {
                    status: 503,
                    body: "unavailable".to_string(),
                })
            } else {
                Ok(())
            }
        }
    }

    #[async_trait]
    impl OrderStore for FakeStore {
        async fn list_orders(&self) -> Result<Vec<RawOrderRow>> {
            self.check()?;
            Ok(self.rows.lock().unwrap().clone())
        }

        async fn insert_order(&self, record: &NewOrderRecord) -> Result<RawOrderRow> {
            self.check()?;
            let mut rows = self.rows.lock().unwrap();
            let row = RawOrderRow {
                id: Some(format!("order-{:04}", rows.len() + 1)),
                created_at: Some("2025-03-01T03:15:00Z".to_string()),
                customer_name: Some(record.customer_name.clone()),
                salad_type: Some(record.salad_type.clone()),
                toppings: Some(record.toppings.clone()),
                status: Some(record.status.as_str().to_string()),
                ..Default::default()
            };
            rows.insert(0, row.clone());
            Ok(row)
        }

        async fn update_order_status(&self, _id: &str, _status: OrderStatus) -> Result<()> {
            self.check()
        }
    }

    fn wib() -> FixedOffset {
        FixedOffset::east_opt(7 * 3600).unwrap()
    }

    fn row(id: &str) -> RawOrderRow {
        RawOrderRow {
            id: Some(id.to_string()),
            salad_type: Some("Diet".to_string()),
            size: Some("300".to_string()),
            price: Some(15000),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_refresh_projects_rows() {
        let mut board = OrderBoard::new(FakeStore::with_rows(vec![row("a1b2c3")]), wib());
        let orders = board.refresh().await.unwrap();
        assert_eq!(orders.len(), 1);
        assert_eq!(orders[0].code, "JF-B2C3");
        assert_eq!(orders[0].goal, Goal::Diet);
    }

    #[tokio::test]
    async fn test_refresh_failure_leaves_board_empty() {
        let mut board = OrderBoard::new(FakeStore::failing(), wib());
        assert!(board.refresh().await.is_err());
        assert!(board.is_empty());
    }

    #[tokio::test]
    async fn test_confirm_prepends_with_submission_fallbacks() {
        let mut board = OrderBoard::new(FakeStore::with_rows(vec![row("old1")]), wib());
        board.refresh().await.unwrap();

        let profile = PreferenceProfile {
            goal: Goal::Gain,
            portion: Portion::Large,
            ..Default::default()
        };
        let rec = recommend(&profile);
        let order = board.confirm(&profile, &rec).await.unwrap();

        // The fake store drops size and price, so they come from the submission.
        assert_eq!(order.code, "JF-0002");
        assert_eq!(order.name, "Customer");
        assert_eq!(order.goal, Goal::Gain);
        assert_eq!(order.portion, Portion::Large);
        assert_eq!(order.price, 25000);
        assert_eq!(order.fruits, vec!["Mangga", "Buah Naga"]);
        assert_eq!(order.created_at, "10.15");
        assert_eq!(board.len(), 2);
        assert_eq!(board.orders()[1].id.as_deref(), Some("old1"));
    }

    #[tokio::test]
    async fn test_confirm_failure_keeps_list() {
        let mut board = OrderBoard::new(FakeStore::failing(), wib());
        let profile = PreferenceProfile::default();
        let rec = recommend(&profile);
        assert!(board.confirm(&profile, &rec).await.is_err());
        assert!(board.is_empty());
    }

    #[tokio::test]
    async fn test_update_status_success() {
        let mut board = OrderBoard::new(FakeStore::with_rows(vec![row("x9")]), wib());
        board.refresh().await.unwrap();

        board.update_status("x9", OrderStatus::Done).await.unwrap();
        assert_eq!(board.get("x9").unwrap().status, OrderStatus::Done);
    }

    #[tokio::test]
    async fn test_update_status_rolls_back_on_failure() {
        let mut board = OrderBoard::new(FakeStore::with_rows(vec![row("x9")]), wib());
        board.refresh().await.unwrap();
        board.store.fail = true;

        let err = board.update_status("x9", OrderStatus::Done).await.unwrap_err();
        assert!(matches!(err, KioskError::Storage { status: 503, .. }));
        assert_eq!(board.get("x9").unwrap().status, OrderStatus::New);
    }

    #[tokio::test]
    async fn test_update_status_unknown_id() {
        let mut board = OrderBoard::new(FakeStore::default(), wib());
        let err = board.update_status("ghost", OrderStatus::Done).await.unwrap_err();
        assert!(matches!(err, KioskError::OrderNotFound(_)));
    }
}
