use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::loose::{loose_integer, string_or_number};
use crate::models::{Goal, Portion};

/// Kitchen status of an order. Moves from `New` to `Done` in practice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    #[default]
    New,
    Done,
}

impl OrderStatus {
    /// Lenient parse for stored rows: only "done" means done.
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some(s) if s.trim().eq_ignore_ascii_case("done") => OrderStatus::Done,
            _ => OrderStatus::New,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::New => "new",
            OrderStatus::Done => "done",
        }
    }

    /// Label shown to the kitchen.
    pub fn label(&self) -> &'static str {
        match self {
            OrderStatus::New => "Belum dibuat",
            OrderStatus::Done => "Selesai",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Record handed to the store when a customer confirms payment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewOrderRecord {
    pub customer_name: String,
    pub salad_type: String,
    pub size: String,
    /// Fruit names joined by ", ". The column name predates the fruit list.
    pub toppings: String,
    pub price: i64,
    pub status: OrderStatus,
}

/// A row as returned by the order store. Every field may be missing.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RawOrderRow {
    #[serde(default, deserialize_with = "string_or_number")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub created_at: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub customer_name: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub salad_type: Option<String>,
    /// Explicit goal, when the store has one. Resolved leniently on projection.
    #[serde(default, deserialize_with = "string_or_number")]
    pub goal: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub size: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub toppings: Option<String>,
    #[serde(default, deserialize_with = "loose_integer")]
    pub price: Option<i64>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub status: Option<String>,
}

/// An order as shown on the admin board.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Order {
    pub id: Option<String>,
    pub code: String,
    pub name: String,
    pub goal: Goal,
    pub portion: Portion,
    pub price: i64,
    pub fruits: Vec<String>,
    /// Localised "HH.MM", empty when the row had no usable timestamp.
    pub created_at: String,
    pub status: OrderStatus,
}
