use serde::Serialize;

use crate::models::{Fruit, Topping};

/// Result of running the recommender on one profile.
///
/// Fruit order follows catalog order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub fruits: Vec<Fruit>,
    pub toppings: Vec<Topping>,
    /// Whole Rupiah.
    pub price: i64,
    pub total_calories: i64,
}

impl Recommendation {
    pub fn fruit_names(&self) -> Vec<&'static str> {
        self.fruits.iter().map(|f| f.name).collect()
    }

    pub fn topping_names(&self) -> Vec<&'static str> {
        self.toppings.iter().map(|t| t.name).collect()
    }
}
