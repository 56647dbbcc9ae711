pub mod caption;
pub mod catalog;
pub mod constants;
pub mod engine;
pub mod health;
pub mod pricing;

pub use caption::generate_caption;
pub use catalog::{find_fruit, FRUITS, TOPPINGS};
pub use constants::*;
pub use engine::{recommend, recommend_from};
pub use health::{categorize, compute_bmi, compute_bmi_from_input, BmiCategory};
pub use pricing::{format_rupiah, price_for_label, price_for_portion};
