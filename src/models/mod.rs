mod fruit;
mod loose;
mod order;
mod profile;
mod recommendation;

pub use fruit::{Fruit, SugarLevel, SweetnessLevel, Topping};
pub use order::{NewOrderRecord, Order, OrderStatus, RawOrderRow};
pub use profile::{Gender, Goal, Portion, PreferenceProfile, Sweetness};
pub use recommendation::Recommendation;
