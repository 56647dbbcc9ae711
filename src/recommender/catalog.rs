use crate::models::{Fruit, SugarLevel, SweetnessLevel, Topping};

/// Fruit catalog. Declaration order is selection priority: the recommender
/// takes candidates front to back.
pub static FRUITS: [Fruit; 5] = [
    Fruit {
        id: "strawberry",
        name: "Strawberry",
        calories: 32.0,
        sugar: SugarLevel::Low,
        for_diet: true,
        for_gain: false,
    },
    Fruit {
        id: "mangga",
        name: "Mangga",
        calories: 99.0,
        sugar: SugarLevel::High,
        for_diet: false,
        for_gain: true,
    },
    Fruit {
        id: "melon",
        name: "Melon",
        calories: 34.0,
        sugar: SugarLevel::Low,
        for_diet: true,
        for_gain: false,
    },
    Fruit {
        id: "naga",
        name: "Buah Naga",
        calories: 50.0,
        sugar: SugarLevel::Medium,
        for_diet: true,
        for_gain: true,
    },
    Fruit {
        id: "semangka",
        name: "Semangka",
        calories: 30.0,
        sugar: SugarLevel::Low,
        for_diet: true,
        for_gain: false,
    },
];

/// Topping catalog.
pub static TOPPINGS: [Topping; 4] = [
    Topping {
        id: "jelly-mangga",
        name: "Jelly Mangga",
        sweetness: SweetnessLevel::High,
    },
    Topping {
        id: "jelly-strawberry",
        name: "Jelly Strawberry",
        sweetness: SweetnessLevel::Medium,
    },
    Topping {
        id: "jelly-leci",
        name: "Jelly Leci",
        sweetness: SweetnessLevel::Medium,
    },
    Topping {
        id: "fla-vanila",
        name: "Fla Vanila",
        sweetness: SweetnessLevel::High,
    },
];

/// Look up a fruit by id.
pub fn find_fruit(id: &str) -> Option<&'static Fruit> {
    FRUITS.iter().find(|f| f.id == id)
}
