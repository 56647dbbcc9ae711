use tracing::debug;

use crate::models::{
    Fruit, Goal, Portion, PreferenceProfile, Recommendation, SugarLevel, Sweetness,
    SweetnessLevel, Topping,
};
use crate::recommender::catalog::{FRUITS, TOPPINGS};
use crate::recommender::constants::*;
use crate::recommender::pricing::price_for_portion;

/// Recommend a salad from the built-in catalog.
///
/// Total: every profile yields a recommendation. The fruit list is empty only
/// when the customer dislikes every fruit in the catalog.
pub fn recommend(profile: &PreferenceProfile) -> Recommendation {
    recommend_from(&FRUITS, &TOPPINGS, profile)
}

/// Recommend a salad from explicit catalogs. Slice order is selection priority.
pub fn recommend_from(
    fruits: &[Fruit],
    toppings: &[Topping],
    profile: &PreferenceProfile,
) -> Recommendation {
    let candidates = fruit_candidates(fruits, profile);

    let cap = max_fruits(profile.portion).min(candidates.len());
    let selected: Vec<Fruit> = candidates.into_iter().take(cap).collect();

    let total_calories = estimate_calories(&selected, profile.portion);
    let toppings = select_toppings(toppings, profile.goal);
    let price = price_for_portion(profile.portion);

    debug!(
        fruits = ?selected.iter().map(|f| f.id).collect::<Vec<_>>(),
        toppings = toppings.len(),
        total_calories,
        price,
        "recommendation ready"
    );

    Recommendation {
        fruits: selected,
        toppings,
        price,
        total_calories,
    }
}

/// Run the filter pipeline, in catalog order.
fn fruit_candidates(fruits: &[Fruit], profile: &PreferenceProfile) -> Vec<Fruit> {
    let mut candidates: Vec<Fruit> = fruits
        .iter()
        .filter(|f| match profile.goal {
            Goal::Diet => f.fits_diet(DIET_MAX_CALORIES),
            Goal::Gain => f.fits_gain(GAIN_MIN_CALORIES),
        })
        .copied()
        .collect();
    debug!(goal = ?profile.goal, count = candidates.len(), "goal filter");

    match profile.sweetness {
        Sweetness::Low => candidates.retain(|f| f.sugar == SugarLevel::Low),
        Sweetness::High => candidates.retain(|f| f.sugar != SugarLevel::Low),
        Sweetness::Medium => {}
    }
    debug!(sweetness = ?profile.sweetness, count = candidates.len(), "sweetness filter");

    if !profile.liked_fruits.is_empty() {
        candidates.retain(|f| profile.likes(f.id));
    }

    if !profile.disliked_fruits.is_empty() {
        candidates.retain(|f| !profile.dislikes(f.id));
    }

    if candidates.is_empty() {
        // Degrade to availability: drop goal, sweetness and likes, keep dislikes.
        debug!("no candidates left, falling back to catalog minus dislikes");
        candidates = fruits
            .iter()
            .filter(|f| !profile.dislikes(f.id))
            .copied()
            .collect();
    }

    candidates
}

fn select_toppings(toppings: &[Topping], goal: Goal) -> Vec<Topping> {
    match goal {
        Goal::Diet => toppings
            .iter()
            .filter(|t| t.id != DIET_EXCLUDED_TOPPING && t.sweetness != SweetnessLevel::High)
            .copied()
            .collect(),
        Goal::Gain => toppings.to_vec(),
    }
}

fn max_fruits(portion: Portion) -> usize {
    match portion {
        Portion::Large => MAX_FRUITS_LARGE,
        Portion::Small => MAX_FRUITS_SMALL,
    }
}

fn portion_factor(portion: Portion) -> f64 {
    match portion {
        Portion::Large => LARGE_PORTION_FACTOR,
        Portion::Small => 1.0,
    }
}

/// Sum of fruit calories scaled to the cup, rounded half away from zero.
fn estimate_calories(fruits: &[Fruit], portion: Portion) -> i64 {
    let base: f64 = fruits.iter().map(|f| f.calories).sum();
    (base * portion_factor(portion)).round() as i64
}
