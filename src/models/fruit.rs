use serde::Serialize;

/// Sugar content of a fruit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SugarLevel {
    Low,
    Medium,
    High,
}

/// Sweetness of a topping. `Low` is reserved; no catalog topping uses it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SweetnessLevel {
    Low,
    Medium,
    High,
}

/// A fruit from the static catalog.
///
/// Calories are per reference portion.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Fruit {
    pub id: &'static str,
    pub name: &'static str,
    pub calories: f64,
    pub sugar: SugarLevel,
    pub for_diet: bool,
    pub for_gain: bool,
}

impl Fruit {
    /// Whether the fruit passes the diet base filter.
    pub fn fits_diet(&self, max_calories: f64) -> bool {
        self.for_diet && self.calories <= max_calories && self.sugar != SugarLevel::High
    }

    /// Whether the fruit passes the gain base filter (any single criterion qualifies).
    pub fn fits_gain(&self, min_calories: f64) -> bool {
        self.for_gain || self.calories >= min_calories || self.sugar == SugarLevel::High
    }
}

/// A topping from the static catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Topping {
    pub id: &'static str,
    pub name: &'static str,
    pub sweetness: SweetnessLevel,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_fruit() -> Fruit {
        Fruit {
            id: "kiwi",
            name: "Kiwi",
            calories: 61.0,
            sugar: SugarLevel::Medium,
            for_diet: true,
            for_gain: false,
        }
    }

    #[test]
    fn test_fits_diet_calorie_limit() {
        let fruit = sample_fruit();
        assert!(!fruit.fits_diet(60.0));
        assert!(fruit.fits_diet(61.0));
    }

    #[test]
    fn test_fits_diet_rejects_high_sugar() {
        let mut fruit = sample_fruit();
        fruit.calories = 20.0;
        fruit.sugar = SugarLevel::High;
        assert!(!fruit.fits_diet(60.0));
    }

    #[test]
    fn test_fits_gain_any_criterion() {
        let fruit = sample_fruit();
        assert!(!fruit.fits_gain(80.0));

        let mut heavy = sample_fruit();
        heavy.calories = 80.0;
        assert!(heavy.fits_gain(80.0));

        let mut sweet = sample_fruit();
        sweet.sugar = SugarLevel::High;
        assert!(sweet.fits_gain(80.0));

        let mut flagged = sample_fruit();
        flagged.for_gain = true;
        assert!(flagged.fits_gain(80.0));
    }
}
