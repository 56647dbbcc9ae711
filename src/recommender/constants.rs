/// Diet candidates must be at or below this many calories.
pub const DIET_MAX_CALORIES: f64 = 60.0;

/// Gain candidates qualify at or above this many calories.
pub const GAIN_MIN_CALORIES: f64 = 80.0;

/// Topping always dropped from diet salads.
pub const DIET_EXCLUDED_TOPPING: &str = "fla-vanila";

/// Price of the 300 ml cup, in Rupiah.
pub const PRICE_SMALL: i64 = 15_000;

/// Price of the 500 ml cup, in Rupiah.
pub const PRICE_LARGE: i64 = 25_000;

/// Maximum fruits in a 300 ml cup.
pub const MAX_FRUITS_SMALL: usize = 3;

/// Maximum fruits in a 500 ml cup.
pub const MAX_FRUITS_LARGE: usize = 4;

/// Calorie multiplier for the 500 ml cup relative to the reference portion.
pub const LARGE_PORTION_FACTOR: f64 = 1.6;

// ─────────────────────────────────────────────────────────────────────────────
// BMI category boundaries (lower bound inclusive)
// ─────────────────────────────────────────────────────────────────────────────

pub const BMI_NORMAL_MIN: f64 = 18.5;
pub const BMI_OVERWEIGHT_MIN: f64 = 25.0;
pub const BMI_OBESE_MIN: f64 = 30.0;

// ─────────────────────────────────────────────────────────────────────────────
// Display text
// ─────────────────────────────────────────────────────────────────────────────

/// Shown wherever a value is missing.
pub const MISSING_VALUE: &str = "-";

pub const CURRENCY_PREFIX: &str = "Rp ";

/// Caption greeting name when the customer left the name blank.
pub const CAPTION_DEFAULT_NAME: &str = "Customer Jiggly Fruitz";

/// Stored customer name when the customer left the name blank.
pub const ORDER_DEFAULT_NAME: &str = "Customer";

pub const ORDER_CODE_PREFIX: &str = "JF-";

/// Code suffix for rows without an id.
pub const ORDER_CODE_FALLBACK: &str = "XXXX";

pub const ORDER_CODE_SUFFIX_LEN: usize = 4;
