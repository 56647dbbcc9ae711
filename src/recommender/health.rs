use std::fmt;

use crate::recommender::constants::{BMI_NORMAL_MIN, BMI_OBESE_MIN, BMI_OVERWEIGHT_MIN, MISSING_VALUE};

/// BMI band shown next to the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BmiCategory {
    /// Height or weight missing.
    Unknown,
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiCategory {
    pub fn label(&self) -> &'static str {
        match self {
            BmiCategory::Unknown => MISSING_VALUE,
            BmiCategory::Underweight => "Underweight",
            BmiCategory::Normal => "Normal",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obese",
        }
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Body mass index from height in centimetres and weight in kilograms.
///
/// Returns `None` when either value is missing, zero, or NaN. No rounding.
pub fn compute_bmi(height_cm: Option<f64>, weight_kg: Option<f64>) -> Option<f64> {
    let h = height_cm.filter(|v| *v != 0.0 && !v.is_nan())?;
    let w = weight_kg.filter(|v| *v != 0.0 && !v.is_nan())?;
    let h_meter = h / 100.0;
    Some(w / (h_meter * h_meter))
}

/// Same as [`compute_bmi`] but from raw form text.
pub fn compute_bmi_from_input(height: &str, weight: &str) -> Option<f64> {
    compute_bmi(parse_leading_number(height), parse_leading_number(weight))
}

/// Map a BMI to its band. Lower bounds are inclusive: 18.5 is Normal.
pub fn categorize(bmi: Option<f64>) -> BmiCategory {
    match bmi {
        None => BmiCategory::Unknown,
        Some(v) if v < BMI_NORMAL_MIN => BmiCategory::Underweight,
        Some(v) if v < BMI_OVERWEIGHT_MIN => BmiCategory::Normal,
        Some(v) if v < BMI_OBESE_MIN => BmiCategory::Overweight,
        Some(_) => BmiCategory::Obese,
    }
}

/// Parse the longest numeric prefix of `input`, the way a form field reads "170cm" as 170.
pub(crate) fn parse_leading_number(input: &str) -> Option<f64> {
    let s = input.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }
    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        if digits > 0 {
            end = frac_end;
        }
    }

    if digits == 0 {
        return None;
    }

    // Exponent only counts when followed by at least one digit.
    if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+') | Some(b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse().ok()
}
