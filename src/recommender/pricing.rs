use crate::models::Portion;
use crate::recommender::constants::{CURRENCY_PREFIX, MISSING_VALUE, PRICE_LARGE, PRICE_SMALL};

/// Price of a salad. Depends on the cup alone.
pub fn price_for_portion(portion: Portion) -> i64 {
    match portion {
        Portion::Large => PRICE_LARGE,
        Portion::Small => PRICE_SMALL,
    }
}

/// Price for a raw portion value: "500" is the large cup, everything else the small one.
pub fn price_for_label(label: &str) -> i64 {
    price_for_portion(Portion::from_label(label))
}

/// Format whole Rupiah with Indonesian grouping, e.g. `Rp 25.000`.
pub fn format_rupiah(amount: Option<i64>) -> String {
    let Some(amount) = amount else {
        return MISSING_VALUE.to_string();
    };

    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    let sign = if amount < 0 { "-" } else { "" };
    format!("{}{}{}", CURRENCY_PREFIX, sign, grouped)
}
