use chrono::{DateTime, FixedOffset, NaiveDateTime};

use crate::models::{
    Goal, NewOrderRecord, Order, OrderStatus, Portion, PreferenceProfile, RawOrderRow,
    Recommendation,
};
use crate::recommender::constants::{
    ORDER_CODE_FALLBACK, ORDER_CODE_PREFIX, ORDER_CODE_SUFFIX_LEN, ORDER_DEFAULT_NAME,
};

/// Build the record stored when a customer confirms payment.
pub fn build_order_record(profile: &PreferenceProfile, rec: &Recommendation) -> NewOrderRecord {
    NewOrderRecord {
        customer_name: profile.display_name().unwrap_or(ORDER_DEFAULT_NAME).to_string(),
        salad_type: profile.goal.label().to_string(),
        size: profile.portion.as_str().to_string(),
        toppings: rec.fruit_names().join(", "),
        price: rec.price,
        status: OrderStatus::New,
    }
}

/// Human-readable order code: prefix plus the last four id characters, uppercased.
pub fn order_code(id: Option<&str>) -> String {
    match id.filter(|s| !s.is_empty()) {
        Some(id) => {
            let count = id.chars().count();
            let suffix: String = id
                .chars()
                .skip(count.saturating_sub(ORDER_CODE_SUFFIX_LEN))
                .collect();
            format!("{}{}", ORDER_CODE_PREFIX, suffix.to_uppercase())
        }
        None => format!("{}{}", ORDER_CODE_PREFIX, ORDER_CODE_FALLBACK),
    }
}

/// Split a stored ", "-joined fruit list back into names.
pub fn parse_fruit_list(joined: Option<&str>) -> Vec<String> {
    joined
        .unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Render a stored timestamp as "HH.MM" in the given offset.
///
/// Timestamps without an offset are read as UTC. Unparseable input gives "".
pub fn created_at_label(created_at: Option<&str>, offset: &FixedOffset) -> String {
    let Some(raw) = created_at.map(str::trim).filter(|s| !s.is_empty()) else {
        return String::new();
    };

    let parsed = DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(offset))
        .or_else(|_| {
            NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
                .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f"))
                .map(|naive| naive.and_utc().with_timezone(offset))
        });

    match parsed {
        Ok(dt) => dt.format("%H.%M").to_string(),
        Err(_) => String::new(),
    }
}

/// Reconstruct an admin-board order from a stored row.
pub fn project_row(row: &RawOrderRow, offset: &FixedOffset) -> Order {
    let goal = row.goal.as_deref().and_then(Goal::parse_label).unwrap_or_else(|| {
        row.salad_type
            .as_deref()
            .map(Goal::from_salad_type)
            .unwrap_or(Goal::Gain)
    });

    Order {
        id: row.id.clone(),
        code: order_code(row.id.as_deref()),
        name: stored_name(row),
        goal,
        portion: non_empty(row.size.as_deref())
            .map(Portion::from_label)
            .unwrap_or_default(),
        price: row.price.unwrap_or(0),
        fruits: parse_fruit_list(row.toppings.as_deref()),
        created_at: created_at_label(row.created_at.as_deref(), offset),
        status: OrderStatus::from_stored(row.status.as_deref()),
    }
}

/// Reconstruct the order just inserted for `profile`.
///
/// Goal comes from the profile; portion and price fall back to the submission
/// when the store's row omits them.
pub fn project_confirmed_row(
    row: &RawOrderRow,
    profile: &PreferenceProfile,
    rec: &Recommendation,
    offset: &FixedOffset,
) -> Order {
    let mut order = project_row(row, offset);
    order.goal = profile.goal;
    if non_empty(row.size.as_deref()).is_none() {
        order.portion = profile.portion;
    }
    if row.price.is_none() {
        order.price = rec.price;
    }
    order
}

fn stored_name(row: &RawOrderRow) -> String {
    non_empty(row.customer_name.as_deref())
        .unwrap_or(ORDER_DEFAULT_NAME)
        .to_string()
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}
