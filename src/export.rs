use std::path::Path;

use crate::error::Result;
use crate::models::Order;

/// Write the admin order list to a CSV file.
pub fn write_orders_csv(orders: &[Order], path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record([
        "code",
        "id",
        "name",
        "goal",
        "portion",
        "price",
        "fruits",
        "created_at",
        "status",
    ])?;

    for order in orders {
        let price = order.price.to_string();
        let fruits = order.fruits.join(", ");
        wtr.write_record([
            order.code.as_str(),
            order.id.as_deref().unwrap_or_default(),
            order.name.as_str(),
            order.goal.label(),
            order.portion.as_str(),
            price.as_str(),
            fruits.as_str(),
            order.created_at.as_str(),
            order.status.as_str(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
