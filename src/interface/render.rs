use crate::models::{Order, Recommendation};
use crate::recommender::{format_rupiah, BmiCategory, MISSING_VALUE};

/// BMI with one decimal, or "-" when unknown.
pub fn format_bmi(bmi: Option<f64>) -> String {
    bmi.map(|v| format!("{:.1}", v))
        .unwrap_or_else(|| MISSING_VALUE.to_string())
}

pub fn display_bmi(bmi: Option<f64>, category: BmiCategory) {
    println!("BMI: {} ({})", format_bmi(bmi), category);
}

/// Display a recommendation and its caption.
pub fn display_recommendation(rec: &Recommendation, caption: &str) {
    println!();
    println!("=== Rekomendasi Salad ===");
    println!();

    let width = rec.fruits.iter().map(|f| f.name.len()).max().unwrap_or(10);
    for (i, fruit) in rec.fruits.iter().enumerate() {
        println!(
            "{:>3}. {:<width$} - {:>3.0} cal",
            i + 1,
            fruit.name,
            fruit.calories,
            width = width
        );
    }

    if rec.toppings.is_empty() {
        println!("Topping: (none)");
    } else {
        println!("Topping: {}", rec.topping_names().join(", "));
    }

    println!();
    println!("--- Summary ---");
    println!("Perkiraan kalori: {} kkal", rec.total_calories);
    println!("Harga: {}", format_rupiah(Some(rec.price)));
    println!();
    println!("{}", caption);
    println!();
}

/// Display the admin order list.
pub fn display_order_list(orders: &[Order]) {
    println!();
    println!("=== Dashboard Admin ===");
    println!("Total pesanan: {}", orders.len());
    println!();

    if orders.is_empty() {
        println!("Belum ada pesanan.");
        return;
    }

    for order in orders {
        let fruits = if order.fruits.is_empty() {
            MISSING_VALUE.to_string()
        } else {
            order.fruits.join(", ")
        };

        println!(
            "{} • {} | {} | {} | {} | {} | {}",
            order.code,
            order.name,
            order.goal,
            order.portion.short_label(),
            order.created_at,
            format_rupiah(Some(order.price)),
            order.status.label()
        );
        println!("    Buah: {}", fruits);
        if let Some(id) = &order.id {
            println!("    id: {}", id);
        }
    }

    println!();
}
