use crate::models::{Goal, PreferenceProfile, Recommendation};
use crate::recommender::constants::CAPTION_DEFAULT_NAME;
use crate::recommender::pricing::format_rupiah;

const DIET_PHRASE: &str = "lebih ringan dan membantu tujuan diet kamu";
const GAIN_PHRASE: &str =
    "lebih padat kalori untuk bantu menaikkan berat badan dengan cara yang tetap segar";

/// Placeholder bullet when no fruit was selected.
pub const NO_FRUIT_LINE: &str = "- (belum ada buah terpilih)";

/// Placeholder bullet when no topping applies.
pub const NO_TOPPING_LINE: &str = "- Tanpa topping khusus";

/// Build the promotional caption shown under a recommendation.
///
/// Deterministic: the same profile and recommendation always give the same text.
pub fn generate_caption(profile: &PreferenceProfile, rec: &Recommendation) -> String {
    let name = profile.display_name().unwrap_or(CAPTION_DEFAULT_NAME);
    let goal_text = match profile.goal {
        Goal::Diet => DIET_PHRASE,
        Goal::Gain => GAIN_PHRASE,
    };

    let fruit_list = bullet_list(&rec.fruit_names(), NO_FRUIT_LINE);
    let topping_list = bullet_list(&rec.topping_names(), NO_TOPPING_LINE);

    format!(
        "Halo {name}! 🧃

Berdasarkan jawaban kamu, kami sarankan salad dengan karakter:
• {goal_text}
• Porsi {portion}
• Perkiraan kalori sekitar {calories} kkal
• Harga {price}

Kombinasi buah pilihan:
{fruit_list}

Topping yang cocok:
{topping_list}

Salad ini cocok dinikmati saat belajar, nugas, atau santai bareng teman.
Kalau sudah oke, tinggal konfirmasi ke tim Jiggly Fruitz di booth ya! ✨",
        portion = profile.portion.long_label(),
        calories = rec.total_calories,
        price = format_rupiah(Some(rec.price)),
    )
}

fn bullet_list(names: &[&str], placeholder: &str) -> String {
    if names.is_empty() {
        return placeholder.to_string();
    }
    names
        .iter()
        .map(|n| format!("- {}", n))
        .collect::<Vec<_>>()
        .join("\n")
}
