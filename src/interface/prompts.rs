use std::collections::BTreeSet;

use dialoguer::{Confirm, Input, Select};
use strsim::jaro_winkler;

use crate::error::Result;
use crate::models::{Fruit, Gender, Goal, Portion, PreferenceProfile, Sweetness};
use crate::recommender::health::parse_leading_number;

/// Minimum similarity for a typed name to count as a fruit match.
const FUZZY_MATCH_THRESHOLD: f64 = 0.7;

/// Prompt for an optional free-text field.
fn prompt_text(prompt: &str) -> Result<String> {
    let input: String = Input::new()
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()?;
    Ok(input.trim().to_string())
}

/// Prompt for an optional number. Blank or unreadable input means "not given".
fn prompt_optional_number(prompt: &str) -> Result<Option<f64>> {
    let input = prompt_text(prompt)?;
    Ok(parse_leading_number(&input).filter(|v| *v > 0.0))
}

pub fn prompt_goal() -> Result<Goal> {
    let selection = Select::new()
        .with_prompt("Tujuan kamu")
        .items(&["Diet", "Weight Gain"])
        .default(0)
        .interact()?;
    Ok(if selection == 1 { Goal::Gain } else { Goal::Diet })
}

pub fn prompt_sweetness() -> Result<Sweetness> {
    let selection = Select::new()
        .with_prompt("Tingkat kemanisan")
        .items(&["Low", "Medium", "High"])
        .default(1)
        .interact()?;
    Ok(match selection {
        0 => Sweetness::Low,
        2 => Sweetness::High,
        _ => Sweetness::Medium,
    })
}

pub fn prompt_portion() -> Result<Portion> {
    let selection = Select::new()
        .with_prompt("Ukuran porsi")
        .items(&[Portion::Small.long_label(), Portion::Large.long_label()])
        .default(0)
        .interact()?;
    Ok(if selection == 1 { Portion::Large } else { Portion::Small })
}

fn prompt_gender() -> Result<Gender> {
    let selection = Select::new()
        .with_prompt("Jenis kelamin")
        .items(&["L", "P"])
        .default(0)
        .interact()?;
    Ok(if selection == 1 { Gender::Female } else { Gender::Male })
}

/// Best catalog matches for a typed name, most similar first.
pub fn match_fruit<'a>(input: &str, catalog: &'a [Fruit]) -> Vec<&'a Fruit> {
    let needle = input.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }

    if let Some(exact) = catalog
        .iter()
        .find(|f| f.id == needle || f.name.to_lowercase() == needle)
    {
        return vec![exact];
    }

    let mut candidates: Vec<(&Fruit, f64)> = catalog
        .iter()
        .map(|f| {
            let by_name = jaro_winkler(&f.name.to_lowercase(), &needle);
            let by_id = jaro_winkler(f.id, &needle);
            (f, by_name.max(by_id))
        })
        .filter(|(_, score)| *score > FUZZY_MATCH_THRESHOLD)
        .collect();

    candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    candidates.into_iter().map(|(f, _)| f).collect()
}

/// Collect a set of fruit ids, one typed name at a time.
pub fn prompt_fruit_set(prompt: &str, catalog: &[Fruit]) -> Result<BTreeSet<String>> {
    let mut picked = BTreeSet::new();

    loop {
        let input = prompt_text(prompt)?;
        if input.is_empty() {
            break;
        }

        let candidates = match_fruit(&input, catalog);

        match candidates.as_slice() {
            [] => println!("Buah '{}' tidak ada di menu", input),
            [fruit] => {
                let exact = fruit.name.eq_ignore_ascii_case(&input) || fruit.id == input;
                if exact || prompt_yes_no(&format!("Maksudnya '{}'?", fruit.name), true)? {
                    picked.insert(fruit.id.to_string());
                    println!("Ditambahkan: {}", fruit.name);
                }
            }
            many => {
                let mut options: Vec<&str> = many.iter().map(|f| f.name).collect();
                options.push("Bukan semuanya");

                let selection = Select::new()
                    .with_prompt("Yang mana?")
                    .items(&options)
                    .default(0)
                    .interact()?;

                if let Some(fruit) = many.get(selection) {
                    picked.insert(fruit.id.to_string());
                    println!("Ditambahkan: {}", fruit.name);
                }
            }
        }
    }

    Ok(picked)
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Walk the customer through the whole order form.
pub fn collect_profile(catalog: &[Fruit]) -> Result<PreferenceProfile> {
    let name = prompt_text("Nama (boleh dikosongkan)")?;
    let age = prompt_optional_number("Umur")?.map(|v| v as u32).filter(|v| *v > 0);
    let gender = prompt_gender()?;
    let height_cm = prompt_optional_number("Tinggi badan (cm)")?;
    let weight_kg = prompt_optional_number("Berat badan (kg)")?;
    let goal = prompt_goal()?;
    let liked_fruits =
        prompt_fruit_set("Buah favorit (Enter kosong untuk selesai)", catalog)?;
    let disliked_fruits =
        prompt_fruit_set("Buah yang tidak disukai (Enter kosong untuk selesai)", catalog)?;
    let sweetness = prompt_sweetness()?;
    let portion = prompt_portion()?;

    Ok(PreferenceProfile {
        name,
        age,
        gender,
        height_cm,
        weight_kg,
        goal,
        liked_fruits,
        disliked_fruits,
        sweetness,
        portion,
    })
}
