use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use crate::models::loose::LooseValue;

/// What the customer wants the salad to help with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Goal {
    #[default]
    Diet,
    Gain,
}

impl Goal {
    /// Label stored in the `salad_type` column and shown on the admin board.
    pub fn label(&self) -> &'static str {
        match self {
            Goal::Diet => "Diet",
            Goal::Gain => "Weight Gain",
        }
    }

    /// Parse a stored goal, case-insensitively, as either its wire value or its label.
    pub fn parse_label(text: &str) -> Option<Self> {
        let text = text.trim();
        [Goal::Diet, Goal::Gain].into_iter().find(|g| {
            text.eq_ignore_ascii_case(g.as_str()) || text.eq_ignore_ascii_case(g.label())
        })
    }

    /// Wire value ("diet" / "gain").
    pub fn as_str(&self) -> &'static str {
        match self {
            Goal::Diet => "diet",
            Goal::Gain => "gain",
        }
    }

    /// Infer a goal from free-text salad type; anything not mentioning "diet" is gain.
    pub fn from_salad_type(text: &str) -> Self {
        if text.to_lowercase().contains("diet") {
            Goal::Diet
        } else {
            Goal::Gain
        }
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sweetness {
    Low,
    #[default]
    Medium,
    High,
}

/// Cup size. The only price driver.
///
/// Deserializes through [`Portion::from_label`], so any value other than "500"
/// (text or number) is the small cup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum Portion {
    #[default]
    #[serde(rename = "300")]
    Small,
    #[serde(rename = "500")]
    Large,
}

impl Portion {
    /// Exactly "500" is the large cup; every other value falls back to the small one.
    pub fn from_label(label: &str) -> Self {
        if label == "500" {
            Portion::Large
        } else {
            Portion::Small
        }
    }

    /// Wire value ("300" / "500").
    pub fn as_str(&self) -> &'static str {
        match self {
            Portion::Small => "300",
            Portion::Large => "500",
        }
    }

    pub fn short_label(&self) -> &'static str {
        match self {
            Portion::Small => "300 ml",
            Portion::Large => "500 ml",
        }
    }

    pub fn long_label(&self) -> &'static str {
        match self {
            Portion::Small => "300 ml (cup kecil)",
            Portion::Large => "500 ml (cup besar)",
        }
    }
}

impl<'de> Deserialize<'de> for Portion {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let label = LooseValue::deserialize(deserializer)?
            .into_text()
            .unwrap_or_default();
        Ok(Portion::from_label(&label))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Gender {
    #[default]
    #[serde(rename = "L")]
    Male,
    #[serde(rename = "P")]
    Female,
}

/// Customer input collected by the order form.
///
/// Age and gender are collected but never read by the recommender;
/// height and weight feed only the BMI display.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PreferenceProfile {
    pub name: String,
    pub age: Option<u32>,
    pub gender: Gender,
    pub height_cm: Option<f64>,
    pub weight_kg: Option<f64>,
    pub goal: Goal,
    pub liked_fruits: BTreeSet<String>,
    pub disliked_fruits: BTreeSet<String>,
    pub sweetness: Sweetness,
    pub portion: Portion,
}

impl PreferenceProfile {
    /// Name with surrounding whitespace removed, `None` when blank.
    pub fn display_name(&self) -> Option<&str> {
        let name = self.name.trim();
        if name.is_empty() { None } else { Some(name) }
    }

    pub fn likes(&self, fruit_id: &str) -> bool {
        self.liked_fruits.contains(fruit_id)
    }

    pub fn dislikes(&self, fruit_id: &str) -> bool {
        self.disliked_fruits.contains(fruit_id)
    }
}
