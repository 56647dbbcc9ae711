//! Lenient readers for stored and user-supplied JSON. A value of the wrong
//! shape resolves to `None` instead of failing the surrounding document.

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
pub(crate) enum LooseValue {
    Text(String),
    Int(i64),
    Float(f64),
    Other(IgnoredAny),
}

impl LooseValue {
    /// Text as-is, numbers rendered in their shortest decimal form.
    pub(crate) fn into_text(self) -> Option<String> {
        match self {
            LooseValue::Text(s) => Some(s),
            LooseValue::Int(n) => Some(n.to_string()),
            LooseValue::Float(n) => Some(n.to_string()),
            LooseValue::Other(_) => None,
        }
    }

    /// Whole number, rounding floats and parsing numeric text.
    pub(crate) fn into_integer(self) -> Option<i64> {
        match self {
            LooseValue::Int(n) => Some(n),
            LooseValue::Float(n) => float_to_integer(n),
            LooseValue::Text(s) => {
                let s = s.trim();
                s.parse::<i64>()
                    .ok()
                    .or_else(|| s.parse::<f64>().ok().and_then(float_to_integer))
            }
            LooseValue::Other(_) => None,
        }
    }
}

fn float_to_integer(n: f64) -> Option<i64> {
    n.is_finite().then(|| n.round() as i64)
}

/// Text or number as text; anything else is `None`.
pub(crate) fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<LooseValue>::deserialize(deserializer)?.and_then(LooseValue::into_text))
}

/// Integer, float, or numeric text as a whole number; anything else is `None`.
pub(crate) fn loose_integer<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<LooseValue>::deserialize(deserializer)?.and_then(LooseValue::into_integer))
}
