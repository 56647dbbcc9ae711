use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::models::{PreferenceProfile, Recommendation};
use crate::recommender::{categorize, compute_bmi, generate_caption, recommend, BmiCategory};

/// Load a preference profile from a JSON file. Missing fields take form defaults.
pub fn load_profile<P: AsRef<Path>>(path: P) -> Result<PreferenceProfile> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// One customer's pass through the order form.
///
/// The session owns the form and the latest result; the recommender itself
/// keeps no state. Each submission replaces the previous result wholesale.
#[derive(Debug, Clone, Default)]
pub struct Session {
    pub profile: PreferenceProfile,
    result: Option<Recommendation>,
    caption: Option<String>,
}

impl Session {
    pub fn new(profile: PreferenceProfile) -> Self {
        Self {
            profile,
            result: None,
            caption: None,
        }
    }

    /// Recompute the recommendation and caption from the current form.
    pub fn submit(&mut self) -> &Recommendation {
        let rec = recommend(&self.profile);
        self.caption = Some(generate_caption(&self.profile, &rec));
        self.result.insert(rec)
    }

    /// Back to a fresh form with no result.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn result(&self) -> Option<&Recommendation> {
        self.result.as_ref()
    }

    pub fn caption(&self) -> Option<&str> {
        self.caption.as_deref()
    }

    pub fn bmi(&self) -> Option<f64> {
        compute_bmi(self.profile.height_cm, self.profile.weight_kg)
    }

    pub fn bmi_category(&self) -> BmiCategory {
        categorize(self.bmi())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;
    use crate::models::{Goal, Portion};

    #[test]
    fn test_submit_replaces_result() {
        let mut session = Session::default();
        assert!(session.result().is_none());

        session.submit();
        assert_eq!(session.result().unwrap().price, 15000);

        session.profile.portion = Portion::Large;
        session.submit();
        assert_eq!(session.result().unwrap().price, 25000);
        assert!(session.caption().unwrap().contains("500 ml (cup besar)"));
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut session = Session::default();
        session.profile.name = "Sari".to_string();
        session.profile.goal = Goal::Gain;
        session.submit();

        session.reset();
        assert_eq!(session.profile, PreferenceProfile::default());
        assert!(session.result().is_none());
        assert!(session.caption().is_none());
    }

    #[test]
    fn test_bmi_from_profile() {
        let mut session = Session::default();
        assert_eq!(session.bmi(), None);
        assert_eq!(session.bmi_category(), BmiCategory::Unknown);

        session.profile.height_cm = Some(170.0);
        session.profile.weight_kg = Some(75.0);
        assert!((session.bmi().unwrap() - 25.952).abs() < 0.001);
        assert_eq!(session.bmi_category(), BmiCategory::Overweight);
    }

    #[test]
    fn test_load_profile() {
        let json = r#"{"name": "Rina", "goal": "gain", "sweetness": "high", "portion": "500"}"#;
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let profile = load_profile(file.path()).unwrap();
        assert_eq!(profile.name, "Rina");
        assert_eq!(profile.goal, Goal::Gain);
        assert_eq!(profile.portion, Portion::Large);
    }
}
