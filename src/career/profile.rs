//! Student profile as entered on the form and persisted to storage.

use serde::{Deserialize, Deserializer, Serialize};

/// Age assumed when the stored profile has none (or an unparsable one).
pub const DEFAULT_AGE: f64 = 15.0;

/// Free-text profile collected by the student form.
///
/// Every field is optional on the wire: a profile saved by an older form,
/// or edited by hand, still loads, with missing text treated as empty.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StudentProfile {
    pub name: String,
    /// Numeric age. Stored profiles may carry it as a number or as the raw
    /// string typed into the form.
    #[serde(deserialize_with = "lenient_age", skip_serializing_if = "Option::is_none")]
    pub age: Option<f64>,
    pub education: String,
    pub interest: String,
    pub goal: String,
    pub hobbies: String,
    pub location: String,
}

impl StudentProfile {
    /// Age used for stage selection, falling back to [`DEFAULT_AGE`].
    pub fn effective_age(&self) -> f64 {
        match self.age {
            Some(age) if age.is_finite() && age != 0.0 => age,
            _ => DEFAULT_AGE,
        }
    }
}

/// Parse an age from form text. Blank or non-numeric input yields `None`.
pub fn parse_age(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|a| a.is_finite())
}

fn lenient_age<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Number(n) => n.as_f64(),
        serde_json::Value::String(s) => parse_age(&s),
        _ => None,
    })
}
