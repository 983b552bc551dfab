use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Accepts any integral JSON number (`5`, `-1`, `5.0`). Fractional values are
/// rejected.
fn integral_years<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<f64>::deserialize(deserializer)? {
        None => Ok(None),
        Some(value) if value.is_finite() && value.fract() == 0.0 => Ok(Some(value as i64)),
        Some(value) => Err(D::Error::custom(format!(
            "expected a whole number of years, got {value}"
        ))),
    }
}

/// Candidate profile as supplied by an input document.
///
/// Only `text` is mandatory. Optional lists left out of the document stay `None`
/// so the scorers can fall back to their neutral defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileDocument {
    pub text: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub skills: Option<Vec<String>>,
    #[serde(default)]
    pub experience: Option<Vec<String>>,
    /// Total years of professional experience. Values `<= 0` count as unknown.
    #[serde(default, deserialize_with = "integral_years")]
    pub years: Option<i64>,
}

/// Job description as supplied by an input document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobDocument {
    pub text: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub requirements: Option<Vec<String>>,
    #[serde(default, deserialize_with = "integral_years")]
    pub years_required: Option<i64>,
}
