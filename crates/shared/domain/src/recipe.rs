use crate::RecordId;
use pantry_derive::api_model;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How demanding a recipe is.
///
/// The set is open: `easy`, `medium` and `hard` are recognized, anything else is kept
/// verbatim in [`Difficulty::Other`] and serialized back unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    Other(String),
}

impl Difficulty {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
            Self::Other(raw) => raw,
        }
    }
}

impl From<&str> for Difficulty {
    fn from(raw: &str) -> Self {
        match raw {
            "easy" => Self::Easy,
            "medium" => Self::Medium,
            "hard" => Self::Hard,
            other => Self::Other(other.to_owned()),
        }
    }
}

impl From<String> for Difficulty {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "easy" | "medium" | "hard" => Self::from(raw.as_str()),
            _ => Self::Other(raw),
        }
    }
}

impl From<Difficulty> for String {
    fn from(difficulty: Difficulty) -> Self {
        match difficulty {
            Difficulty::Other(raw) => raw,
            known => known.as_str().to_owned(),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A recipe record.
#[api_model]
#[derive(Clone, PartialEq, Eq)]
pub struct Recipe {
    #[cfg_attr(feature = "server", schema(value_type = String, example = "1"))]
    pub id: RecordId,
    #[cfg_attr(feature = "server", schema(example = "Chicken Tikka Masala"))]
    pub name: String,
    /// Free-text instructions; `null` when the recipe has none.
    pub steps: Option<String>,
    /// Minutes.
    pub cook_time: u32,
    #[cfg_attr(feature = "server", schema(value_type = String, example = "medium"))]
    pub difficulty: Difficulty,
    /// Ingredient ids in recipe order. Unknown ids are allowed and skipped on resolution.
    #[cfg_attr(feature = "server", schema(value_type = Vec<String>))]
    pub ingredient_ids: Vec<RecordId>,
}
