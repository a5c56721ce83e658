use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use strum::{EnumIter, IntoEnumIterator};

/// Form types this layer knows how to represent. The set is closed:
/// collaborators that filter or query by form type depend on the exact
/// wire labels, so an unrecognized label is an error rather than a
/// catch-all variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
#[serde(try_from = "String", into = "String")]
pub enum FilingType {
    Form10K,
    Form10Q,
    Form8K,
}

impl TryFrom<String> for FilingType {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        FilingType::from_str(&s)
    }
}

impl From<FilingType> for String {
    fn from(t: FilingType) -> String {
        t.to_string()
    }
}

impl fmt::Display for FilingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilingType::Form10K => write!(f, "10-K"),
            FilingType::Form10Q => write!(f, "10-Q"),
            FilingType::Form8K => write!(f, "8-K"),
        }
    }
}

impl FromStr for FilingType {
    type Err = String;

    fn from_str(s: &str) -> Result<FilingType, String> {
        match s.to_uppercase().as_str() {
            "10-K" => Ok(FilingType::Form10K),
            "10-Q" => Ok(FilingType::Form10Q),
            "8-K" => Ok(FilingType::Form8K),
            other => Err(format!(
                "Unsupported filing type: {}. Supported types: {}",
                other,
                FilingType::list_types()
            )),
        }
    }
}

pub static FILING_TYPES: Lazy<String> = Lazy::new(|| {
    FilingType::iter()
        .map(|t| t.to_string())
        .collect::<Vec<_>>()
        .join(", ")
});

impl FilingType {
    pub fn list_types() -> &'static str {
        &FILING_TYPES
    }
}
