//! Dosha enum representing the three constitutional types.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// The three constitutional types of the assessment.
///
/// Declaration order is the canonical priority order: when two doshas
/// score equally, the one declared first ranks first. Classification
/// depends on this order being stable, so it must never be derived from
/// map-iteration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dosha {
    Vata,
    Pitta,
    Kapha,
}

impl Dosha {
    /// Returns all doshas in canonical priority order.
    pub fn all() -> &'static [Dosha] {
        &[Dosha::Vata, Dosha::Pitta, Dosha::Kapha]
    }

    /// Returns the 0-based rank of this dosha in the canonical order.
    pub fn priority(&self) -> usize {
        Self::all()
            .iter()
            .position(|d| d == self)
            .expect("Dosha must be in all() array")
    }

    /// Returns the lowercase label used in persisted records and labels.
    pub fn label(&self) -> &'static str {
        match self {
            Dosha::Vata => "vata",
            Dosha::Pitta => "pitta",
            Dosha::Kapha => "kapha",
        }
    }

    /// Returns the capitalized display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Dosha::Vata => "Vata",
            Dosha::Pitta => "Pitta",
            Dosha::Kapha => "Kapha",
        }
    }
}

impl fmt::Display for Dosha {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Dosha {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "vata" => Ok(Dosha::Vata),
            "pitta" => Ok(Dosha::Pitta),
            "kapha" => Ok(Dosha::Kapha),
            other => Err(ValidationError::invalid_format(
                "dosha",
                format!("unknown dosha '{}'", other),
            )),
        }
    }
}
