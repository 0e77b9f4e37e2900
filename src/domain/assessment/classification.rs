//! Classification function - single or blended dosha label.

use serde::de::{self, Deserialize, Deserializer};
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::{Dosha, ValidationError};

use super::scoring::DoshaScores;

/// Score gap below which the top two doshas blend into a dual label.
pub const BLEND_THRESHOLD: u8 = 10;

/// The outcome of a completed assessment.
///
/// Either a single dominant dosha, or a dual label when no single dosha
/// clearly dominates. The dual label carries the doshas in
/// descending-score order. "Undetermined" is not a variant: the
/// classification function returns `None` for unscored input, and the
/// persisted record stores `null`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Classification {
    Single(Dosha),
    Dual(Dosha, Dosha),
}

impl Classification {
    /// The dominant dosha: the classification's primary type.
    pub fn primary(&self) -> Dosha {
        match self {
            Classification::Single(d) => *d,
            Classification::Dual(first, _) => *first,
        }
    }

    /// The secondary dosha of a dual classification.
    pub fn secondary(&self) -> Option<Dosha> {
        match self {
            Classification::Single(_) => None,
            Classification::Dual(_, second) => Some(*second),
        }
    }

    /// True for a blended two-dosha label.
    pub fn is_dual(&self) -> bool {
        matches!(self, Classification::Dual(_, _))
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Classification::Single(d) => write!(f, "{}", d),
            Classification::Dual(first, second) => write!(f, "{}-{}", first, second),
        }
    }
}

impl FromStr for Classification {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once('-') {
            None => Ok(Classification::Single(s.parse()?)),
            Some((first, second)) => {
                let first: Dosha = first.parse()?;
                let second: Dosha = second.parse()?;
                if first == second {
                    return Err(ValidationError::invalid_format(
                        "classification",
                        format!("duplicate dosha in dual label '{}'", s),
                    ));
                }
                Ok(Classification::Dual(first, second))
            }
        }
    }
}

impl Serialize for Classification {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Classification {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        label.parse().map_err(de::Error::custom)
    }
}

/// Maps a score vector to a classification.
///
/// Returns `None` for the all-zero vector (assessment not started).
/// Otherwise the three doshas are ranked by descending score with equal
/// scores resolved by canonical priority order; if the gap between the
/// top two is under [`BLEND_THRESHOLD`] points the result is the dual
/// label of the top two, else the single top dosha. A three-way
/// near-tie also reduces to the top two.
pub fn classify(scores: &DoshaScores) -> Option<Classification> {
    if scores.is_unscored() {
        return None;
    }

    let [(top, top_score), (second, second_score), _] = scores.ranked();
    if top_score.gap(&second_score) < BLEND_THRESHOLD {
        Some(Classification::Dual(top, second))
    } else {
        Some(Classification::Single(top))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_zero_scores_are_undetermined() {
        assert_eq!(classify(&DoshaScores::default()), None);
    }

    #[test]
    fn clear_dominance_yields_single_label() {
        // 67/33/0: gap of 34 is well over the threshold.
        let scores = DoshaScores::new(67, 33, 0);
        assert_eq!(classify(&scores), Some(Classification::Single(Dosha::Vata)));
    }

    #[test]
    fn narrow_gap_yields_dual_label() {
        // 45/40/15: gap of 5 blends the top two.
        let scores = DoshaScores::new(45, 40, 15);
        let classification = classify(&scores).unwrap();

        assert_eq!(classification, Classification::Dual(Dosha::Vata, Dosha::Pitta));
        assert_eq!(classification.to_string(), "vata-pitta");
    }

    #[test]
    fn dual_label_orders_by_descending_score() {
        let scores = DoshaScores::new(40, 45, 15);
        assert_eq!(
            classify(&scores),
            Some(Classification::Dual(Dosha::Pitta, Dosha::Vata))
        );
    }

    #[test]
    fn gap_of_exactly_threshold_stays_single() {
        let scores = DoshaScores::new(50, 40, 10);
        assert_eq!(classify(&scores), Some(Classification::Single(Dosha::Vata)));
    }

    #[test]
    fn top_tie_resolves_by_canonical_order() {
        // Pitta and kapha tied on top: pitta ranks first, and the zero
        // gap blends them.
        let scores = DoshaScores::new(20, 40, 40);
        assert_eq!(
            classify(&scores),
            Some(Classification::Dual(Dosha::Pitta, Dosha::Kapha))
        );
    }

    #[test]
    fn three_way_near_tie_reduces_to_top_two() {
        let scores = DoshaScores::new(33, 33, 33);
        assert_eq!(
            classify(&scores),
            Some(Classification::Dual(Dosha::Vata, Dosha::Pitta))
        );
    }

    #[test]
    fn classification_is_deterministic_under_ties() {
        let scores = DoshaScores::new(34, 33, 33);
        let first = classify(&scores);
        for _ in 0..10 {
            assert_eq!(classify(&scores), first);
        }
    }

    #[test]
    fn primary_and_secondary_accessors() {
        let single = Classification::Single(Dosha::Kapha);
        assert_eq!(single.primary(), Dosha::Kapha);
        assert_eq!(single.secondary(), None);
        assert!(!single.is_dual());

        let dual = Classification::Dual(Dosha::Vata, Dosha::Pitta);
        assert_eq!(dual.primary(), Dosha::Vata);
        assert_eq!(dual.secondary(), Some(Dosha::Pitta));
        assert!(dual.is_dual());
    }

    #[test]
    fn displays_as_label() {
        assert_eq!(Classification::Single(Dosha::Vata).to_string(), "vata");
        assert_eq!(
            Classification::Dual(Dosha::Kapha, Dosha::Pitta).to_string(),
            "kapha-pitta"
        );
    }

    #[test]
    fn parses_from_label() {
        assert_eq!(
            "vata".parse::<Classification>().unwrap(),
            Classification::Single(Dosha::Vata)
        );
        assert_eq!(
            "pitta-kapha".parse::<Classification>().unwrap(),
            Classification::Dual(Dosha::Pitta, Dosha::Kapha)
        );
    }

    #[test]
    fn rejects_malformed_labels() {
        assert!("".parse::<Classification>().is_err());
        assert!("vata-vata".parse::<Classification>().is_err());
        assert!("vata-pitta-kapha".parse::<Classification>().is_err());
        assert!("fire".parse::<Classification>().is_err());
    }

    #[test]
    fn serde_roundtrips_as_string() {
        let dual = Classification::Dual(Dosha::Vata, Dosha::Pitta);
        let json = serde_json::to_string(&dual).unwrap();
        assert_eq!(json, "\"vata-pitta\"");

        let parsed: Classification = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, dual);
    }
}
