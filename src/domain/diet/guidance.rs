//! Static dosha guidance tables.

use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::BTreeMap;

use crate::domain::assessment::Classification;
use crate::domain::foundation::Dosha;

/// Dietary and lifestyle guidance for one dosha.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DoshaGuidance {
    pub favor: Vec<&'static str>,
    pub avoid: Vec<&'static str>,
    pub lifestyle: Vec<&'static str>,
}

impl DoshaGuidance {
    /// The empty guidance set, returned for lookups that miss.
    pub fn empty() -> Self {
        Self::default()
    }

    /// True when the set carries no guidance at all.
    pub fn is_empty(&self) -> bool {
        self.favor.is_empty() && self.avoid.is_empty() && self.lifestyle.is_empty()
    }
}

static GUIDANCE: Lazy<BTreeMap<Dosha, DoshaGuidance>> = Lazy::new(|| {
    BTreeMap::from([
        (
            Dosha::Vata,
            DoshaGuidance {
                favor: vec![
                    "Warm, cooked foods",
                    "Sweet, sour, salty tastes",
                    "Ghee, oils",
                    "Grounding foods",
                ],
                avoid: vec![
                    "Spicy, hot foods",
                    "Sour, salty tastes",
                    "Excessive heat",
                    "Fried foods",
                ],
                lifestyle: vec![
                    "Moderate exercise",
                    "Cool environment",
                    "Stress management",
                    "Adequate hydration",
                ],
            },
        ),
        (
            Dosha::Pitta,
            DoshaGuidance {
                favor: vec![
                    "Cooling, fresh foods",
                    "Sweet, bitter, astringent tastes",
                    "Coconut, cucumber",
                    "Calming foods",
                ],
                avoid: vec![
                    "Spicy, pungent foods",
                    "Sour, fermented tastes",
                    "Excessive oil",
                    "Midday sun exposure",
                ],
                lifestyle: vec![
                    "Gentle exercise",
                    "Cool environment",
                    "Regular meal times",
                    "Time to unwind",
                ],
            },
        ),
        (
            Dosha::Kapha,
            DoshaGuidance {
                favor: vec![
                    "Light, dry foods",
                    "Pungent, bitter, astringent tastes",
                    "Warm spices",
                    "Stimulating foods",
                ],
                avoid: vec![
                    "Heavy, oily foods",
                    "Sweet, sour, salty tastes",
                    "Dairy products",
                    "Cold foods",
                ],
                lifestyle: vec![
                    "Regular exercise",
                    "Active lifestyle",
                    "Early morning routine",
                    "Stimulating activities",
                ],
            },
        ),
    ])
});

/// Guidance for a single dosha; `None` when the table has no entry.
pub fn guidance_for_dosha(dosha: Dosha) -> Option<&'static DoshaGuidance> {
    GUIDANCE.get(&dosha)
}

/// Guidance keyed by a classification's primary dosha.
///
/// Fails soft: an undetermined classification, or one whose primary
/// dosha is absent from the table, yields the empty guidance set
/// rather than an error.
pub fn guidance_for(classification: Option<&Classification>) -> DoshaGuidance {
    classification
        .and_then(|c| guidance_for_dosha(c.primary()))
        .cloned()
        .unwrap_or_else(DoshaGuidance::empty)
}
