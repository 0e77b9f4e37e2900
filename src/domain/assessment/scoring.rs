//! Scoring function - normalized percentage scores per dosha.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Dosha, Percentage};

use super::answers::AnswerSet;

/// Normalized percentage score per dosha.
///
/// Each score is in [0, 100]. For a non-empty answer set the three
/// scores sum to 100 give or take rounding drift of a point or two,
/// since each is rounded independently; callers must not assert an
/// exact 100. All three are zero when the answer set is empty.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DoshaScores {
    pub vata: Percentage,
    pub pitta: Percentage,
    pub kapha: Percentage,
}

impl DoshaScores {
    /// Creates a score vector from raw percentage values (clamped).
    pub fn new(vata: u8, pitta: u8, kapha: u8) -> Self {
        Self {
            vata: Percentage::new(vata),
            pitta: Percentage::new(pitta),
            kapha: Percentage::new(kapha),
        }
    }

    /// Returns the score for one dosha.
    pub fn get(&self, dosha: Dosha) -> Percentage {
        match dosha {
            Dosha::Vata => self.vata,
            Dosha::Pitta => self.pitta,
            Dosha::Kapha => self.kapha,
        }
    }

    /// True when every score is zero: assessment not started.
    pub fn is_unscored(&self) -> bool {
        Dosha::all().iter().all(|d| self.get(*d).is_zero())
    }

    /// Doshas ranked by descending score.
    ///
    /// Equal scores rank in canonical priority order (vata, pitta,
    /// kapha), never in map-iteration order, so ranking is
    /// reproducible for any input.
    pub fn ranked(&self) -> [(Dosha, Percentage); 3] {
        let mut ranked = [
            (Dosha::Vata, self.vata),
            (Dosha::Pitta, self.pitta),
            (Dosha::Kapha, self.kapha),
        ];
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.priority().cmp(&b.0.priority())));
        ranked
    }
}

/// Maps a completed (or partial) answer set to normalized scores.
///
/// Every answer adds its weight to the running total of its dosha. An
/// empty answer set yields the all-zero vector, a valid state meaning
/// "assessment not started". Otherwise each dosha's score is
/// `round(100 * dosha_total / total)` with half-up rounding applied
/// independently per dosha.
pub fn score_answers(answers: &AnswerSet) -> DoshaScores {
    let mut totals = [0u64; 3];
    for answer in answers.answers() {
        totals[answer.dosha.priority()] += u64::from(answer.weight);
    }

    let total: u64 = totals.iter().sum();
    if total == 0 {
        return DoshaScores::default();
    }

    let pct = |dosha_total: u64| {
        Percentage::new(((100.0 * dosha_total as f64) / total as f64).round() as u8)
    };

    DoshaScores {
        vata: pct(totals[Dosha::Vata.priority()]),
        pitta: pct(totals[Dosha::Pitta.priority()]),
        kapha: pct(totals[Dosha::Kapha.priority()]),
    }
}
