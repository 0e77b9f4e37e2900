//! The finalized assessment record and its persisted form.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Timestamp;

use super::answers::AnswerSet;
use super::classification::Classification;
use super::scoring::DoshaScores;

/// A finalized assessment: classification, scores, the answers that
/// produced them, and when the assessment completed.
///
/// Owned exclusively by the assessment store; all four fields are
/// written together at finalize and cleared together at reset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentRecord {
    pub classification: Classification,
    pub scores: DoshaScores,
    pub answers: AnswerSet,
    pub assessed_at: Timestamp,
}

impl AssessmentRecord {
    /// Converts to the durable document form.
    pub fn to_persisted(&self) -> PersistedAssessment {
        PersistedAssessment {
            classification: Some(self.classification),
            answers: self.answers.clone(),
            scores: self.scores,
            assessed_at: Some(self.assessed_at),
        }
    }
}

/// The durable document stored under the fixed namespace key.
///
/// Classification and timestamp are nullable so the document can also
/// describe an assessment that was started but never finalized. The
/// store treats any malformed document as the empty initial state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PersistedAssessment {
    pub classification: Option<Classification>,
    #[serde(default)]
    pub answers: AnswerSet,
    #[serde(default)]
    pub scores: DoshaScores,
    pub assessed_at: Option<Timestamp>,
}

impl PersistedAssessment {
    /// Reconstructs the in-memory record, if the document describes a
    /// finalized assessment.
    pub fn into_record(self) -> Option<AssessmentRecord> {
        match (self.classification, self.assessed_at) {
            (Some(classification), Some(assessed_at)) => Some(AssessmentRecord {
                classification,
                scores: self.scores,
                answers: self.answers,
                assessed_at,
            }),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::assessment::Answer;
    use crate::domain::foundation::Dosha;

    fn sample_record() -> AssessmentRecord {
        let mut answers = AnswerSet::new();
        answers.record("q1", Answer::new("thin", Dosha::Vata, 1));
        AssessmentRecord {
            classification: Classification::Single(Dosha::Vata),
            scores: DoshaScores::new(100, 0, 0),
            answers,
            assessed_at: Timestamp::now(),
        }
    }

    #[test]
    fn persisted_form_roundtrips_a_finalized_record() {
        let record = sample_record();
        let restored = record.to_persisted().into_record().unwrap();
        assert_eq!(restored, record);
    }

    #[test]
    fn persisted_document_without_classification_yields_no_record() {
        let doc = PersistedAssessment {
            classification: None,
            answers: AnswerSet::new(),
            scores: DoshaScores::default(),
            assessed_at: None,
        };
        assert!(doc.into_record().is_none());
    }

    #[test]
    fn persisted_schema_shape() {
        let json = serde_json::to_value(sample_record().to_persisted()).unwrap();

        assert_eq!(json["classification"], "vata");
        assert_eq!(json["scores"]["vata"], 100);
        assert_eq!(json["answers"]["q1"]["value"], "thin");
        assert!(json["assessed_at"].is_string());
    }

    #[test]
    fn deserializes_the_empty_document() {
        let doc: PersistedAssessment =
            serde_json::from_str(r#"{"classification": null, "assessed_at": null}"#).unwrap();
        assert_eq!(doc, PersistedAssessment::default());
        assert!(doc.into_record().is_none());
    }
}
