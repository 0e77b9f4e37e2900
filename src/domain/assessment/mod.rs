//! Assessment module - questionnaire, scoring, and classification.
//!
//! The scoring and classification functions are pure; the only state in
//! this module is the static questionnaire definition.

mod answers;
mod classification;
mod questionnaire;
mod record;
mod scoring;

pub use answers::{Answer, AnswerSet};
pub use classification::{classify, Classification, BLEND_THRESHOLD};
pub use questionnaire::{Choice, Question, Questionnaire, Section, QUESTIONNAIRE};
pub use record::{AssessmentRecord, PersistedAssessment};
pub use scoring::{score_answers, DoshaScores};
