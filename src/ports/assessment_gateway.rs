//! Assessment Gateway Port - remote submission of finalized records.
//!
//! Submission is fire-and-forget at the call site: the assessment store
//! logs a failure and finishes finalizing locally regardless.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::assessment::{AnswerSet, AssessmentRecord, Classification, DoshaScores};

/// The payload submitted to the remote system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentSubmission {
    pub answers: AnswerSet,
    pub scores: DoshaScores,
    pub classification: Classification,
}

impl From<&AssessmentRecord> for AssessmentSubmission {
    fn from(record: &AssessmentRecord) -> Self {
        Self {
            answers: record.answers.clone(),
            scores: record.scores,
            classification: record.classification,
        }
    }
}

/// Errors from the remote submission.
#[derive(Debug, Clone, thiserror::Error)]
pub enum GatewayError {
    #[error("Submission rejected with status {status}: {message}")]
    Rejected { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(String),
}

/// Port for submitting finalized assessments to a remote system.
#[async_trait]
pub trait AssessmentGateway: Send + Sync {
    /// Submit a finalized assessment.
    async fn submit(&self, submission: &AssessmentSubmission) -> Result<(), GatewayError>;
}
