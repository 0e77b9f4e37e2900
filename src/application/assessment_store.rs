//! Assessment store - owns the durable assessment record.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::assessment::{
    classify, score_answers, Answer, AnswerSet, AssessmentRecord, DoshaScores,
};
use crate::domain::foundation::Timestamp;
use crate::ports::{AssessmentGateway, AssessmentSubmission, RecordStorage, RecordStorageError};

/// Errors from assessment store operations.
#[derive(Debug, thiserror::Error)]
pub enum AssessmentError {
    /// Finalize was called with no answers recorded; classification is
    /// undetermined and nothing was written.
    #[error("assessment has no answers to score")]
    NotStarted,

    #[error("failed to persist assessment record")]
    Storage(#[from] RecordStorageError),
}

/// Holds the current classification, raw answers, scores, and
/// assessment timestamp; persists them across sessions.
///
/// All four record fields are written together at finalize and cleared
/// together at reset. Re-answering a question overwrites the prior
/// choice. Mutation only happens through these operations.
pub struct AssessmentStore {
    answers: AnswerSet,
    record: Option<AssessmentRecord>,
    storage: Arc<dyn RecordStorage>,
    gateway: Option<Arc<dyn AssessmentGateway>>,
}

impl AssessmentStore {
    /// Creates a store restored from durable storage.
    ///
    /// A missing document yields the empty initial state. So does a
    /// corrupt or schema-mismatched one: the broken document is
    /// discarded with a warning rather than surfaced to the caller.
    pub async fn load(
        storage: Arc<dyn RecordStorage>,
        gateway: Option<Arc<dyn AssessmentGateway>>,
    ) -> Self {
        let (answers, record) = match storage.load().await {
            Ok(Some(document)) => {
                let answers = document.answers.clone();
                (answers, document.into_record())
            }
            Ok(None) => (AnswerSet::new(), None),
            Err(error) => {
                warn!(%error, "discarding unreadable assessment record");
                (AnswerSet::new(), None)
            }
        };

        Self {
            answers,
            record,
            storage,
            gateway,
        }
    }

    /// Records the answer for a question; idempotent per question id.
    pub fn record_answer(&mut self, question_id: impl Into<String>, answer: Answer) {
        let question_id = question_id.into();
        debug!(question_id = %question_id, dosha = %answer.dosha, "recording answer");
        self.answers.record(question_id, answer);
    }

    /// Scores and classifies the current answers, then atomically
    /// writes the full record: classification, scores, answers, and
    /// the assessment timestamp.
    ///
    /// All-or-nothing: an undetermined classification (no answers) or a
    /// persistence failure leaves both the in-memory state and the
    /// durable document exactly as they were. The remote submission is
    /// fire-and-forget; its failure is logged and never rolls back or
    /// fails the local finalize.
    pub async fn finalize(&mut self) -> Result<AssessmentRecord, AssessmentError> {
        let scores = score_answers(&self.answers);
        let classification = classify(&scores).ok_or(AssessmentError::NotStarted)?;

        let record = AssessmentRecord {
            classification,
            scores,
            answers: self.answers.clone(),
            assessed_at: Timestamp::now(),
        };

        self.storage.save(&record.to_persisted()).await?;
        self.record = Some(record.clone());
        debug!(classification = %record.classification, "assessment finalized");

        if let Some(gateway) = &self.gateway {
            let submission = AssessmentSubmission::from(&record);
            if let Err(error) = gateway.submit(&submission).await {
                warn!(%error, "remote assessment submission failed; record kept locally");
            }
        }

        Ok(record)
    }

    /// Clears answers, record, and the durable document back to the
    /// initial empty state. Idempotent.
    pub async fn reset(&mut self) -> Result<(), AssessmentError> {
        self.storage.clear().await?;
        self.answers = AnswerSet::new();
        self.record = None;
        debug!("assessment store reset");
        Ok(())
    }

    /// Read-only snapshot of the finalized record, if any.
    pub fn record(&self) -> Option<&AssessmentRecord> {
        self.record.as_ref()
    }

    /// Read-only view of the recorded answers.
    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    /// The finalized scores, or the all-zero vector before finalize.
    pub fn scores(&self) -> DoshaScores {
        self.record
            .as_ref()
            .map(|r| r.scores)
            .unwrap_or_default()
    }
}
