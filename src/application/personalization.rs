//! Personalization façade.
//!
//! Combines the assessment classification with the meal log to drive
//! plan generation, camera-based meal capture, guidance lookup, and
//! daily summaries. The external calls here are the engine's only
//! suspension points; re-submission guards belong to the UI.

use chrono::NaiveDate;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::domain::assessment::{AssessmentRecord, Classification};
use crate::domain::diet::{
    guidance_for, DailySummary, DoshaGuidance, EntryMethod, MealLogEntry, MealSlot,
    NewMealLogEntry, PlanDescriptor, PlanRequest, PlanTarget,
};
use crate::domain::foundation::{ImageRef, ValidationError};
use crate::ports::{FoodImage, FoodRecognizer, PlanError, PlanGenerator, RecognitionError};

use super::meal_log_store::MealLogStore;

/// Façade over the plan-generation and food-recognition collaborators.
pub struct Personalization {
    plan_generator: Arc<dyn PlanGenerator>,
    recognizer: Arc<dyn FoodRecognizer>,
}

impl Personalization {
    /// Creates the façade with its collaborators.
    pub fn new(
        plan_generator: Arc<dyn PlanGenerator>,
        recognizer: Arc<dyn FoodRecognizer>,
    ) -> Self {
        Self {
            plan_generator,
            recognizer,
        }
    }

    /// Builds the plan-request payload for a finalized assessment.
    pub fn plan_request(record: &AssessmentRecord, target: &PlanTarget) -> PlanRequest {
        PlanRequest {
            classification: record.classification,
            scores: record.scores,
            target: target.clone(),
        }
    }

    /// Validates the target and forwards a single plan-generation
    /// request. No retry; a failure surfaces typed to the caller and
    /// changes no local state.
    pub async fn generate_plan(
        &self,
        record: &AssessmentRecord,
        target: &PlanTarget,
    ) -> Result<PlanDescriptor, PlanError> {
        if let Err(error) = target.validate() {
            return Err(PlanError::Rejected {
                status: 422,
                message: error.to_string(),
            });
        }

        let request = Self::plan_request(record, target);
        debug!(classification = %request.classification, "requesting diet plan");
        self.plan_generator.generate(&request).await
    }

    /// Derived guidance for a classification, keyed by its primary
    /// dosha. Fails soft: undetermined or unknown classifications get
    /// the empty guidance set.
    pub fn guidance(&self, classification: Option<&Classification>) -> DoshaGuidance {
        guidance_for(classification)
    }

    /// Recognizes a captured image and appends the result to the meal
    /// log. On recognition failure the log is left untouched; no
    /// partial entry is created.
    pub async fn capture_meal<'a>(
        &self,
        log: &'a mut MealLogStore,
        image: FoodImage,
        slot: MealSlot,
    ) -> Result<&'a MealLogEntry, RecognitionError> {
        let recognized = match self.recognizer.recognize(&image).await {
            Ok(recognized) => recognized,
            Err(error) => {
                warn!(%error, "food recognition failed; meal log unchanged");
                return Err(error);
            }
        };

        let new_entry = NewMealLogEntry {
            name: recognized.name,
            quantity: recognized.quantity,
            calories: recognized.calories,
            meal_slot: slot,
            dosha: recognized.dosha,
            source_image: Some(ImageRef::new()),
            method: EntryMethod::Camera,
        };

        Ok(log.add(new_entry))
    }

    /// Aggregated intake for one local calendar day.
    pub fn daily_summary(&self, log: &MealLogStore, date: NaiveDate) -> DailySummary {
        DailySummary::from_entries(date, log.entries_for_day(date))
    }

    /// Validates a target configuration without issuing a request.
    pub fn validate_target(target: &PlanTarget) -> Result<(), ValidationError> {
        target.validate()
    }
}
