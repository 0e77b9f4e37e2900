//! Mock collaborators for testing.
//!
//! Configurable implementations of the collaborator ports, allowing
//! tests to run without a wellness backend. Responses are queued and
//! consumed in order; calls are recorded for verification.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::domain::diet::{PlanDescriptor, PlanRequest};
use crate::ports::{
    AssessmentGateway, AssessmentSubmission, FoodImage, FoodRecognizer, GatewayError, PlanError,
    PlanGenerator, RecognitionError, RecognizedFood,
};

/// Mock plan generator with queued responses.
#[derive(Debug, Clone, Default)]
pub struct MockPlanGenerator {
    responses: Arc<Mutex<VecDeque<Result<PlanDescriptor, PlanError>>>>,
    calls: Arc<Mutex<Vec<PlanRequest>>>,
}

impl MockPlanGenerator {
    /// Creates a mock with no queued responses (generates empty plans).
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a successful plan response.
    pub fn with_plan(self, plan: PlanDescriptor) -> Self {
        self.responses.lock().unwrap().push_back(Ok(plan));
        self
    }

    /// Queues an error response.
    pub fn with_error(self, error: PlanError) -> Self {
        self.responses.lock().unwrap().push_back(Err(error));
        self
    }

    /// Number of generate calls received.
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// The requests received, in order.
    pub fn requests(&self) -> Vec<PlanRequest> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl PlanGenerator for MockPlanGenerator {
    async fn generate(&self, request: &PlanRequest) -> Result<PlanDescriptor, PlanError> {
        self.calls.lock().unwrap().push(request.clone());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(PlanDescriptor::default()))
    }
}

/// Mock food recognizer with queued responses.
#[derive(Debug, Clone, Default)]
pub struct MockFoodRecognizer {
    responses: Arc<Mutex<VecDeque<Result<RecognizedFood, RecognitionError>>>>,
    calls: Arc<Mutex<usize>>,
}

impl MockFoodRecognizer {
    /// Creates a mock with no queued responses (rejects every image).
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a successful recognition.
    pub fn with_food(self, food: RecognizedFood) -> Self {
        self.responses.lock().unwrap().push_back(Ok(food));
        self
    }

    /// Queues an error response.
    pub fn with_error(self, error: RecognitionError) -> Self {
        self.responses.lock().unwrap().push_back(Err(error));
        self
    }

    /// Number of recognize calls received.
    pub fn call_count(&self) -> usize {
        *self.calls.lock().unwrap()
    }
}

#[async_trait]
impl FoodRecognizer for MockFoodRecognizer {
    async fn recognize(&self, _image: &FoodImage) -> Result<RecognizedFood, RecognitionError> {
        *self.calls.lock().unwrap() += 1;
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| {
                Err(RecognitionError::InvalidResponse(
                    "no queued recognition".to_string(),
                ))
            })
    }
}

/// Mock assessment gateway recording submissions.
#[derive(Debug, Clone, Default)]
pub struct MockAssessmentGateway {
    submissions: Arc<Mutex<Vec<AssessmentSubmission>>>,
    fail_with: Arc<Mutex<Option<GatewayError>>>,
}

impl MockAssessmentGateway {
    /// Creates a mock that accepts every submission.
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every subsequent submission fail with the given error.
    pub fn failing_with(self, error: GatewayError) -> Self {
        *self.fail_with.lock().unwrap() = Some(error);
        self
    }

    /// The submissions received, in order.
    pub fn submissions(&self) -> Vec<AssessmentSubmission> {
        self.submissions.lock().unwrap().clone()
    }

    /// Number of submissions received.
    pub fn call_count(&self) -> usize {
        self.submissions.lock().unwrap().len()
    }
}

#[async_trait]
impl AssessmentGateway for MockAssessmentGateway {
    async fn submit(&self, submission: &AssessmentSubmission) -> Result<(), GatewayError> {
        self.submissions.lock().unwrap().push(submission.clone());
        match &*self.fail_with.lock().unwrap() {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }
}
