//! Plan Generator Port - external diet plan generation.

use async_trait::async_trait;

use crate::domain::diet::{PlanDescriptor, PlanRequest};

/// Errors from plan generation.
#[derive(Debug, Clone, thiserror::Error)]
pub enum PlanError {
    #[error("Plan generation rejected with status {status}: {message}")]
    Rejected { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Malformed plan in response: {0}")]
    InvalidResponse(String),
}

/// Port for the external plan-generation collaborator.
///
/// The façade forwards a single request per user action and does not
/// retry; failures surface to the caller as a typed error.
#[async_trait]
pub trait PlanGenerator: Send + Sync {
    /// Generate a diet plan for the given request.
    async fn generate(&self, request: &PlanRequest) -> Result<PlanDescriptor, PlanError>;
}
