//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `RecordStorage` - durable persistence for the assessment record
//! - `AssessmentGateway` - fire-and-forget remote record submission
//! - `PlanGenerator` - external diet plan generation
//! - `FoodRecognizer` - external image-based food recognition

mod assessment_gateway;
mod food_recognizer;
mod plan_generator;
mod record_storage;

pub use assessment_gateway::{AssessmentGateway, AssessmentSubmission, GatewayError};
pub use food_recognizer::{FoodImage, FoodRecognizer, RecognitionError, RecognizedFood};
pub use plan_generator::{PlanError, PlanGenerator};
pub use record_storage::{RecordStorage, RecordStorageError};
