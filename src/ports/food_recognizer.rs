//! Food Recognizer Port - external image-based food recognition.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::Dosha;

/// A captured image handed to the recognition service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoodImage {
    pub bytes: Vec<u8>,
    pub content_type: String,
}

impl FoodImage {
    /// Creates a food image payload.
    pub fn new(bytes: Vec<u8>, content_type: impl Into<String>) -> Self {
        Self {
            bytes,
            content_type: content_type.into(),
        }
    }

    /// A JPEG image payload.
    pub fn jpeg(bytes: Vec<u8>) -> Self {
        Self::new(bytes, "image/jpeg")
    }
}

/// What the recognition service saw in the image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecognizedFood {
    pub name: String,
    pub quantity: String,
    pub calories: u32,
    pub dosha: Option<Dosha>,
}

/// Errors from food recognition.
#[derive(Debug, Clone, thiserror::Error)]
pub enum RecognitionError {
    #[error("Recognition rejected with status {status}: {message}")]
    Rejected { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Malformed recognition response: {0}")]
    InvalidResponse(String),
}

/// Port for the external food-recognition collaborator.
///
/// On failure the caller must leave the meal log untouched; no partial
/// entry is ever created from a failed recognition.
#[async_trait]
pub trait FoodRecognizer: Send + Sync {
    /// Recognize the food in a captured image.
    async fn recognize(&self, image: &FoodImage) -> Result<RecognizedFood, RecognitionError>;
}
