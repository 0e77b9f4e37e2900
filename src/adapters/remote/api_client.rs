//! Wellness backend client.
//!
//! Implements the three collaborator ports against the remote wellness
//! API: assessment submission, diet plan generation, and image-based
//! food recognition. Transport policy beyond the configured timeout
//! (retry, backoff, auth headers) is out of scope here.

use async_trait::async_trait;
use reqwest::{multipart, Client, Response};
use std::time::Duration;

use crate::config::ApiConfig;
use crate::domain::diet::{PlanDescriptor, PlanRequest};
use crate::ports::{
    AssessmentGateway, AssessmentSubmission, FoodImage, FoodRecognizer, GatewayError, PlanError,
    PlanGenerator, RecognitionError, RecognizedFood,
};

/// HTTP client for the wellness backend.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Creates a client from the API configuration.
    pub fn new(config: &ApiConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Splits a response into (status, body) for non-2xx handling.
    async fn status_and_body(response: Response) -> (u16, String) {
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        (status, body)
    }
}

#[async_trait]
impl AssessmentGateway for ApiClient {
    async fn submit(&self, submission: &AssessmentSubmission) -> Result<(), GatewayError> {
        let response = self
            .client
            .post(self.url("/prakriti/assess"))
            .json(submission)
            .send()
            .await
            .map_err(|e| GatewayError::Network(e.to_string()))?;

        if response.status().is_success() {
            return Ok(());
        }
        let (status, message) = Self::status_and_body(response).await;
        Err(GatewayError::Rejected { status, message })
    }
}

#[async_trait]
impl PlanGenerator for ApiClient {
    async fn generate(&self, request: &PlanRequest) -> Result<PlanDescriptor, PlanError> {
        let response = self
            .client
            .post(self.url("/diet/generate"))
            .json(request)
            .send()
            .await
            .map_err(|e| PlanError::Network(e.to_string()))?;

        if !response.status().is_success() {
            let (status, message) = Self::status_and_body(response).await;
            return Err(PlanError::Rejected { status, message });
        }

        response
            .json()
            .await
            .map_err(|e| PlanError::InvalidResponse(e.to_string()))
    }
}

#[async_trait]
impl FoodRecognizer for ApiClient {
    async fn recognize(&self, image: &FoodImage) -> Result<RecognizedFood, RecognitionError> {
        let part = multipart::Part::bytes(image.bytes.clone())
            .file_name("capture")
            .mime_str(&image.content_type)
            .map_err(|e| RecognitionError::InvalidResponse(e.to_string()))?;
        let form = multipart::Form::new().part("image", part);

        let response = self
            .client
            .post(self.url("/diet/analyze-food"))
            .multipart(form)
            .send()
            .await
            .map_err(|e| RecognitionError::Network(e.to_string()))?;

        if !response.status().is_success() {
            let (status, message) = Self::status_and_body(response).await;
            return Err(RecognitionError::Rejected { status, message });
        }

        response
            .json()
            .await
            .map_err(|e| RecognitionError::InvalidResponse(e.to_string()))
    }
}
