//! Client for the Gemini `generateContent` REST API.
//!
//! Every request carries the same generation parameters, safety settings,
//! and cooking-advice system instruction; only the question text varies.

use std::time::Duration;

use reqwest::Client;
use serde_json::{json, Value};
use thiserror::Error;
use tracing::debug;

/// Persona sent as the `systemInstruction` on every request.
const SYSTEM_INSTRUCTION: &str = "You are a non-humorous veteran to cooking. \
    Your only purpose is to give feedback, and ways to deal with food, and \
    improve recipes based off of set ingredients. Act professional and be \
    very precise with your steps.";

/// Provider-side content-filtering thresholds, passed through unchanged.
const SAFETY_SETTINGS: [(&str, &str); 4] = [
    ("HARM_CATEGORY_HARASSMENT", "BLOCK_NONE"),
    ("HARM_CATEGORY_HATE_SPEECH", "BLOCK_MEDIUM_AND_ABOVE"),
    ("HARM_CATEGORY_SEXUALLY_EXPLICIT", "BLOCK_MEDIUM_AND_ABOVE"),
    ("HARM_CATEGORY_DANGEROUS_CONTENT", "BLOCK_MEDIUM_AND_ABOVE"),
];

/// Static generation parameters sent with every upstream call.
#[derive(Debug, Clone)]
pub struct GenerationConfig {
    pub temperature: f64,
    pub top_p: f64,
    pub top_k: u32,
    pub max_output_tokens: u32,
    pub response_mime_type: &'static str,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            temperature: 1.0,
            top_p: 0.95,
            top_k: 64,
            max_output_tokens: 8192,
            response_mime_type: "text/plain",
        }
    }
}

#[derive(Debug, Error)]
pub enum GeminiError {
    #[error("Gemini request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Gemini API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Gemini response did not contain any text")]
    EmptyResponse,
}

#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
    model: String,
    api_base: String,
    generation: GenerationConfig,
}

impl std::fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiClient")
            .field("api_key", &"[REDACTED]")
            .field("model", &self.model)
            .field("api_base", &self.api_base)
            .finish()
    }
}

impl GeminiClient {
    pub fn new(
        api_key: impl Into<String>,
        model: impl Into<String>,
        api_base: impl Into<String>,
    ) -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(120))
                .build()
                .expect("failed to build HTTP client"),
            api_key: api_key.into(),
            model: model.into(),
            api_base: api_base.into(),
            generation: GenerationConfig::default(),
        }
    }

    /// Ask the model the given question and return the generated text.
    pub async fn generate_answer(&self, question: &str) -> Result<String, GeminiError> {
        let body = self.build_request_body(question);

        debug!(model = %self.model, "sending generateContent request");

        let response = self
            .client
            .post(self.request_url())
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let error_text = response.text().await.unwrap_or_default();
            // The error body is usually JSON with a useful error.message.
            let message = serde_json::from_str::<Value>(&error_text)
                .ok()
                .and_then(|v| v["error"]["message"].as_str().map(str::to_string))
                .unwrap_or(error_text);
            return Err(GeminiError::Api { status, message });
        }

        let json: Value = response.json().await?;
        Self::extract_text(&json).ok_or(GeminiError::EmptyResponse)
    }

    fn request_url(&self) -> String {
        format!("{}/models/{}:generateContent", self.api_base, self.model)
    }

    /// Build the `generateContent` request body for a single user turn.
    fn build_request_body(&self, question: &str) -> Value {
        let safety_settings: Vec<Value> = SAFETY_SETTINGS
            .iter()
            .map(|(category, threshold)| json!({ "category": category, "threshold": threshold }))
            .collect();

        json!({
            "contents": [{
                "role": "user",
                "parts": [{ "text": question }]
            }],
            "systemInstruction": {
                "parts": [{ "text": SYSTEM_INSTRUCTION }]
            },
            "generationConfig": {
                "temperature": self.generation.temperature,
                "topP": self.generation.top_p,
                "topK": self.generation.top_k,
                "maxOutputTokens": self.generation.max_output_tokens,
                "responseMimeType": self.generation.response_mime_type,
            },
            "safetySettings": safety_settings,
        })
    }

    /// Extract answer text from a Gemini response, joining multiple parts.
    fn extract_text(response: &Value) -> Option<String> {
        let parts = response["candidates"][0]["content"]["parts"].as_array()?;
        let texts: Vec<&str> = parts.iter().filter_map(|p| p["text"].as_str()).collect();
        if texts.is_empty() {
            None
        } else {
            Some(texts.join(""))
        }
    }
}
