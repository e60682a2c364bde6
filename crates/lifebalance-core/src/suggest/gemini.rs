//! Gemini-backed suggestion service.
//!
//! Calls the `generateContent` REST endpoint with the API key loaded
//! from the OS keyring. The key is checked at call time, not at
//! construction, so a session without credentials still works -- the
//! panels just resolve to their retry state.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::json;

use super::keyring_store;
use super::{HackCategory, SuggestionService, TimeBudget};
use crate::error::SuggestionError;

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const API_KEY_ENTRY: &str = "gemini_api_key";

pub struct GeminiService {
    api_key: String,
    model: String,
    base_url: String,
    client: Client,
}

impl GeminiService {
    /// Load the stored API key from the OS keyring (empty if absent).
    pub fn new(model: impl Into<String>) -> Self {
        let api_key = keyring_store::get(API_KEY_ENTRY)
            .ok()
            .flatten()
            .unwrap_or_default();
        Self::with_key(api_key, model)
    }

    pub fn with_key(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: model.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            client: Client::new(),
        }
    }

    /// Override the API base URL (test servers).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn is_configured(&self) -> bool {
        !self.api_key.is_empty()
    }

    /// Persist a user-provided API key to the OS keyring.
    pub fn set_api_key(key: &str) -> Result<(), SuggestionError> {
        keyring_store::set(API_KEY_ENTRY, key).map_err(|e| SuggestionError::Keyring(e.to_string()))
    }

    /// Remove the stored API key.
    pub fn clear_api_key() -> Result<(), SuggestionError> {
        keyring_store::delete(API_KEY_ENTRY)
            .map_err(|e| SuggestionError::Keyring(e.to_string()))
    }

    /// Whether a key is present in the keyring.
    pub fn has_stored_key() -> bool {
        keyring_store::get(API_KEY_ENTRY)
            .ok()
            .flatten()
            .is_some_and(|k| !k.is_empty())
    }

    async fn generate(&self, prompt: &str) -> Result<String, SuggestionError> {
        if self.api_key.is_empty() {
            return Err(SuggestionError::MissingApiKey);
        }

        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        );
        let body = json!({
            "contents": [{ "parts": [{ "text": prompt }] }]
        });

        let resp = self.client.post(&url).json(&body).send().await?;
        let status = resp.status();
        if !status.is_success() {
            let message = resp.text().await.unwrap_or_default();
            return Err(SuggestionError::Service {
                status: status.as_u16(),
                message,
            });
        }

        let payload: serde_json::Value = resp.json().await?;
        payload["candidates"][0]["content"]["parts"][0]["text"]
            .as_str()
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .ok_or(SuggestionError::EmptyResponse)
    }
}

#[async_trait]
impl SuggestionService for GeminiService {
    async fn generate_meal_ideas(
        &self,
        ingredients: &str,
        time_budget: TimeBudget,
    ) -> Result<String, SuggestionError> {
        let prompt = format!(
            "Suggest 2-3 simple meal ideas using these ingredients: {ingredients}. \
             The meal should take about {} to cook. \
             Answer with short markdown bullet points, one line per idea.",
            time_budget.label()
        );
        self.generate(&prompt).await
    }

    async fn generate_life_hack(
        &self,
        category: HackCategory,
    ) -> Result<String, SuggestionError> {
        let prompt = format!(
            "Give me one practical, lesser-known life hack for the category \
             \"{}\". Answer with a single short sentence.",
            category.label()
        );
        self.generate(&prompt).await
    }
}
