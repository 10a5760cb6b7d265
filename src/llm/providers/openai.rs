use super::LlmProvider;
use crate::constants::LLM_TEMPERATURE;
use crate::errors::Error;
use crate::llm::ChatMessage;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::json;

/// Provider implementation for OpenAI's API
#[derive(Debug)]
pub struct OpenAiProvider {
    /// Shared HTTP client, built once at construction
    client: Client,
    /// OpenAI API key loaded from environment
    api_key: String,
    /// Model identifier to use (e.g. "gpt-4o-mini")
    model: String,
}

impl OpenAiProvider {
    /// Creates a new OpenAI provider instance
    ///
    /// # Arguments
    /// * `model` - The model identifier to use
    ///
    /// # Returns
    /// * `Result<Self, Error>` - Provider instance or error if API key not found
    pub fn new(model: &str) -> Result<Self, Error> {
        let api_key =
            std::env::var("OPENAI_API_KEY").map_err(|_| Error::MissingApiKey("OPENAI_API_KEY"))?;
        Ok(OpenAiProvider {
            client: Client::new(),
            api_key,
            model: model.to_string(),
        })
    }
}

#[async_trait]
impl LlmProvider for OpenAiProvider {
    /// Calls OpenAI's chat completions API
    ///
    /// # Arguments
    /// * `messages` - Ordered role/content message list
    ///
    /// # Returns
    /// * `Result<String, Error>` - Generated response text or error
    async fn call_llm_api(&self, messages: Vec<ChatMessage>) -> Result<String, Error> {
        let request_body = json!({
          "model": self.model,
          "messages": messages,
          "temperature": LLM_TEMPERATURE
        });

        let res = self
            .client
            .post("https://api.openai.com/v1/chat/completions")
            .bearer_auth(&self.api_key)
            .json(&request_body)
            .send()
            .await?;

        if !res.status().is_success() {
            let text = res.text().await?;
            return Err(Error::Completion(format!("OpenAI API error: {}", text)));
        }

        let json_resp: serde_json::Value = res.json().await?;
        if let Some(content) = json_resp["choices"][0]["message"]["content"].as_str() {
            Ok(content.trim().to_string())
        } else {
            Err(Error::Completion(
                "No content in OpenAI LLM response".to_string(),
            ))
        }
    }
}
