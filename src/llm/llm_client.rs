use crate::errors::Error;
use crate::llm::providers::LlmProvider;
use crate::llm::ChatMessage;

/// Generic LLM client that delegates work to a concrete provider.
#[derive(Debug)]
pub struct LlmClient {
    provider: Box<dyn LlmProvider>,
}

impl LlmClient {
    /// Creates a new LLM client with the specified provider and model.
    ///
    /// # Arguments
    /// * `provider_name` - Name of the LLM provider ("groq" or "openai")
    /// * `model` - Model name to use with the provider
    ///
    /// # Returns
    /// * `Result<LlmClient, Error>` - New LLM client instance or error
    pub fn new(provider_name: &str, model: &str) -> Result<Self, Error> {
        let provider: Box<dyn LlmProvider> = match provider_name {
            "groq" => Box::new(crate::llm::providers::groq::GroqProvider::new(model)?),
            "openai" => Box::new(crate::llm::providers::openai::OpenAiProvider::new(model)?),
            _ => return Err(Error::UnknownProvider(provider_name.to_string())),
        };

        Ok(LlmClient { provider })
    }

    /// Creates a client around an already-constructed provider.
    pub fn with_provider(provider: Box<dyn LlmProvider>) -> Self {
        LlmClient { provider }
    }

    /// Calls the LLM with the given message list and returns the raw response.
    ///
    /// # Arguments
    /// * `messages` - Ordered role/content message list
    ///
    /// # Returns
    /// * `Result<String, Error>` - LLM response text or error
    pub async fn call_llm_api(&self, messages: Vec<ChatMessage>) -> Result<String, Error> {
        self.provider.call_llm_api(messages).await
    }
}
