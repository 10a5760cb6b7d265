use crate::constants::{DEFAULT_LLM_MODEL, DEFAULT_LLM_PROVIDER, DEFAULT_PORT};

/// Process configuration resolved from the environment at startup
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Name of the completion provider to use ("groq" or "openai")
    pub llm_provider: String,
    /// Model identifier passed to the completion provider
    pub llm_model: String,
    /// Google Custom Search API key; absence disables image lookups
    pub google_api_key: Option<String>,
    /// Google Custom Search engine id; absence disables image lookups
    pub google_cse_id: Option<String>,
    /// Port the HTTP server binds on
    pub port: u16,
}

impl AppConfig {
    /// Reads configuration from the environment, falling back to defaults.
    ///
    /// Provider API keys are not read here: each provider reads its own
    /// key when it is constructed, so only the selected provider's key
    /// needs to be present.
    pub fn from_env() -> Self {
        let port = std::env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(DEFAULT_PORT);

        AppConfig {
            llm_provider: std::env::var("LLM_PROVIDER")
                .unwrap_or_else(|_| DEFAULT_LLM_PROVIDER.to_string()),
            llm_model: std::env::var("LLM_MODEL")
                .unwrap_or_else(|_| DEFAULT_LLM_MODEL.to_string()),
            google_api_key: std::env::var("GOOGLE_API_KEY").ok(),
            google_cse_id: std::env::var("GOOGLE_CSE_ID").ok(),
            port,
        }
    }
}
