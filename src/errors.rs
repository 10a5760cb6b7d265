#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Unknown LLM provider '{0}'")]
    UnknownProvider(String),
    #[error("{0} environment variable not set")]
    MissingApiKey(&'static str),
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Completion provider error: {0}")]
    Completion(String),
    #[error("Image search error: {0}")]
    ImageSearch(String),
}
