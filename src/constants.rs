/// System prompt sent as the first message of every completion request.
/// Defines the image-tag contract the assistant may use to request a visual.
pub const ASSISTANT_SYSTEM_PROMPT: &str = "You are a helpful and engaging AI assistant. \
You can send images to the user to help visualize concepts or when explicitly asked. \
To send an image, include the tag [IMAGE: <search_query>] at the end of your response. \
For example: 'Here is a picture of a golden retriever. [IMAGE: golden retriever dog]'. \
Do not use the tag if an image is not relevant or necessary.";

/// LLM provider used when LLM_PROVIDER is not set
pub const DEFAULT_LLM_PROVIDER: &str = "groq";

/// Model used when LLM_MODEL is not set
pub const DEFAULT_LLM_MODEL: &str = "llama-3.1-8b-instant";

/// Sampling temperature for completion requests
pub const LLM_TEMPERATURE: f32 = 0.7;

/// Port used when neither --port nor PORT is set
pub const DEFAULT_PORT: u16 = 5000;

/// Google Custom Search endpoint used for image lookups
pub const IMAGE_SEARCH_ENDPOINT: &str = "https://www.googleapis.com/customsearch/v1";

/// Maximum number of image URLs returned for a single chat turn
pub const MAX_IMAGE_RESULTS: usize = 2;
