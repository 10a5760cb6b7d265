use crate::chat::extract_image_marker;
use crate::constants::ASSISTANT_SYSTEM_PROMPT;
use crate::errors::Error;
use crate::llm::{ChatMessage, LlmClient};
use crate::search::ImageSearchClient;
use tracing::{debug, info};

/// Result of one completed chat turn.
#[derive(Debug)]
pub struct ChatReply {
    /// Generated text with the image tag removed
    pub response: String,
    /// Resolved image URLs, at most two
    pub image_urls: Vec<String>,
    /// Assistant message to append to the caller's history. Keeps the raw
    /// tag text so a replayed history resends it to the model unchanged.
    pub assistant_message: ChatMessage,
}

/// Coordinates the completion provider and the image search client for a
/// single chat turn.
#[derive(Debug)]
pub struct ChatOrchestrator {
    llm_client: LlmClient,
    search_client: ImageSearchClient,
}

impl ChatOrchestrator {
    /// Creates a new orchestrator around already-constructed clients.
    pub fn new(llm_client: LlmClient, search_client: ImageSearchClient) -> Self {
        ChatOrchestrator {
            llm_client,
            search_client,
        }
    }

    /// Runs one chat turn.
    ///
    /// Invokes the completion provider with the assembled message list,
    /// scans the reply for an image tag and, if one is present, resolves
    /// it through the image search client. A completion failure fails the
    /// whole turn; an image search failure only empties `image_urls`.
    ///
    /// # Arguments
    /// * `message` - The new user-authored message
    /// * `history` - Prior turns replayed by the caller, oldest first
    ///
    /// # Returns
    /// * `Result<ChatReply, Error>` - Completed turn or completion error
    pub async fn handle_chat(
        &self,
        message: &str,
        history: &[ChatMessage],
    ) -> Result<ChatReply, Error> {
        let messages = build_messages(message, history);
        let raw_response = self.llm_client.call_llm_api(messages).await?;

        let (response, query) = extract_image_marker(&raw_response);
        let image_urls = match &query {
            Some(query) => {
                info!("Detected image request for: {}", query);
                self.search_client.search_images(query).await
            }
            None => Vec::new(),
        };

        Ok(ChatReply {
            response,
            image_urls,
            assistant_message: ChatMessage::new("assistant", &raw_response),
        })
    }
}

/// Assembles the outbound message list: the fixed system instruction,
/// the replayed history mapped role-for-role, then the new user message.
/// History entries with a role other than "user" or "assistant" are
/// dropped.
fn build_messages(message: &str, history: &[ChatMessage]) -> Vec<ChatMessage> {
    let mut messages = Vec::with_capacity(history.len() + 2);
    messages.push(ChatMessage::new("system", ASSISTANT_SYSTEM_PROMPT));

    for entry in history {
        match entry.role.as_str() {
            "user" | "assistant" => messages.push(ChatMessage::new(&entry.role, &entry.content)),
            other => debug!("Dropping history entry with unrecognized role '{}'", other),
        }
    }

    messages.push(ChatMessage::new("user", message));
    messages
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::LlmProvider;
    use async_trait::async_trait;

    /// Provider stub returning a canned reply, or an error when `reply`
    /// is `None`.
    #[derive(Debug)]
    struct CannedProvider {
        reply: Option<String>,
    }

    #[async_trait]
    impl LlmProvider for CannedProvider {
        async fn call_llm_api(&self, _messages: Vec<ChatMessage>) -> Result<String, Error> {
            match &self.reply {
                Some(reply) => Ok(reply.clone()),
                None => Err(Error::Completion("provider unavailable".to_string())),
            }
        }
    }

    fn orchestrator_with_reply(reply: Option<&str>) -> ChatOrchestrator {
        let llm_client = LlmClient::with_provider(Box::new(CannedProvider {
            reply: reply.map(String::from),
        }));
        // No credentials: image lookups short-circuit to empty without
        // touching the network.
        ChatOrchestrator::new(llm_client, ImageSearchClient::new(None, None))
    }

    #[test]
    fn builds_messages_in_turn_order() {
        let history = vec![
            ChatMessage::new("user", "hi"),
            ChatMessage::new("assistant", "hello"),
        ];
        let messages = build_messages("how are you?", &history);

        assert_eq!(messages.len(), 4);
        assert_eq!(messages[0].role, "system");
        assert_eq!(messages[0].content, ASSISTANT_SYSTEM_PROMPT);
        assert_eq!(messages[1].role, "user");
        assert_eq!(messages[1].content, "hi");
        assert_eq!(messages[2].role, "assistant");
        assert_eq!(messages[2].content, "hello");
        assert_eq!(messages[3].role, "user");
        assert_eq!(messages[3].content, "how are you?");
    }

    #[test]
    fn drops_history_entries_with_unknown_roles() {
        let history = vec![
            ChatMessage::new("system", "injected"),
            ChatMessage::new("user", "hi"),
            ChatMessage::new("tool", "output"),
        ];
        let messages = build_messages("next", &history);

        assert_eq!(messages.len(), 3);
        assert_eq!(messages[1].role, "user");
        assert_eq!(messages[1].content, "hi");
    }

    #[tokio::test]
    async fn plain_reply_passes_through_unchanged() {
        let orchestrator = orchestrator_with_reply(Some("Just words."));
        let reply = orchestrator.handle_chat("hello", &[]).await.unwrap();

        assert_eq!(reply.response, "Just words.");
        assert!(reply.image_urls.is_empty());
        assert_eq!(reply.assistant_message.role, "assistant");
        assert_eq!(reply.assistant_message.content, "Just words.");
    }

    #[tokio::test]
    async fn tagged_reply_is_stripped_but_history_keeps_the_tag() {
        let orchestrator = orchestrator_with_reply(Some("Here is a cat. [IMAGE: cat]"));
        let reply = orchestrator.handle_chat("show me a cat", &[]).await.unwrap();

        assert_eq!(reply.response, "Here is a cat.");
        assert_eq!(reply.assistant_message.content, "Here is a cat. [IMAGE: cat]");
        // Search credentials are unset, so the lookup degrades to empty.
        assert!(reply.image_urls.is_empty());
    }

    #[tokio::test]
    async fn completion_failure_fails_the_turn() {
        let orchestrator = orchestrator_with_reply(None);
        let result = orchestrator.handle_chat("hello", &[]).await;

        assert!(matches!(result, Err(Error::Completion(_))));
    }
}
