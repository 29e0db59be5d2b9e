use log::{ debug, info };
use serde_json::Value as JsonValue;

use crate::error::ChatError;
use crate::llm::chat::{ ChatClient, CompletionRequest };
use crate::models::chat::{ ChatMessage, ChatResult };

pub const CHAT_MAX_TOKENS: u32 = 2000;
pub const CHAT_TEMPERATURE: f32 = 0.7;

pub fn looks_like_json(text: &str) -> bool {
    let trimmed = text.trim();
    trimmed.starts_with('{') && trimmed.ends_with('}')
}

/// Parsed JSON when the reply looks like an object and parses, otherwise the
/// raw reply wrapped as `{ "response": ... }`.
pub fn shape_chat_result(text: String) -> ChatResult {
    if looks_like_json(&text) {
        match serde_json::from_str::<JsonValue>(&text) {
            Ok(value) => {
                return ChatResult::Structured(value);
            }
            Err(e) => debug!("Chat reply looked like JSON but did not parse: {}", e),
        }
    }
    ChatResult::Text { response: text }
}

pub fn build_chat_messages(system_prompt: &str, conversation: &[ChatMessage]) -> Vec<ChatMessage> {
    let mut messages = Vec::with_capacity(conversation.len() + 1);
    messages.push(ChatMessage::system(system_prompt));
    messages.extend_from_slice(conversation);
    messages
}

pub async fn respond(
    client: &dyn ChatClient,
    model: &str,
    system_prompt: &str,
    conversation: &[ChatMessage]
) -> Result<ChatResult, ChatError> {
    let messages = build_chat_messages(system_prompt, conversation);
    info!("Sending chat request with {} messages", messages.len());

    let request = CompletionRequest {
        model: model.to_string(),
        messages,
        max_tokens: CHAT_MAX_TOKENS,
        temperature: CHAT_TEMPERATURE,
    };
    let reply = client.complete(&request).await?;
    Ok(shape_chat_result(reply.response))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::testing::ScriptedChatClient;
    use crate::llm::ProviderError;
    use crate::models::chat::Role;
    use serde_json::json;

    #[test]
    fn looks_like_json_checks_trimmed_braces() {
        assert!(looks_like_json("{}"));
        assert!(looks_like_json("  \n{\"a\": 1}\n "));
        assert!(!looks_like_json("Sure! {\"a\": 1}"));
        assert!(!looks_like_json("[1, 2]"));
        assert!(!looks_like_json("{\"a\": 1} thanks"));
        assert!(!looks_like_json(""));
    }

    #[test]
    fn valid_object_is_returned_verbatim() {
        let result = shape_chat_result("{\"plans\": [{\"title\": \"Jungle\"}]}".into());
        assert_eq!(result, ChatResult::Structured(json!({"plans": [{"title": "Jungle"}]})));
    }

    #[test]
    fn padded_object_is_parsed() {
        let result = shape_chat_result("  {\"a\":1}\n".into());
        assert_eq!(result, ChatResult::Structured(json!({"a": 1})));
    }

    #[test]
    fn brace_wrapped_garbage_downgrades_to_text() {
        let raw = "{ Here are three ideas for Leo }".to_string();
        assert_eq!(shape_chat_result(raw.clone()), ChatResult::Text { response: raw });
    }

    #[test]
    fn plain_text_is_wrapped_untrimmed() {
        let raw = "  Are you in a rush?\n".to_string();
        let result = shape_chat_result(raw.clone());
        assert_eq!(serde_json::to_value(&result).unwrap(), json!({ "response": raw }));
    }

    #[tokio::test]
    async fn system_prompt_is_prepended_and_order_kept() {
        let client = ScriptedChatClient::new(["Hello there"]);
        let conversation = vec![
            ChatMessage::user("first"),
            ChatMessage::new(Role::Assistant, "second"),
            ChatMessage::user("third")
        ];

        let result = respond(&client, "gpt-4-turbo", "PERSONA", &conversation).await.unwrap();
        assert_eq!(result, ChatResult::Text { response: "Hello there".into() });

        let requests = client.requests();
        assert_eq!(requests.len(), 1);
        let sent = &requests[0];
        assert_eq!(sent.model, "gpt-4-turbo");
        assert_eq!(sent.max_tokens, 2000);
        assert_eq!(sent.temperature, 0.7);
        assert_eq!(sent.messages[0], ChatMessage::system("PERSONA"));
        assert_eq!(&sent.messages[1..], conversation.as_slice());
    }

    #[tokio::test]
    async fn provider_failure_propagates() {
        let client = ScriptedChatClient::default();
        client.push(Err(ProviderError::Status { status: 401, body: "bad key".into() }));

        let err = respond(&client, "gpt-4-turbo", "PERSONA", &[ChatMessage::user("hi")]).await.unwrap_err();
        assert!(matches!(err, ChatError::Provider(ProviderError::Status { status: 401, .. })));
        assert_eq!(client.requests().len(), 1);
    }
}
