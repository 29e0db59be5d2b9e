use log::{ error, info, warn };

use crate::config::prompt::{ get_extraction_prompt, EXTRACTION_SYSTEM_PROMPT };
use crate::error::InvitationError;
use crate::llm::chat::{ ChatClient, CompletionRequest };
use crate::models::chat::ChatMessage;
use crate::models::invitation::ExtractedFacts;

pub const EXTRACTION_MAX_TOKENS: u32 = 200;
pub const EXTRACTION_TEMPERATURE: f32 = 0.5;

fn strip_code_fences(raw: &str) -> String {
    raw.replace("```json", "").replace("```", "").trim().to_string()
}

/// Greedy match from the first `{` to the last `}`.
fn outermost_braces(raw: &str) -> Option<&str> {
    let start = raw.find('{')?;
    let end = raw.rfind('}')?;
    (end > start).then(|| &raw[start..=end])
}

fn validate(facts: ExtractedFacts) -> Result<ExtractedFacts, InvitationError> {
    if facts.name.trim().is_empty() {
        return Err(InvitationError::Extraction("extracted name is empty".into()));
    }
    Ok(facts)
}

/// Coerces a model reply into [`ExtractedFacts`]: fence-stripped strict parse
/// first, then the outermost brace span of the raw text.
pub fn parse_extracted_facts(raw: &str) -> Result<ExtractedFacts, InvitationError> {
    let first_err = match serde_json::from_str::<ExtractedFacts>(&strip_code_fences(raw)) {
        Ok(facts) => {
            return validate(facts);
        }
        Err(e) => e,
    };
    warn!("Error parsing extraction response, trying brace match: {}", first_err);

    let candidate = outermost_braces(raw).ok_or_else(|| {
        error!("No JSON object found in extraction response");
        InvitationError::Extraction("could not extract JSON data".into())
    })?;
    let facts = serde_json::from_str::<ExtractedFacts>(candidate).map_err(|e| {
        error!("Second parsing attempt failed: {}", e);
        InvitationError::Extraction(e.to_string())
    })?;
    validate(facts)
}

pub async fn extract_facts(
    client: &dyn ChatClient,
    model: &str,
    conversation: &[ChatMessage]
) -> Result<ExtractedFacts, InvitationError> {
    let request = CompletionRequest {
        model: model.to_string(),
        messages: vec![
            ChatMessage::system(EXTRACTION_SYSTEM_PROMPT),
            ChatMessage::user(get_extraction_prompt(conversation))
        ],
        max_tokens: EXTRACTION_MAX_TOKENS,
        temperature: EXTRACTION_TEMPERATURE,
    };
    let reply = client.complete(&request).await?;
    let facts = parse_extracted_facts(&reply.response)?;
    info!(
        "Extracted facts: name={}, age={}, theme={}",
        facts.name,
        facts.age.as_deref().unwrap_or("null"),
        facts.theme
    );
    Ok(facts)
}
