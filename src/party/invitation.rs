use log::info;

use super::extraction::extract_facts;
use crate::config::prompt::{ get_invitation_prompt, INVITATION_SYSTEM_PROMPT };
use crate::error::InvitationError;
use crate::llm::chat::{ ChatClient, CompletionRequest };
use crate::llm::image::{ ImageClient, ImageRequest };
use crate::llm::ProviderError;
use crate::models::chat::ChatMessage;
use crate::models::invitation::{ ExtractedFacts, InvitationResult };

pub const INVITATION_MAX_TOKENS: u32 = 200;
pub const INVITATION_TEMPERATURE: f32 = 0.7;

const TRAVEL_STYLE: &str =
    "Include vintage maps, a compass, and travel elements with warm earthy tones. No text.";
const NATURE_STYLE: &str =
    "Include natural elements like trees, flowers, and outdoor scenery with soft green and blue tones. No text.";
const FESTIVE_STYLE: &str =
    "The design should be festive and celebratory with balloons, confetti, and decorative elements. No text.";

/// Models and image settings for one invitation run.
#[derive(Debug, Clone)]
pub struct InvitationSettings {
    pub extraction_model: String,
    pub invitation_model: String,
    pub image_model: String,
    pub image_size: String,
    pub image_quality: String,
}

impl Default for InvitationSettings {
    fn default() -> Self {
        Self {
            extraction_model: "gpt-3.5-turbo".to_string(),
            invitation_model: "gpt-3.5-turbo".to_string(),
            image_model: "dall-e-3".to_string(),
            image_size: "1024x1024".to_string(),
            image_quality: "standard".to_string(),
        }
    }
}

fn age_clause(facts: &ExtractedFacts) -> String {
    match facts.age.as_deref() {
        Some(age) => format!("{}th ", age),
        None => String::new(),
    }
}

pub fn build_invitation_prompt(facts: &ExtractedFacts) -> String {
    let theme = if facts.has_theme() { facts.theme.as_str() } else { "a general birthday" };
    get_invitation_prompt(&facts.name, &age_clause(facts), theme)
}

fn theme_style(theme: &str) -> &'static str {
    match theme {
        "travel" | "adventure" => TRAVEL_STYLE,
        "nature" => NATURE_STYLE,
        _ => FESTIVE_STYLE,
    }
}

pub fn build_image_prompt(facts: &ExtractedFacts) -> String {
    let theme = if facts.has_theme() { facts.theme.as_str() } else { "general birthday" };
    format!(
        "Create a beautiful digital birthday invitation for {}'s {}birthday with a {} theme. {}",
        facts.name,
        age_clause(facts),
        theme,
        theme_style(&facts.theme)
    )
}

pub async fn compose_invitation(
    chat_client: &dyn ChatClient,
    image_client: &dyn ImageClient,
    settings: &InvitationSettings,
    facts: &ExtractedFacts
) -> Result<InvitationResult, InvitationError> {
    let request = CompletionRequest {
        model: settings.invitation_model.clone(),
        messages: vec![
            ChatMessage::system(INVITATION_SYSTEM_PROMPT),
            ChatMessage::user(build_invitation_prompt(facts))
        ],
        max_tokens: INVITATION_MAX_TOKENS,
        temperature: INVITATION_TEMPERATURE,
    };
    let invitation_text = chat_client.complete(&request).await?.response.trim().to_string();

    let dalle_prompt = build_image_prompt(facts);
    let image_request = ImageRequest {
        model: settings.image_model.clone(),
        prompt: dalle_prompt.clone(),
        count: 1,
        size: settings.image_size.clone(),
        quality: settings.image_quality.clone(),
    };
    let invitation_image_url = image_client
        .generate_image(&image_request).await?
        .into_iter()
        .next()
        .ok_or(ProviderError::Empty)?;
    info!("Generated invitation image for {}", facts.name);

    Ok(InvitationResult {
        invitation_text,
        invitation_image_url,
        dalle_prompt,
    })
}

pub async fn generate_invitation(
    chat_client: &dyn ChatClient,
    image_client: &dyn ImageClient,
    settings: &InvitationSettings,
    conversation: &[ChatMessage]
) -> Result<InvitationResult, InvitationError> {
    let facts = extract_facts(chat_client, &settings.extraction_model, conversation).await?;
    compose_invitation(chat_client, image_client, settings, &facts).await
}
