use log::{ info, warn };
use std::error::Error;
use std::sync::Arc;

use crate::cli::Args;
use crate::config::prompt::{ self, PromptConfig };
use crate::error::{ ChatError, InvitationError };
use crate::llm::chat::{ ChatClient, new_client as new_chat_client };
use crate::llm::image::{ ImageClient, new_client as new_image_client };
use crate::llm::LlmConfig;
use crate::models::chat::{ ChatMessage, ChatResult };
use crate::models::invitation::InvitationResult;
use crate::party::invitation::{ self, InvitationSettings };
use crate::party::responder;

/// Stateless front for both request kinds. Clients are shared handles and
/// nothing is mutated per request.
#[derive(Clone)]
pub struct PartyAgent {
    chat_client: Arc<dyn ChatClient>,
    image_client: Arc<dyn ImageClient>,
    prompt_config: Arc<PromptConfig>,
    chat_model: String,
    invitation_settings: InvitationSettings,
}

impl PartyAgent {
    pub fn new(
        chat_client: Arc<dyn ChatClient>,
        image_client: Arc<dyn ImageClient>,
        prompt_config: Arc<PromptConfig>,
        chat_model: String,
        invitation_settings: InvitationSettings
    ) -> Self {
        Self {
            chat_client,
            image_client,
            prompt_config,
            chat_model,
            invitation_settings,
        }
    }

    fn initialize_llm_clients(
        args: &Args
    ) -> Result<(Arc<dyn ChatClient>, Arc<dyn ImageClient>), Box<dyn Error + Send + Sync>> {
        let api_key = if !args.openai_api_key.is_empty() {
            Some(args.openai_api_key.clone())
        } else {
            warn!("OPENAI_API_KEY is not set. Provider calls will be rejected.");
            None
        };
        let config = LlmConfig {
            api_key,
            base_url: Some(args.openai_base_url.clone()),
        };
        let chat_client = new_chat_client(&config)?;
        let image_client = new_image_client(&config)?;
        info!(
            "OpenAI clients configured: BaseURL={}, ChatModel={}, ImageModel={}",
            args.openai_base_url,
            args.chat_model,
            args.image_model
        );
        Ok((chat_client, image_client))
    }

    pub fn from_args(args: &Args) -> Result<Self, Box<dyn Error + Send + Sync>> {
        let (chat_client, image_client) = Self::initialize_llm_clients(args)?;
        let prompt_config = prompt::load_or_default(args.system_prompt_path.as_deref())?;
        let invitation_settings = InvitationSettings {
            extraction_model: args.extraction_model.clone(),
            invitation_model: args.invitation_model.clone(),
            image_model: args.image_model.clone(),
            image_size: args.image_size.clone(),
            image_quality: args.image_quality.clone(),
        };

        Ok(
            Self::new(
                chat_client,
                image_client,
                prompt_config,
                args.chat_model.clone(),
                invitation_settings
            )
        )
    }

    pub async fn chat(&self, conversation: &[ChatMessage]) -> Result<ChatResult, ChatError> {
        responder::respond(
            self.chat_client.as_ref(),
            &self.chat_model,
            &self.prompt_config.system_prompt,
            conversation
        ).await
    }

    pub async fn generate_invitation(
        &self,
        conversation: &[ChatMessage]
    ) -> Result<InvitationResult, InvitationError> {
        invitation::generate_invitation(
            self.chat_client.as_ref(),
            self.image_client.as_ref(),
            &self.invitation_settings,
            conversation
        ).await
    }
}
