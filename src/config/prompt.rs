use std::error::Error;
use std::fmt;
use std::fs;
use std::path::{ Path, PathBuf };
use std::sync::Arc;
use log::info;

use crate::models::chat::ChatMessage;

const EMBEDDED_SYSTEM_PROMPT: &str = include_str!("../../prompts/system_prompt.txt");

pub const EXTRACTION_SYSTEM_PROMPT: &str =
    "You are an expert at extracting information from conversations.";

pub const INVITATION_SYSTEM_PROMPT: &str = "You are an expert invitation writer.";

const EXTRACTION_TEMPLATE: &str =
    r#"From the following conversation, extract the birthday person's name, age (if mentioned), and the party theme (if mentioned).
If the theme isn't explicitly stated, infer it from the context or respond with "None" if it cannot be determined.

Conversation:
{transcript}

Respond with a JSON object in the following format:
{
  "name": "Extracted Name",
  "age": "Extracted Age or null",
  "theme": "Extracted Theme or 'None'"
}"#;

#[derive(Debug)]
pub enum PromptError {
    Empty(String),
    IoError(std::io::Error),
}

impl fmt::Display for PromptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PromptError::Empty(path) => write!(f, "Prompt file '{}' is empty", path),
            PromptError::IoError(e) => write!(f, "Prompt file IO error: {}", e),
        }
    }
}

impl Error for PromptError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            PromptError::IoError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for PromptError {
    fn from(err: std::io::Error) -> Self {
        PromptError::IoError(err)
    }
}

/// The planner persona sent ahead of every chat conversation.
#[derive(Debug, Clone)]
pub struct PromptConfig {
    pub system_prompt: String,
    pub source: Option<PathBuf>,
}

impl Default for PromptConfig {
    fn default() -> Self {
        Self {
            system_prompt: EMBEDDED_SYSTEM_PROMPT.trim().to_string(),
            source: None,
        }
    }
}

pub fn load_prompts<P: AsRef<Path>>(path: P) -> Result<Arc<PromptConfig>, PromptError> {
    let path = path.as_ref();
    let system_prompt = fs::read_to_string(path)?.trim().to_string();
    if system_prompt.is_empty() {
        return Err(PromptError::Empty(path.display().to_string()));
    }
    info!("Loaded system prompt from {} ({} bytes)", path.display(), system_prompt.len());
    Ok(
        Arc::new(PromptConfig {
            system_prompt,
            source: Some(path.to_path_buf()),
        })
    )
}

pub fn load_or_default(path: Option<&str>) -> Result<Arc<PromptConfig>, PromptError> {
    match path {
        Some(p) if !p.trim().is_empty() => load_prompts(p),
        _ => {
            info!("Using embedded system prompt");
            Ok(Arc::new(PromptConfig::default()))
        }
    }
}

/// One `role: content` line per message.
pub fn render_transcript(conversation: &[ChatMessage]) -> String {
    conversation
        .iter()
        .map(|msg| format!("{}: {}", msg.role, msg.content))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn get_extraction_prompt(conversation: &[ChatMessage]) -> String {
    EXTRACTION_TEMPLATE.replace("{transcript}", &render_transcript(conversation))
}

// Filled in one pass: the values are model output and may contain braces.
pub fn get_invitation_prompt(name: &str, age_clause: &str, theme: &str) -> String {
    format!(
        "Based on our conversation, create a beautiful birthday invitation text for {}'s {}birthday.
The theme is: {}.
Make it warm, inviting, and concise (about 3-4 lines max).
Include placeholders like [DATE], [TIME], and [LOCATION] for the event details.",
        name,
        age_clause,
        theme
    )
}
