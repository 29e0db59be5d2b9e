use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    // --- Server Args ---
    /// Interface the HTTP server binds to.
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port the HTTP server listens on.
    #[arg(long, env = "PORT", default_value = "3001")]
    pub port: u16,

    // --- OpenAI Provider Args ---
    /// API key for the OpenAI-compatible provider.
    #[arg(long, env = "OPENAI_API_KEY", default_value = "", hide_env_values = true)]
    pub openai_api_key: String,

    /// Base URL of the OpenAI-compatible API (without the /v1 route).
    #[arg(long, env = "OPENAI_BASE_URL", default_value = "https://api.openai.com")]
    pub openai_base_url: String,

    /// Model answering the planning conversation.
    #[arg(long, env = "CHAT_MODEL", default_value = "gpt-4-turbo")]
    pub chat_model: String,

    /// Model extracting name, age and theme from the conversation.
    #[arg(long, env = "EXTRACTION_MODEL", default_value = "gpt-3.5-turbo")]
    pub extraction_model: String,

    /// Model writing the invitation text.
    #[arg(long, env = "INVITATION_MODEL", default_value = "gpt-3.5-turbo")]
    pub invitation_model: String,

    /// Image generation model for the invitation artwork.
    #[arg(long, env = "IMAGE_MODEL", default_value = "dall-e-3")]
    pub image_model: String,

    #[arg(long, env = "IMAGE_SIZE", default_value = "1024x1024")]
    pub image_size: String,

    #[arg(long, env = "IMAGE_QUALITY", default_value = "standard")]
    pub image_quality: String,

    // --- Prompt Args ---
    /// Optional file replacing the built-in planner system prompt.
    #[arg(long, env = "SYSTEM_PROMPT_PATH")]
    pub system_prompt_path: Option<String>,

    // --- TLS Args ---
    /// Optional path to the TLS certificate file (PEM format). Requires --tls-key-path.
    #[arg(long, env = "TLS_CERT_PATH")]
    pub tls_cert_path: Option<String>,

    /// Optional path to the TLS private key file (PEM format). Requires --tls-cert-path.
    #[arg(long, env = "TLS_KEY_PATH")]
    pub tls_key_path: Option<String>,

    #[arg(long, env = "ENABLE_TLS", default_value = "false")]
    pub enable_tls: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_defaults() {
        let args = Args::parse_from([
            "party-pilot",
            "--port",
            "8080",
            "--chat-model",
            "gpt-4o",
            "--system-prompt-path",
            "prompts/custom.txt",
        ]);
        assert_eq!(args.port, 8080);
        assert_eq!(args.chat_model, "gpt-4o");
        assert_eq!(args.system_prompt_path.as_deref(), Some("prompts/custom.txt"));
        assert!(!args.enable_tls);
    }
}
