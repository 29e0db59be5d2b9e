pub mod agent;
pub mod cli;
pub mod config;
pub mod error;
pub mod llm;
pub mod models;
pub mod party;
pub mod server;

use agent::PartyAgent;
use cli::Args;
use log::info;
use server::Server;
use std::error::Error;
use std::sync::Arc;

pub async fn run(args: Args) -> Result<(), Box<dyn Error + Send + Sync>> {
    info!("--- Core Configuration ---");
    info!("Server Address: {}:{}", args.host, args.port);
    info!("OpenAI Base URL: {}", args.openai_base_url);
    info!("Chat Model: {}", args.chat_model);
    info!("Extraction Model: {}", args.extraction_model);
    info!("Invitation Model: {}", args.invitation_model);
    info!("Image Model: {} ({}, {})", args.image_model, args.image_size, args.image_quality);
    info!(
        "System Prompt: {}",
        args.system_prompt_path.as_deref().unwrap_or("embedded")
    );
    info!("TLS Enabled: {}", args.enable_tls);
    info!("-------------------------");

    let agent = Arc::new(PartyAgent::from_args(&args)?);
    let server = Server::new(agent, args);
    server.run().await?;

    Ok(())
}
