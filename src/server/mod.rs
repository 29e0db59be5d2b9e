pub mod api;

use crate::agent::PartyAgent;
use crate::cli::Args;
use log::{ info, warn };
use std::error::Error;
use std::sync::Arc;

pub struct Server {
    addr: String,
    agent: Arc<PartyAgent>,
    args: Args,
}

impl Server {
    pub fn new(agent: Arc<PartyAgent>, args: Args) -> Self {
        let addr = format!("{}:{}", args.host, args.port);
        warn!("Server configured WITHOUT authentication. Endpoints are open.");
        Self { addr, agent, args }
    }

    pub async fn run(&self) -> Result<(), Box<dyn Error + Send + Sync>> {
        info!("Starting server on: {}", self.addr);
        api::start_http_server(&self.addr, self.agent.clone(), &self.args).await
    }
}
