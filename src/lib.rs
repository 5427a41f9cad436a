pub mod agent;
pub mod cli;
pub mod history;
pub mod llm;
pub mod models;
pub mod server;

use agent::CareBot;
use cli::Args;
use history::ConversationLog;
use llm::chat::new_client;
use llm::LlmConfig;
use log::info;
use server::Server;
use std::error::Error;
use std::sync::Arc;

pub async fn run(args: Args) -> Result<(), Box<dyn Error + Send + Sync>> {
    info!("--- Core Configuration ---");
    info!("Server Address: {}", args.server_addr);
    info!("Chat Model: {}", args.chat_model);
    info!("Chat Base URL: {}", args.chat_base_url);
    if args.history_limit == 0 {
        info!("Stored History Limit: unbounded");
    } else {
        info!("Stored History Limit: {}", args.history_limit);
    }
    if args.cors_origins.is_empty() {
        info!("CORS: permissive (any origin)");
    } else {
        info!("CORS Origins: {}", args.cors_origins.join(", "));
    }
    info!("-------------------------");

    let config = LlmConfig {
        api_key: args.openai_api_key.clone(),
        completion_model: args.chat_model.clone(),
        base_url: args.chat_base_url.clone(),
    };
    let chat_client = new_client(&config)?;
    let log = ConversationLog::new(args.history_limit);
    let bot = Arc::new(CareBot::new(chat_client, log));

    let addr = args.server_addr.clone();
    info!("Starting server on: {}", addr);
    let server = Server::new(addr, bot, args);
    server.run().await?;

    Ok(())
}
