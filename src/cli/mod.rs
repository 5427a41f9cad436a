use clap::Parser;

use crate::llm::chat::openai;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// API Key for the completion provider. Required; the process refuses to
    /// start without it.
    #[arg(long, env = "OPENAI_API_KEY")]
    pub openai_api_key: String,

    /// Model name for chat completion (e.g., gpt-3.5-turbo, gpt-4o)
    #[arg(long, env = "CHAT_MODEL", default_value = openai::DEFAULT_MODEL)]
    pub chat_model: String,

    /// Base URL for the completion provider API
    #[arg(long, env = "CHAT_BASE_URL", default_value = openai::DEFAULT_BASE_URL)]
    pub chat_base_url: String,

    /// Host address and port for the server to listen on.
    #[arg(long, env = "SERVER_ADDR", default_value = "0.0.0.0:8000")]
    pub server_addr: String,

    /// Maximum number of conversation turns kept in memory. 0 keeps the full
    /// history for the life of the process.
    #[arg(long, env = "HISTORY_LIMIT", default_value = "0")]
    pub history_limit: usize,

    /// Allowed CORS origins (repeatable, or comma-separated via env). When
    /// none are given, every origin is accepted with credentials allowed.
    #[arg(long = "cors-origin", env = "CORS_ORIGINS", value_delimiter = ',')]
    pub cors_origins: Vec<String>,
}
