pub mod openai;

use async_trait::async_trait;
use serde::Deserialize;
use std::error::Error as StdError;
use std::sync::Arc;

use self::openai::OpenAiChatClient;
use super::LlmConfig;
use crate::models::chat::ChatTurn;

#[derive(Deserialize, Debug, Clone)]
pub struct CompletionResponse {
    pub response: String,
}

/// A chat-completion provider.
///
/// `turns` is the full prompt: one system turn followed by the bounded
/// window of conversation history, newest last.
#[async_trait]
pub trait ChatClient: Send + Sync {
    async fn complete(
        &self,
        turns: &[ChatTurn],
    ) -> Result<CompletionResponse, Box<dyn StdError + Send + Sync>>;
}

pub fn new_client(
    config: &LlmConfig,
) -> Result<Arc<dyn ChatClient>, Box<dyn StdError + Send + Sync>> {
    let client = OpenAiChatClient::from_config(config)?;
    Ok(Arc::new(client))
}
