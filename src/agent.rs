use std::sync::Arc;

use log::{debug, error};
use thiserror::Error;

use crate::history::ConversationLog;
use crate::llm::chat::ChatClient;
use crate::models::chat::{ChatTurn, Role};

/// Persona instruction prepended to every provider prompt.
pub const SYSTEM_INSTRUCTION: &str = "You are a helpful customer service representative for an e-commerce website. \
Your goal is to assist customers with their queries about products, orders, shipping, and returns. \
Be professional, friendly, and concise in your responses. If you don't know something, admit it and \
offer to connect the customer with a human representative.";

/// How many stored turns travel with each provider call.
pub const PROMPT_WINDOW: usize = 5;

/// Single coarse failure kind; the endpoint layer does not distinguish
/// causes beyond the carried detail text.
#[derive(Debug, Error)]
pub enum AgentError {
    #[error("{0}")]
    Completion(String),
}

/// Orchestrates one user message into one assistant reply, maintaining the
/// shared short-term context.
pub struct CareBot {
    chat_client: Arc<dyn ChatClient>,
    log: ConversationLog,
}

impl CareBot {
    pub fn new(chat_client: Arc<dyn ChatClient>, log: ConversationLog) -> Self {
        Self { chat_client, log }
    }

    /// Records the user turn, calls the provider with the bounded-context
    /// prompt, records the reply, and returns it.
    ///
    /// The user turn stays in the log even when the provider call fails, so
    /// a later successful call still carries it as context.
    pub async fn process_message(&self, message: &str) -> Result<String, AgentError> {
        self.log.append(ChatTurn::new(Role::User, message)).await;

        let prompt = self.build_prompt().await;
        debug!("Prompt built with {} turns", prompt.len());

        let completion = self.chat_client.complete(&prompt).await.map_err(|e| {
            error!("Completion provider call failed: {}", e);
            AgentError::Completion(e.to_string())
        })?;

        self.log
            .append(ChatTurn::new(Role::Assistant, completion.response.clone()))
            .await;

        Ok(completion.response)
    }

    /// One system turn followed by the last `min(PROMPT_WINDOW, len)` stored
    /// turns, oldest first.
    async fn build_prompt(&self) -> Vec<ChatTurn> {
        let mut prompt = vec![ChatTurn::new(Role::System, SYSTEM_INSTRUCTION)];
        prompt.extend(self.log.window(PROMPT_WINDOW).await);
        prompt
    }

    pub async fn clear_history(&self) {
        self.log.clear().await;
    }

    pub async fn history_len(&self) -> usize {
        self.log.len().await
    }

    pub async fn history(&self) -> Vec<ChatTurn> {
        self.log.window(usize::MAX).await
    }
}
