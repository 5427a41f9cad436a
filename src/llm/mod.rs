pub mod chat;

/// Connection settings for the completion provider.
#[derive(Debug, Clone)]
pub struct LlmConfig {
    pub api_key: String,
    pub completion_model: String,
    pub base_url: String,
}
