use serde::{ Serialize, Deserialize };

/// Speaker of a conversation turn, serialized in the provider's wire form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

/// One message in the conversation timeline. Immutable once created;
/// insertion order is the chat timeline.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: Role,
    pub content: String,
}

impl ChatTurn {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }
}

/// Body of `POST /chat`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

/// Body returned by `POST /chat`. The timestamp is RFC 3339.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
    pub timestamp: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_serializes_lowercase() {
        let turn = ChatTurn::new(Role::System, "be helpful");
        let json = serde_json::to_string(&turn).unwrap();
        assert_eq!(json, r#"{"role":"system","content":"be helpful"}"#);
    }

    #[test]
    fn test_chat_request_requires_string_message() {
        assert!(serde_json::from_str::<ChatRequest>(r#"{"message":"hi"}"#).is_ok());
        assert!(serde_json::from_str::<ChatRequest>(r#"{"message":42}"#).is_err());
        assert!(serde_json::from_str::<ChatRequest>(r#"{"message":null}"#).is_err());
        assert!(serde_json::from_str::<ChatRequest>(r#"{}"#).is_err());
    }
}
