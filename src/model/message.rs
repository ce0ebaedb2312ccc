use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::agent::contract::AgentPayload;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    User,
    Assistant,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ChatMessage {
    #[schema(example = "1b4e28ba-2fa1-11d2-883f-0016d3cca427")]
    pub id: String,
    pub role: MessageRole,
    #[schema(example = "Here are the pending leave requests.")]
    pub content: String,
    #[schema(example = "2024-01-15T09:30:00Z", format = "date-time", value_type = String)]
    pub timestamp: DateTime<Utc>,
    /// Structured agent payload kept verbatim for widget rendering
    #[schema(value_type = Option<Object>)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parsed_data: Option<AgentPayload>,
}

impl ChatMessage {
    fn new(role: MessageRole, content: impl Into<String>, parsed_data: Option<AgentPayload>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            role,
            content: content.into(),
            timestamp: Utc::now(),
            parsed_data,
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(MessageRole::User, content, None)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(MessageRole::Assistant, content, None)
    }

    pub fn assistant_with_data(content: impl Into<String>, parsed_data: Option<AgentPayload>) -> Self {
        Self::new(MessageRole::Assistant, content, parsed_data)
    }
}
