//! Wire shapes exchanged with the external agent service.
//!
//! The agent is opaque. Its reply is read field by field: a field of the wrong
//! type only loses that field, and `response` is kept as the exact JSON
//! received so it can be handed back to clients untouched.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

/// Text shown when the agent answered without any usable text.
pub const PROCESSING_PLACEHOLDER: &str = "Processing your request...";

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AgentRequest {
    #[schema(example = "Show all pending leave requests")]
    pub message: String,
    #[schema(example = "6926c30fe758b644132e0744")]
    pub agent_id: String,
}

#[derive(Debug, Clone, Default)]
pub struct AgentResponse {
    pub success: bool,
    pub raw_response: Option<String>,
    pub response: Option<AgentPayload>,
}

/// The agent's `response` object, verbatim.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AgentPayload(Value);

/// Truthiness as the agent's web clients judge it.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Text of a field; non-string scalars are shown as their JSON text.
fn text_of(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

impl AgentResponse {
    /// Reads a decoded JSON body. `null` carries no reply at all and yields
    /// `None`; any other body is read leniently.
    pub fn from_json(body: Value) -> Option<Self> {
        if body.is_null() {
            return None;
        }

        let field = |name: &str| body.get(name).filter(|v| !v.is_null());

        Some(Self {
            success: field("success").is_some_and(is_truthy),
            raw_response: field("raw_response").and_then(text_of),
            response: field("response").cloned().map(AgentPayload),
        })
    }

    /// Text of the assistant reply.
    pub fn reply_text(&self) -> String {
        self.raw_response
            .clone()
            .or_else(|| self.response.as_ref().and_then(AgentPayload::result))
            .unwrap_or_else(|| PROCESSING_PLACEHOLDER.to_string())
    }

    /// Payload kept for rendering, only when the agent reported success.
    pub fn into_parsed_data(self) -> Option<AgentPayload> {
        if !self.success {
            return None;
        }
        self.response.filter(|p| is_truthy(&p.0))
    }
}

impl From<Value> for AgentPayload {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

impl AgentPayload {
    pub fn result(&self) -> Option<String> {
        self.0.get("result").and_then(text_of)
    }

    pub fn query_type(&self) -> Option<&str> {
        self.0.get("query_type").and_then(Value::as_str)
    }

    pub fn formatted_type(&self) -> Option<&str> {
        self.0.pointer("/formatted_data/type").and_then(Value::as_str)
    }

    /// Suggestions that are strings; anything else in the list is skipped.
    pub fn follow_up_suggestions(&self) -> Vec<String> {
        self.0
            .get("follow_up_suggestions")
            .and_then(Value::as_array)
            .map(|items| items.iter().filter_map(Value::as_str).map(str::to_string).collect())
            .unwrap_or_default()
    }
}
