use async_trait::async_trait;
use derive_more::Display;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, instrument};

use super::contract::{AgentRequest, AgentResponse};
use crate::config::Config;

#[derive(Debug, Display)]
pub enum AgentError {
    #[display(fmt = "agent request failed: {}", _0)]
    Transport(reqwest::Error),
    #[display(fmt = "agent reply is not valid JSON: {}", _0)]
    Decode(reqwest::Error),
    #[display(fmt = "agent reply was JSON null")]
    EmptyBody,
}

impl std::error::Error for AgentError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AgentError::Transport(e) | AgentError::Decode(e) => Some(e),
            AgentError::EmptyBody => None,
        }
    }
}

/// Sends one user message to the external agent and returns its reply.
#[async_trait]
pub trait AgentClient: Send + Sync {
    async fn send(&self, request: &AgentRequest) -> Result<AgentResponse, AgentError>;
}

pub struct HttpAgentClient {
    http: reqwest::Client,
    endpoint: String,
    api_key: Option<String>,
}

impl HttpAgentClient {
    pub fn new(endpoint: impl Into<String>, api_key: Option<String>, timeout: Option<Duration>) -> anyhow::Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http: builder.build()?,
            endpoint: endpoint.into(),
            api_key,
        })
    }

    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        Self::new(
            config.agent_endpoint.clone(),
            config.agent_api_key.clone(),
            config.agent_timeout_secs.map(Duration::from_secs),
        )
    }
}

#[async_trait]
impl AgentClient for HttpAgentClient {
    #[instrument(name = "agent_send", skip(self, request), fields(agent_id = %request.agent_id))]
    async fn send(&self, request: &AgentRequest) -> Result<AgentResponse, AgentError> {
        let mut call = self.http.post(&self.endpoint).json(request);
        if let Some(key) = &self.api_key {
            call = call.bearer_auth(key);
        }

        let reply = call.send().await.map_err(AgentError::Transport)?;
        // The status is not inspected: any JSON body counts as a reply.
        debug!(status = %reply.status(), "Agent replied");

        let body = reply.json::<Value>().await.map_err(AgentError::Decode)?;
        AgentResponse::from_json(body).ok_or(AgentError::EmptyBody)
    }
}
