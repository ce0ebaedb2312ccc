pub mod client;
pub mod contract;

pub use client::{AgentClient, AgentError, HttpAgentClient};
