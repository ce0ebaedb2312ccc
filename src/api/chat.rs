use actix_web::{HttpResponse, Responder, web};
use serde::Deserialize;
use tracing::{info, instrument};
use utoipa::ToSchema;

use crate::agent::{AgentClient, contract::AgentRequest};
use crate::config::Config;
use crate::error::AppResult;
use crate::render::RenderedMessage;
use crate::session::{PendingChat, SessionStore};

#[derive(Deserialize, ToSchema)]
pub struct ChatInput {
    #[schema(example = "Show all pending leave requests")]
    pub message: String,
}

/* =========================
Relay a message to the agent
========================= */
#[utoipa::path(
    post,
    path = "/api/sessions/{session_id}/chat",
    params(
        ("session_id" = String, Path, description = "Session ID")
    ),
    request_body = ChatInput,
    responses(
        (status = 200, description = "Assistant reply with its widget", body = RenderedMessage),
        (status = 400, description = "Empty message", body = Object, example = json!({
            "message": "Message must not be empty"
        })),
        (status = 404, description = "Session not found"),
        (status = 409, description = "Another message is still being processed")
    ),
    tag = "Chat"
)]
#[instrument(name = "chat_send", skip_all, fields(session_id = %path.as_str()))]
pub async fn send_message(
    path: web::Path<String>,
    store: web::Data<SessionStore>,
    config: web::Data<Config>,
    agent: web::Data<dyn AgentClient>,
    payload: web::Json<ChatInput>,
) -> AppResult<impl Responder> {
    let session = store.get(path.as_str()).await?;
    let input = payload.into_inner().message;

    // Dropping the handler mid-await still closes the chat through the guard.
    let (pending, persona) = PendingChat::begin(session, &input)?;

    let request = AgentRequest {
        message: input,
        agent_id: config.agent_id(persona).to_string(),
    };
    let outcome = agent.send(&request).await;

    let rendered = pending.finish(outcome)?;
    info!(has_widget = rendered.widget.is_some(), "Assistant reply recorded");

    Ok(HttpResponse::Ok().json(rendered))
}
