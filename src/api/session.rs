use actix_web::{HttpResponse, Responder, web};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::info;
use utoipa::ToSchema;

use crate::error::AppResult;
use crate::model::persona::{Persona, PersonaProfile};
use crate::render::RenderedMessage;
use crate::session::{SessionStore, SessionView, store::lock};

#[derive(Deserialize, ToSchema)]
pub struct CreateSession {
    #[schema(example = "hr")]
    pub persona: Persona,
}

#[derive(Serialize, ToSchema)]
pub struct SessionCreated {
    #[schema(example = "1b4e28ba-2fa1-11d2-883f-0016d3cca427")]
    pub session_id: String,
    pub persona: Persona,
    pub profile: PersonaProfile,
}

/* =========================
Create dashboard session
========================= */
#[utoipa::path(
    post,
    path = "/api/sessions",
    request_body = CreateSession,
    responses(
        (status = 201, description = "Session created", body = SessionCreated),
        (status = 400, description = "Unknown persona")
    ),
    tag = "Session"
)]
pub async fn create_session(
    store: web::Data<SessionStore>,
    payload: web::Json<CreateSession>,
) -> impl Responder {
    let persona = payload.persona;
    let (session_id, _) = store.create(persona).await;

    info!(session_id = %session_id, persona = %persona, "Dashboard session opened");

    HttpResponse::Created().json(SessionCreated {
        session_id,
        persona,
        profile: persona.profile(),
    })
}

/// Full dashboard view of one session
#[utoipa::path(
    get,
    path = "/api/sessions/{session_id}",
    params(
        ("session_id" = String, Path, description = "Session ID")
    ),
    responses(
        (status = 200, description = "Session found", body = SessionView),
        (status = 404, description = "Session not found", body = Object, example = json!({
            "message": "Session not found"
        }))
    ),
    tag = "Session"
)]
pub async fn get_session(
    store: web::Data<SessionStore>,
    path: web::Path<String>,
) -> AppResult<impl Responder> {
    let session_id = path.into_inner();
    let session = store.get(&session_id).await?;

    let view = lock(&session)?.view(&session_id);
    Ok(HttpResponse::Ok().json(view))
}

#[utoipa::path(
    delete,
    path = "/api/sessions/{session_id}",
    params(
        ("session_id" = String, Path, description = "Session ID")
    ),
    responses(
        (status = 200, description = "Session closed", body = Object, example = json!({
            "message": "Session closed"
        })),
        (status = 404, description = "Session not found")
    ),
    tag = "Session"
)]
pub async fn delete_session(
    store: web::Data<SessionStore>,
    path: web::Path<String>,
) -> impl Responder {
    let session_id = path.into_inner();

    if !store.remove(&session_id).await {
        return HttpResponse::NotFound().json(json!({
            "message": "Session not found"
        }));
    }

    HttpResponse::Ok().json(json!({
        "message": "Session closed"
    }))
}

/// Messages of a session, each with its widget
#[utoipa::path(
    get,
    path = "/api/sessions/{session_id}/messages",
    params(
        ("session_id" = String, Path, description = "Session ID")
    ),
    responses(
        (status = 200, description = "Rendered messages in order", body = [RenderedMessage]),
        (status = 404, description = "Session not found")
    ),
    tag = "Session"
)]
pub async fn list_messages(
    store: web::Data<SessionStore>,
    path: web::Path<String>,
) -> AppResult<impl Responder> {
    let session = store.get(&path.into_inner()).await?;

    let messages = lock(&session)?.rendered_messages();
    Ok(HttpResponse::Ok().json(messages))
}
