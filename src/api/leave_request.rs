use actix_web::{HttpResponse, Responder, web};

use crate::error::AppResult;
use crate::model::leave_request::{LeaveAction, LeaveRecord};
use crate::render::RenderedMessage;
use crate::session::{ConfirmDialog, LeaveFilters, SessionStore, store::lock};

/// Leave records of a session after its filters are applied
#[utoipa::path(
    get,
    path = "/api/sessions/{session_id}/leave",
    params(
        ("session_id" = String, Path, description = "Session ID")
    ),
    responses(
        (status = 200, description = "Filtered leave records", body = [LeaveRecord]),
        (status = 404, description = "Session not found")
    ),
    tag = "Leave"
)]
pub async fn leave_list(
    store: web::Data<SessionStore>,
    path: web::Path<String>,
) -> AppResult<impl Responder> {
    let session = store.get(&path.into_inner()).await?;

    let leaves = lock(&session)?.filtered_leaves();
    Ok(HttpResponse::Ok().json(leaves))
}

/// First few filtered leave records, as the activity panel shows them
#[utoipa::path(
    get,
    path = "/api/sessions/{session_id}/recent-activity",
    params(
        ("session_id" = String, Path, description = "Session ID")
    ),
    responses(
        (status = 200, description = "Recent leave activity", body = [LeaveRecord]),
        (status = 404, description = "Session not found")
    ),
    tag = "Leave"
)]
pub async fn recent_activity(
    store: web::Data<SessionStore>,
    path: web::Path<String>,
) -> AppResult<impl Responder> {
    let session = store.get(&path.into_inner()).await?;

    let leaves = lock(&session)?.recent_activity();
    Ok(HttpResponse::Ok().json(leaves))
}

#[utoipa::path(
    put,
    path = "/api/sessions/{session_id}/filters",
    params(
        ("session_id" = String, Path, description = "Session ID")
    ),
    request_body = LeaveFilters,
    responses(
        (status = 200, description = "Filters applied, filtered records returned", body = [LeaveRecord]),
        (status = 404, description = "Session not found")
    ),
    tag = "Leave"
)]
pub async fn set_filters(
    store: web::Data<SessionStore>,
    path: web::Path<String>,
    payload: web::Json<LeaveFilters>,
) -> AppResult<impl Responder> {
    let session = store.get(&path.into_inner()).await?;

    let mut state = lock(&session)?;
    state.set_filters(payload.into_inner());
    Ok(HttpResponse::Ok().json(state.filtered_leaves()))
}

async fn request_action(
    store: &SessionStore,
    session_id: &str,
    leave_id: &str,
    action: LeaveAction,
) -> AppResult<HttpResponse> {
    let session = store.get(session_id).await?;

    let mut state = lock(&session)?;
    let dialog = state.request_action(leave_id, action)?;
    Ok(HttpResponse::Ok().json(dialog))
}

/* =========================
Approve leave (opens confirmation)
========================= */
#[utoipa::path(
    post,
    path = "/api/sessions/{session_id}/leave/{leave_id}/approve",
    params(
        ("session_id" = String, Path, description = "Session ID"),
        ("leave_id" = String, Path, description = "ID of the leave request to approve")
    ),
    responses(
        (status = 200, description = "Confirmation dialog opened", body = ConfirmDialog),
        (status = 400, description = "Leave actions unavailable for this persona"),
        (status = 404, description = "Session or leave request not found"),
        (status = 409, description = "Leave request already processed", body = Object, example = json!({
            "message": "Leave request LEAVE001 already processed"
        }))
    ),
    tag = "Leave"
)]
pub async fn approve_leave(
    store: web::Data<SessionStore>,
    path: web::Path<(String, String)>,
) -> AppResult<impl Responder> {
    let (session_id, leave_id) = path.into_inner();
    request_action(&store, &session_id, &leave_id, LeaveAction::Approve).await
}

/* =========================
Reject leave (opens confirmation)
========================= */
#[utoipa::path(
    post,
    path = "/api/sessions/{session_id}/leave/{leave_id}/reject",
    params(
        ("session_id" = String, Path, description = "Session ID"),
        ("leave_id" = String, Path, description = "ID of the leave request to reject")
    ),
    responses(
        (status = 200, description = "Confirmation dialog opened", body = ConfirmDialog),
        (status = 400, description = "Leave actions unavailable for this persona"),
        (status = 404, description = "Session or leave request not found"),
        (status = 409, description = "Leave request already processed")
    ),
    tag = "Leave"
)]
pub async fn reject_leave(
    store: web::Data<SessionStore>,
    path: web::Path<(String, String)>,
) -> AppResult<impl Responder> {
    let (session_id, leave_id) = path.into_inner();
    request_action(&store, &session_id, &leave_id, LeaveAction::Reject).await
}

/// Apply the action waiting in the confirmation dialog
#[utoipa::path(
    post,
    path = "/api/sessions/{session_id}/dialog/confirm",
    params(
        ("session_id" = String, Path, description = "Session ID")
    ),
    responses(
        (status = 200, description = "Leave updated, confirmation message appended", body = RenderedMessage),
        (status = 404, description = "Session not found"),
        (status = 409, description = "Nothing to confirm", body = Object, example = json!({
            "message": "No action is waiting for confirmation"
        }))
    ),
    tag = "Leave"
)]
pub async fn confirm_action(
    store: web::Data<SessionStore>,
    path: web::Path<String>,
) -> AppResult<impl Responder> {
    let session = store.get(&path.into_inner()).await?;

    let message = lock(&session)?.confirm()?;
    Ok(HttpResponse::Ok().json(message))
}

#[utoipa::path(
    post,
    path = "/api/sessions/{session_id}/dialog/cancel",
    params(
        ("session_id" = String, Path, description = "Session ID")
    ),
    responses(
        (status = 200, description = "Dialog closed", body = ConfirmDialog),
        (status = 404, description = "Session not found")
    ),
    tag = "Leave"
)]
pub async fn cancel_action(
    store: web::Data<SessionStore>,
    path: web::Path<String>,
) -> AppResult<impl Responder> {
    let session = store.get(&path.into_inner()).await?;

    let mut state = lock(&session)?;
    state.cancel();
    Ok(HttpResponse::Ok().json(state.dialog()))
}
