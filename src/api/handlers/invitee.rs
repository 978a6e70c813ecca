use axum::{
    extract::{Path, Query, State},
    response::{Html, IntoResponse},
    Json,
};
use std::sync::Arc;
use tracing::info;

use crate::api::dtos::requests::{CreateInviteeRequest, SearchParams};
use crate::api::dtos::responses::InviteeMutationResponse;
use crate::api::extractors::auth::SessionUser;
use crate::domain::services::roster;
use crate::error::AppError;
use crate::state::AppState;

pub async fn list_invitees(
    State(state): State<Arc<AppState>>,
    _user: SessionUser,
    Query(params): Query<SearchParams>,
) -> Result<impl IntoResponse, AppError> {
    let invitees = state.roster.list().await?;

    let invitees = match (&params.q, &params.national_id) {
        (None, None) => invitees,
        (q, national_id) => roster::search(
            &invitees,
            q.as_deref().unwrap_or(""),
            national_id.as_deref(),
        ),
    };

    Ok(Json(invitees))
}

pub async fn create_invitee(
    State(state): State<Arc<AppState>>,
    _user: SessionUser,
    Json(payload): Json<CreateInviteeRequest>,
) -> Result<impl IntoResponse, AppError> {
    let (invitee, invitees) = state
        .roster
        .add_invitee(&payload.full_name, payload.guest_type, payload.national_id)
        .await?;

    Ok(Json(InviteeMutationResponse { invitee, invitees }))
}

pub async fn generate_qr(
    State(state): State<Arc<AppState>>,
    _user: SessionUser,
    Path(invitee_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let (invitee, invitees) = state.roster.generate_qr(&invitee_id).await?;

    info!("Generated QR payload for invitee {}", invitee_id);

    Ok(Json(InviteeMutationResponse { invitee, invitees }))
}

pub async fn admit_invitee(
    State(state): State<Arc<AppState>>,
    _user: SessionUser,
    Path(invitee_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let (invitee, invitees) = state.roster.mark_admitted(&invitee_id).await?;

    Ok(Json(InviteeMutationResponse { invitee, invitees }))
}

/// Printable badge card. QR visual rendering stays client-side; the card
/// carries the payload text.
pub async fn render_badge(
    State(state): State<Arc<AppState>>,
    _user: SessionUser,
    Path(invitee_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let invitees = state.roster.list().await?;
    let invitee = invitees
        .iter()
        .find(|i| i.id == invitee_id)
        .ok_or(AppError::NotFound("Invitee not found".into()))?;

    let mut context = tera::Context::new();
    context.insert("full_name", &invitee.full_name);
    context.insert("guest_type", &invitee.guest_type);
    context.insert("qr_payload", &invitee.qr_payload);
    context.insert("admitted", &invitee.admitted);

    let html = state
        .templates
        .render("badge.html", &context)
        .map_err(|e| AppError::InternalWithMsg(format!("Badge render failed: {}", e)))?;

    Ok(Html(html))
}
