use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use std::sync::Arc;
use tracing::info;

use crate::api::dtos::requests::ScanRequest;
use crate::api::dtos::responses::ScanSessionResponse;
use crate::api::extractors::auth::SessionUser;
use crate::domain::services::scanner::{ScanSession, ScanState};
use crate::error::AppError;
use crate::state::AppState;

fn response_for(session: &ScanSession) -> ScanSessionResponse {
    let state = session.state().clone();
    let message = match &state {
        ScanState::Invalid { reason } => Some(reason.message()),
        _ => None,
    };

    ScanSessionResponse {
        session_id: session.id.clone(),
        opened_at: session.opened_at,
        state,
        message,
    }
}

/// Opens a scanner session, snapshotting the guest list once. The snapshot
/// does not live-refresh while scanning.
pub async fn open_session(
    State(state): State<Arc<AppState>>,
    _user: SessionUser,
) -> Result<impl IntoResponse, AppError> {
    let snapshot = state.roster.list().await?;
    let session = ScanSession::open(snapshot);

    info!("Opened scanner session {}", session.id);

    let response = response_for(&session);
    state.scan_sessions.lock().await.insert(session.id.clone(), session);

    Ok(Json(response))
}

pub async fn submit_scan(
    State(state): State<Arc<AppState>>,
    _user: SessionUser,
    Path(session_id): Path<String>,
    Json(payload): Json<ScanRequest>,
) -> Result<impl IntoResponse, AppError> {
    let mut sessions = state.scan_sessions.lock().await;
    let session = sessions
        .get_mut(&session_id)
        .ok_or(AppError::NotFound("Scanner session not found".into()))?;

    session.handle_decode(&payload.payload);

    Ok(Json(response_for(session)))
}

/// Confirm action from `Matched`: runs the admission mutation, then patches
/// the session's held copy so the view updates without a reload.
pub async fn confirm_admission(
    State(state): State<Arc<AppState>>,
    _user: SessionUser,
    Path(session_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let mut sessions = state.scan_sessions.lock().await;
    let session = sessions
        .get_mut(&session_id)
        .ok_or(AppError::NotFound("Scanner session not found".into()))?;

    let invitee_id = session
        .matched_id()
        .ok_or(AppError::Conflict("No matched invitee to confirm".into()))?
        .to_string();

    let (invitee, _) = state.roster.mark_admitted(&invitee_id).await?;
    session.apply_admission(&invitee);

    info!("Confirmed admission of {} via scanner session {}", invitee_id, session_id);

    Ok(Json(response_for(session)))
}

pub async fn reset_session(
    State(state): State<Arc<AppState>>,
    _user: SessionUser,
    Path(session_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let mut sessions = state.scan_sessions.lock().await;
    let session = sessions
        .get_mut(&session_id)
        .ok_or(AppError::NotFound("Scanner session not found".into()))?;

    session.reset();

    Ok(Json(response_for(session)))
}
