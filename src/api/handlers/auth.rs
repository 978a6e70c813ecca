use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use std::sync::Arc;
use tower_cookies::cookie::SameSite;
use tower_cookies::{Cookie, Cookies};
use tracing::info;

use crate::api::dtos::requests::LoginRequest;
use crate::api::extractors::auth::SESSION_COOKIE;
use crate::error::AppError;
use crate::state::AppState;

pub async fn login(
    State(state): State<Arc<AppState>>,
    cookies: Cookies,
    Json(payload): Json<LoginRequest>,
) -> Result<impl IntoResponse, AppError> {
    let marker = state.auth_service.login(&payload.username, &payload.password)?;

    let serialized = serde_json::to_string(&marker)
        .map_err(|_| AppError::Internal)?;

    // Browsing-session cookie: no max-age, gone when the kiosk session ends.
    let mut session_c = Cookie::new(SESSION_COOKIE, serialized);
    session_c.set_http_only(true);
    session_c.set_same_site(SameSite::Strict);
    session_c.set_path("/");
    cookies.add(session_c);

    info!("Operator logged in: {}", marker.username);

    Ok(Json(marker))
}

pub async fn logout(cookies: Cookies) -> Result<impl IntoResponse, AppError> {
    cookies.remove(Cookie::build((SESSION_COOKIE, "")).path("/").into());

    info!("Operator logged out");

    Ok(StatusCode::OK)
}
