use axum::{
    extract::{FromRef, FromRequestParts},
    http::{request::Parts, StatusCode},
};
use std::sync::Arc;
use tower_cookies::Cookies;
use tracing::Span;

use crate::domain::models::session::SessionMarker;
use crate::state::AppState;

pub const SESSION_COOKIE: &str = "session";

/// Uniform gate for every protected view: the session marker must be present
/// and carry the configured operator's username, otherwise 401 (the kiosk
/// front end redirects to login).
pub struct SessionUser(pub SessionMarker);

impl<S> FromRequestParts<S> for SessionUser
where
    S: Send + Sync,
    Arc<AppState>: FromRef<S>,
{
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let cookies = parts.extensions.get::<Cookies>()
            .ok_or(StatusCode::INTERNAL_SERVER_ERROR)?;

        let raw = cookies.get(SESSION_COOKIE)
            .ok_or(StatusCode::UNAUTHORIZED)?
            .value()
            .to_string();

        let marker: SessionMarker = serde_json::from_str(&raw)
            .map_err(|_| StatusCode::UNAUTHORIZED)?;

        let app_state = <Arc<AppState> as FromRef<S>>::from_ref(state);
        app_state.auth_service.verify_marker(&marker)
            .map_err(|_| StatusCode::UNAUTHORIZED)?;

        Span::current().record("username", marker.username.as_str());

        Ok(SessionUser(marker))
    }
}
