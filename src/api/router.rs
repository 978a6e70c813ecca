use axum::{
    body::Body,
    extract::Request,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use std::time::Duration;

use crate::api::handlers::{auth, health, invitee, scanner};
use crate::state::AppState;
use tower_cookies::CookieManagerLayer;
use tower_http::{classify::ServerErrorsFailureClass, trace::TraceLayer};
use tracing::{error, info, info_span, Span};
use uuid::Uuid;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health::health_check))

        // Auth
        .route("/api/v1/auth/login", post(auth::login))
        .route("/api/v1/auth/logout", post(auth::logout))

        // Guest list
        .route("/api/v1/invitees", get(invitee::list_invitees).post(invitee::create_invitee))
        .route("/api/v1/invitees/{invitee_id}/qr", post(invitee::generate_qr))
        .route("/api/v1/invitees/{invitee_id}/admit", post(invitee::admit_invitee))
        .route("/api/v1/invitees/{invitee_id}/badge", get(invitee::render_badge))

        // Entrance scanner
        .route("/api/v1/scanner/sessions", post(scanner::open_session))
        .route("/api/v1/scanner/sessions/{session_id}/scan", post(scanner::submit_scan))
        .route("/api/v1/scanner/sessions/{session_id}/confirm", post(scanner::confirm_admission))
        .route("/api/v1/scanner/sessions/{session_id}/reset", post(scanner::reset_session))

        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<Body>| {
                    let request_id = Uuid::new_v4().to_string();
                    info_span!(
                        "http_request",
                        request_id = %request_id,
                        method = ?request.method(),
                        uri = ?request.uri(),
                        version = ?request.version(),
                        username = tracing::field::Empty,
                    )
                })
                .on_request(|request: &Request<Body>, _span: &Span| {
                    info!("started processing request: {} {}", request.method(), request.uri().path());
                })
                .on_response(|response: &axum::http::Response<Body>, latency: Duration, _span: &Span| {
                    info!(
                        status = response.status().as_u16(),
                        latency_ms = latency.as_millis(),
                        "finished processing request"
                    );
                })
                .on_failure(|error: ServerErrorsFailureClass, _latency: Duration, _span: &Span| {
                    error!("request failed: {:?}", error);
                })
        )
        .layer(CookieManagerLayer::new())
        .with_state(state)
}
