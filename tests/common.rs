use guestlist_backend::{
    api::router::create_router,
    config::Config,
    domain::ports::InviteeRepository,
    domain::services::auth_service::AuthService,
    domain::services::roster::RosterService,
    infra::repositories::local_invitee_repo::LocalInviteeRepo,
    state::AppState,
};

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use tera::Tera;
use tokio::sync::Mutex;
use tower::ServiceExt;
use uuid::Uuid;

pub const TEST_USERNAME: &str = "jesusandia124";
pub const TEST_PASSWORD: &str = "andia124";

#[allow(dead_code)]
pub struct TestApp {
    pub router: Router,
    pub store_path: std::path::PathBuf,
    pub state: Arc<AppState>,
}

impl TestApp {
    pub fn new() -> Self {
        let store_path = std::env::temp_dir().join(format!("test_guestlist_{}.json", Uuid::new_v4()));

        let config = Config {
            port: 0,
            remote_store_url: None,
            remote_store_token: None,
            local_store_path: store_path.to_string_lossy().into_owned(),
            admin_username: TEST_USERNAME.to_string(),
            admin_password: TEST_PASSWORD.to_string(),
        };

        let invitee_repo: Arc<dyn InviteeRepository> =
            Arc::new(LocalInviteeRepo::new(store_path.clone()));

        let mut tera = Tera::default();
        tera.add_raw_template(
            "badge.html",
            include_str!("../src/templates/badge.html"),
        )
        .unwrap();

        let state = Arc::new(AppState {
            config: config.clone(),
            invitee_repo: invitee_repo.clone(),
            roster: Arc::new(RosterService::new(invitee_repo)),
            auth_service: Arc::new(AuthService::new(config)),
            scan_sessions: Arc::new(Mutex::new(HashMap::new())),
            templates: Arc::new(tera),
        });

        let router = create_router(state.clone());

        Self { router, store_path, state }
    }

    /// Logs in with the configured operator pair and returns the session
    /// cookie value for subsequent requests.
    pub async fn login(&self) -> String {
        let body = serde_json::json!({ "username": TEST_USERNAME, "password": TEST_PASSWORD });

        let response = self
            .router
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/auth/login")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(serde_json::to_vec(&body).unwrap()))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK, "login must succeed in tests");

        let set_cookie = response
            .headers()
            .get(header::SET_COOKIE)
            .expect("login must set the session cookie")
            .to_str()
            .unwrap();

        set_cookie.split(';').next().unwrap().to_string()
    }

    pub async fn send(
        &self,
        method: &str,
        uri: &str,
        cookie: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);

        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }

        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(serde_json::to_vec(&body).unwrap()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::String(
                String::from_utf8_lossy(&bytes).into_owned(),
            ))
        };

        (status, value)
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.store_path);
    }
}
