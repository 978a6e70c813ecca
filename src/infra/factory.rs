use std::collections::HashMap;
use std::sync::Arc;

use tera::Tera;
use tokio::sync::Mutex;
use tracing::info;

use crate::config::Config;
use crate::domain::ports::InviteeRepository;
use crate::domain::services::auth_service::AuthService;
use crate::domain::services::roster::RosterService;
use crate::infra::repositories::local_invitee_repo::LocalInviteeRepo;
use crate::infra::repositories::remote_invitee_repo::RemoteInviteeRepo;
use crate::state::AppState;

/// Selects the storage backend once, from configuration presence. Repository
/// callers never branch on configuration after this point.
pub fn bootstrap_state(config: &Config) -> AppState {
    let invitee_repo: Arc<dyn InviteeRepository> = match &config.remote_store_url {
        Some(url) => {
            info!("Remote store configured at {}, local blob kept as fallback", url);
            Arc::new(RemoteInviteeRepo::new(
                url.clone(),
                config.remote_store_token.clone(),
                LocalInviteeRepo::new(config.local_store_path.clone()),
            ))
        }
        None => {
            info!("No remote store configured, using local blob at {}", config.local_store_path);
            Arc::new(LocalInviteeRepo::new(config.local_store_path.clone()))
        }
    };

    let mut tera = Tera::default();
    tera.add_raw_template("badge.html", include_str!("../templates/badge.html"))
        .expect("Failed to load badge template");

    AppState {
        config: config.clone(),
        invitee_repo: invitee_repo.clone(),
        roster: Arc::new(RosterService::new(invitee_repo)),
        auth_service: Arc::new(AuthService::new(config.clone())),
        scan_sessions: Arc::new(Mutex::new(HashMap::new())),
        templates: Arc::new(tera),
    }
}
