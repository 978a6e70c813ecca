use std::collections::HashMap;
use std::sync::Arc;

use tera::Tera;
use tokio::sync::Mutex;

use crate::config::Config;
use crate::domain::ports::InviteeRepository;
use crate::domain::services::auth_service::AuthService;
use crate::domain::services::roster::RosterService;
use crate::domain::services::scanner::ScanSession;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub invitee_repo: Arc<dyn InviteeRepository>,
    pub roster: Arc<RosterService>,
    pub auth_service: Arc<AuthService>,
    /// Open scanner sessions, keyed by session id. Each holds its own list
    /// snapshot taken when the scanner view was opened.
    pub scan_sessions: Arc<Mutex<HashMap<String, ScanSession>>>,
    pub templates: Arc<Tera>,
}
