use crate::config::Config;
use crate::domain::models::session::SessionMarker;
use crate::error::AppError;

/// Gate for the single-operator kiosk. One global credential pair from
/// configuration, compared by exact string equality. No hashing, no expiry,
/// no multi-user support.
pub struct AuthService {
    config: Config,
}

impl AuthService {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn login(&self, username: &str, password: &str) -> Result<SessionMarker, AppError> {
        if username != self.config.admin_username || password != self.config.admin_password {
            return Err(AppError::Unauthorized);
        }

        Ok(SessionMarker { username: username.to_string() })
    }

    /// Validates a session marker retrieved from the cookie.
    pub fn verify_marker(&self, marker: &SessionMarker) -> Result<(), AppError> {
        if marker.username != self.config.admin_username {
            return Err(AppError::Unauthorized);
        }
        Ok(())
    }
}
