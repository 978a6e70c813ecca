use std::path::PathBuf;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::warn;

use crate::domain::models::invitee::{Invitee, InviteePatch};
use crate::domain::ports::InviteeRepository;
use crate::error::AppError;

/// Local fallback store. The entire collection lives as one serialized JSON
/// blob in one file; every mutation reads the whole blob and rewrites it.
/// Single-operator assumption; the RwLock only serializes access within this
/// process.
pub struct LocalInviteeRepo {
    path: PathBuf,
    lock: RwLock<()>,
}

impl LocalInviteeRepo {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: RwLock::new(()),
        }
    }

    /// Missing file and unparseable blob both read as the empty collection
    /// (first-run bootstrap).
    async fn read_blob(&self) -> Vec<Invitee> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(_) => return Vec::new(),
        };

        match serde_json::from_slice(&bytes) {
            Ok(invitees) => invitees,
            Err(e) => {
                warn!("Discarding unreadable guest-list blob at {:?}: {}", self.path, e);
                Vec::new()
            }
        }
    }

    /// Write failures are logged and swallowed; nothing here is fatal.
    async fn write_blob(&self, invitees: &[Invitee]) {
        let bytes = match serde_json::to_vec(invitees) {
            Ok(bytes) => bytes,
            Err(e) => {
                warn!("Failed to serialize guest-list blob: {}", e);
                return;
            }
        };

        if let Err(e) = tokio::fs::write(&self.path, bytes).await {
            warn!("Failed to persist guest-list blob to {:?}: {}", self.path, e);
        }
    }
}

#[async_trait]
impl InviteeRepository for LocalInviteeRepo {
    async fn list(&self) -> Result<Vec<Invitee>, AppError> {
        let _guard = self.lock.read().await;
        let mut invitees = self.read_blob().await;
        invitees.sort_by_key(|i| i.full_name.to_lowercase());
        Ok(invitees)
    }

    async fn insert(&self, invitee: &Invitee) -> Result<(), AppError> {
        let _guard = self.lock.write().await;
        let mut invitees = self.read_blob().await;
        invitees.push(invitee.clone());
        self.write_blob(&invitees).await;
        Ok(())
    }

    async fn update(&self, id: &str, patch: &InviteePatch) -> Result<(), AppError> {
        let _guard = self.lock.write().await;
        let mut invitees = self.read_blob().await;

        let target = invitees
            .iter_mut()
            .find(|i| i.id == id)
            .ok_or(AppError::NotFound("Invitee not found".into()))?;
        patch.apply(target);

        self.write_blob(&invitees).await;
        Ok(())
    }
}
