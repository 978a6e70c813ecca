use std::sync::Arc;

use chrono::Utc;
use tracing::info;

use crate::domain::models::invitee::{GuestType, Invitee, InviteePatch, QrPayload};
use crate::domain::ports::InviteeRepository;
use crate::error::AppError;

/// Invitee repository operations. Every mutation ends with a fresh `list()`
/// so the caller can re-render current state.
pub struct RosterService {
    repo: Arc<dyn InviteeRepository>,
}

impl RosterService {
    pub fn new(repo: Arc<dyn InviteeRepository>) -> Self {
        Self { repo }
    }

    pub async fn list(&self) -> Result<Vec<Invitee>, AppError> {
        self.repo.list().await
    }

    pub async fn add_invitee(
        &self,
        full_name: &str,
        guest_type: GuestType,
        national_id: Option<String>,
    ) -> Result<(Invitee, Vec<Invitee>), AppError> {
        let full_name = full_name.trim();
        if full_name.is_empty() {
            return Err(AppError::Validation("Invitee name must not be blank".into()));
        }

        let existing = self.repo.list().await?;
        let mut invitee = Invitee::new(full_name.to_string(), guest_type, national_id);
        // Random ids make collisions improbable, not impossible.
        while existing.iter().any(|i| i.id == invitee.id) {
            invitee.id = crate::domain::models::invitee::generate_id();
        }

        self.repo.insert(&invitee).await?;
        info!("Added invitee {} ({})", invitee.id, invitee.full_name);

        let invitees = self.repo.list().await?;
        Ok((invitee, invitees))
    }

    /// Derives and stores the QR payload for an invitee. Idempotent: the
    /// payload is a pure function of the id, so regenerating overwrites the
    /// prior value with the same content.
    pub async fn generate_qr(&self, id: &str) -> Result<(Invitee, Vec<Invitee>), AppError> {
        let invitees = self.repo.list().await?;
        let mut invitee = invitees
            .iter()
            .find(|i| i.id == id)
            .cloned()
            .ok_or(AppError::NotFound("Invitee not found".into()))?;

        let payload = serde_json::to_string(&QrPayload { id: invitee.id.clone() })
            .map_err(|e| AppError::InternalWithMsg(format!("QR payload serialization failed: {}", e)))?;

        let patch = InviteePatch { qr_payload: Some(payload.clone()), ..Default::default() };
        self.repo.update(&invitee.id, &patch).await?;
        invitee.qr_payload = Some(payload);

        let invitees = self.repo.list().await?;
        Ok((invitee, invitees))
    }

    /// One-way admission. Re-marking an already admitted invitee is rejected
    /// so `admitted_at` is set exactly once.
    pub async fn mark_admitted(&self, id: &str) -> Result<(Invitee, Vec<Invitee>), AppError> {
        let invitees = self.repo.list().await?;
        let mut invitee = invitees
            .iter()
            .find(|i| i.id == id)
            .cloned()
            .ok_or(AppError::NotFound("Invitee not found".into()))?;

        if invitee.admitted {
            return Err(AppError::Conflict("Invitee already admitted".into()));
        }

        let now = Utc::now();
        let patch = InviteePatch {
            admitted: Some(true),
            admitted_at: Some(now),
            ..Default::default()
        };
        self.repo.update(&invitee.id, &patch).await?;
        invitee.admitted = true;
        invitee.admitted_at = Some(now);

        info!("Admitted invitee {}", invitee.id);

        let invitees = self.repo.list().await?;
        Ok((invitee, invitees))
    }
}

/// Case-insensitive substring match on name or national id, intersected with
/// an optional exact national-id filter. Pure; no persistence effect.
pub fn search(invitees: &[Invitee], query: &str, national_id: Option<&str>) -> Vec<Invitee> {
    let needle = query.trim().to_lowercase();

    invitees
        .iter()
        .filter(|i| {
            if needle.is_empty() {
                return true;
            }
            i.full_name.to_lowercase().contains(&needle)
                || i.national_id
                    .as_deref()
                    .map(|n| n.to_lowercase().contains(&needle))
                    .unwrap_or(false)
        })
        .filter(|i| match national_id {
            Some(filter) => i.national_id.as_deref() == Some(filter),
            None => true,
        })
        .cloned()
        .collect()
}
