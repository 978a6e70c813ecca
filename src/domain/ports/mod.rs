use crate::domain::models::invitee::{Invitee, InviteePatch};
use crate::error::AppError;
use async_trait::async_trait;

/// Persistence adapter for the guest list. Two interchangeable backends exist
/// (remote structured store, local blob file); one is selected at bootstrap,
/// so callers never branch on configuration.
#[async_trait]
pub trait InviteeRepository: Send + Sync {
    /// Full collection, sorted by name.
    async fn list(&self) -> Result<Vec<Invitee>, AppError>;
    async fn insert(&self, invitee: &Invitee) -> Result<(), AppError>;
    async fn update(&self, id: &str, patch: &InviteePatch) -> Result<(), AppError>;
}
