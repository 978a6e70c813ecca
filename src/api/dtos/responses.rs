use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::models::invitee::Invitee;
use crate::domain::services::scanner::ScanState;

/// Every mutation returns the touched record plus a fresh full listing, so
/// the kiosk re-renders current state without a second round trip.
#[derive(Serialize)]
pub struct InviteeMutationResponse {
    pub invitee: Invitee,
    pub invitees: Vec<Invitee>,
}

#[derive(Serialize)]
pub struct ScanSessionResponse {
    pub session_id: String,
    pub opened_at: DateTime<Utc>,
    #[serde(flatten)]
    pub state: ScanState,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
}
