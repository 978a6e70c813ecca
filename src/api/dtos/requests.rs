use serde::Deserialize;

use crate::domain::models::invitee::GuestType;

#[derive(Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Deserialize)]
pub struct CreateInviteeRequest {
    pub full_name: String,
    pub guest_type: GuestType,
    pub national_id: Option<String>,
}

#[derive(Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
    pub national_id: Option<String>,
}

/// One decoded frame from the camera reader.
#[derive(Deserialize)]
pub struct ScanRequest {
    pub payload: String,
}
