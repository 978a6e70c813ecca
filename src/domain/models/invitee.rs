use chrono::{DateTime, Utc};
use rand::{distributions::Alphanumeric, Rng};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum GuestType {
    Invited,
    Promoted,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Invitee {
    pub id: String,
    pub full_name: String,
    pub guest_type: GuestType,
    pub qr_payload: Option<String>,
    pub admitted: bool,
    pub admitted_at: Option<DateTime<Utc>>,
    pub national_id: Option<String>,
}

/// The structured content embedded in a generated QR code. Just the record id;
/// no version field, no checksum.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct QrPayload {
    pub id: String,
}

impl Invitee {
    pub fn new(full_name: String, guest_type: GuestType, national_id: Option<String>) -> Self {
        Self {
            id: generate_id(),
            full_name,
            guest_type,
            qr_payload: None,
            admitted: false,
            admitted_at: None,
            national_id,
        }
    }
}

pub fn generate_id() -> String {
    let suffix: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(8)
        .map(char::from)
        .collect();

    format!("id_{}", suffix.to_lowercase())
}

/// Fields touched by a partial update. `None` means "leave unchanged".
#[derive(Debug, Serialize, Default, Clone)]
pub struct InviteePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qr_payload: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admitted: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admitted_at: Option<DateTime<Utc>>,
}

impl InviteePatch {
    pub fn apply(&self, invitee: &mut Invitee) {
        if let Some(qr_payload) = &self.qr_payload {
            invitee.qr_payload = Some(qr_payload.clone());
        }
        if let Some(admitted) = self.admitted {
            invitee.admitted = admitted;
        }
        if let Some(admitted_at) = self.admitted_at {
            invitee.admitted_at = Some(admitted_at);
        }
    }
}
