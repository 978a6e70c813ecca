use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::domain::models::invitee::{Invitee, QrPayload};

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ScanRejection {
    /// Payload was not parseable as the expected `{"id": ...}` form.
    Malformed,
    /// Payload was well-formed but the id is not on the guest list.
    NotRegistered,
}

impl ScanRejection {
    pub fn message(&self) -> &'static str {
        match self {
            ScanRejection::Malformed => "invalid QR",
            ScanRejection::NotRegistered => "guest not registered",
        }
    }
}

#[derive(Debug, Serialize, Clone)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ScanState {
    AwaitingScan,
    Matched { invitee: Invitee },
    Invalid { reason: ScanRejection },
}

/// One scanner session. The invitee list is snapshotted when the session is
/// opened and does not live-refresh while scanning; admissions made elsewhere
/// in the meantime are not visible here (known gap, single-device assumption).
pub struct ScanSession {
    pub id: String,
    pub opened_at: DateTime<Utc>,
    snapshot: Vec<Invitee>,
    state: ScanState,
}

impl ScanSession {
    pub fn open(snapshot: Vec<Invitee>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            opened_at: Utc::now(),
            snapshot,
            state: ScanState::AwaitingScan,
        }
    }

    pub fn state(&self) -> &ScanState {
        &self.state
    }

    /// Feeds one decoded frame into the state machine. Repeated decodes of the
    /// payload currently matched are debounced: the state is left unchanged.
    pub fn handle_decode(&mut self, raw: &str) -> &ScanState {
        let payload: QrPayload = match serde_json::from_str(raw) {
            Ok(payload) => payload,
            Err(_) => {
                self.state = ScanState::Invalid { reason: ScanRejection::Malformed };
                return &self.state;
            }
        };

        if let ScanState::Matched { invitee } = &self.state {
            if invitee.id == payload.id {
                return &self.state;
            }
        }

        self.state = match self.snapshot.iter().find(|i| i.id == payload.id) {
            Some(invitee) => ScanState::Matched { invitee: invitee.clone() },
            None => ScanState::Invalid { reason: ScanRejection::NotRegistered },
        };
        &self.state
    }

    /// Id of the currently matched invitee, if any. The confirm action needs
    /// it to invoke the admission mutation.
    pub fn matched_id(&self) -> Option<&str> {
        match &self.state {
            ScanState::Matched { invitee } => Some(invitee.id.as_str()),
            _ => None,
        }
    }

    /// Patches the locally held copy of the matched record after a confirmed
    /// admission, so the session reflects the new state without a reload.
    pub fn apply_admission(&mut self, admitted: &Invitee) {
        if let Some(existing) = self.snapshot.iter_mut().find(|i| i.id == admitted.id) {
            *existing = admitted.clone();
        }
        if let ScanState::Matched { invitee } = &mut self.state {
            if invitee.id == admitted.id {
                *invitee = admitted.clone();
            }
        }
    }

    /// Back to `AwaitingScan` for the next guest.
    pub fn reset(&mut self) {
        self.state = ScanState::AwaitingScan;
    }
}
