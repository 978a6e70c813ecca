use serde::{Deserialize, Serialize};

/// The marker stored in the operator's browsing-session cookie after a
/// successful login. Contains only the username.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SessionMarker {
    pub username: String,
}
