use serde::{Deserialize, Serialize};

/// Failure body returned by the API server for non-2xx responses.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Status {
    #[serde(default)]
    pub code: u16,

    #[serde(default)]
    pub reason: String,

    #[serde(default)]
    pub message: String,
}
