//! Callback context round-tripped by the caller between invocations

use serde::{Deserialize, Serialize};

/// Progress of a long-running operation.
///
/// This is the only state carried from one invocation to the next. Create
/// and Delete use the stabilization fields, Update uses the two completion
/// flags. Missing fields deserialize to their defaults so a fresh `{}`
/// context is accepted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CallbackContext {
    pub stabilization_started: bool,
    pub stabilization_retry_times: u32,
    pub update_tag_complete: bool,
    pub update_server_complete: bool,
}

impl CallbackContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one more stabilization round
    pub fn increment_retry_times(&mut self) {
        self.stabilization_retry_times = self.stabilization_retry_times.saturating_add(1);
    }
}
