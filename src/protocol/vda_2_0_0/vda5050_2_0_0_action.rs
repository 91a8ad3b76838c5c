use serde::{Deserialize, Serialize};
use std::fmt;

/// Instant action types the controller can issue.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum ActionType {
    /// Halt driving and actions until resumed.
    Pause,
    /// Continue after a pause.
    Resume,
    /// Stop the vehicle.
    Stop,
}

impl ActionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActionType::Pause => "PAUSE",
            ActionType::Resume => "RESUME",
            ActionType::Stop => "STOP",
        }
    }
}

impl fmt::Display for ActionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
