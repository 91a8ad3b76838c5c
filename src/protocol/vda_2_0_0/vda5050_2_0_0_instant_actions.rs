use serde::{Deserialize, Serialize};

use crate::protocol::vda_2_0_0::vda5050_2_0_0_action::ActionType;
use crate::protocol::vda5050_common::Header;

/// Instant action that the AGV is to execute as soon as it arrives.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InstantAction {
    #[serde(flatten)]
    pub header: Header,
    /// ID to distinguish between multiple instant actions.
    pub action_id: String,
    pub action_type: ActionType,
}
