use serde::{Deserialize, Serialize};

use crate::protocol::vda5050_common::HeaderId;

/// Confirmation that a state message was accepted, published on the ack topic.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AckRequest {
    /// header_id of the acknowledged state message.
    pub state_id: HeaderId,
    pub timestamp: String,
}
