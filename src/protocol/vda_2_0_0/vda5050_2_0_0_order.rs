use serde::{Deserialize, Serialize};

use crate::protocol::vda5050_common::{Header, NodePosition};

/// Order sent to the AGV. Fire-and-forget: no acceptance reply is modeled.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Order {
    #[serde(flatten)]
    pub header: Header,
    /// Order identification, unique per order.
    pub order_id: String,
    /// Order update identification.
    pub order_update_id: u32,
    /// Ordered destination nodes to be traversed.
    pub nodes: Vec<NodePosition>,
}
