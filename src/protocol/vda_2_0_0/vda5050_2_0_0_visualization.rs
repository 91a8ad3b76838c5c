use serde::{Deserialize, Serialize};

use crate::protocol::vda5050_common::{AgvPosition, Header, Velocity};

/// Higher-rate position telemetry. Only the latest message is kept.
#[serde_with::skip_serializing_none]
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Visualization {
    #[serde(flatten)]
    pub header: Header,
    pub agv_position: AgvPosition,
    pub velocity: Option<Velocity>,
    /// Vendor data, carried as-is.
    pub custom_data: serde_json::Map<String, serde_json::Value>,
}
