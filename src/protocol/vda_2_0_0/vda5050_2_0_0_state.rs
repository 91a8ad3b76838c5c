use serde::{Deserialize, Serialize};
use serde_with::DefaultOnError;
use std::fmt;

use crate::protocol::vda5050_common::{BatteryState, Header, Position};

/// State reported by the AGV. Always replaces the controller's copy as a whole.
///
/// Any JSON object decodes: missing, `null` or mistyped fields take their
/// default value.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct State {
    #[serde(flatten)]
    pub header: Header,
    /// Unique order identification of the current order or the previous finished order.
    #[serde_as(deserialize_as = "DefaultOnError")]
    pub order_id: String,
    /// Order update identification to identify that an order update has been accepted by the AGV.
    #[serde_as(deserialize_as = "DefaultOnError")]
    pub order_update_id: u32,
    /// Node ID of last reached node or, if AGV is currently on a node, current node.
    #[serde_as(deserialize_as = "DefaultOnError")]
    pub last_node_id: String,
    /// Sequence ID of the last reached node.
    #[serde_as(deserialize_as = "DefaultOnError")]
    pub last_node_sequence_id: u32,
    /// True while the AGV is driving and/or rotating.
    #[serde_as(deserialize_as = "DefaultOnError")]
    pub driving: bool,
    #[serde_as(deserialize_as = "DefaultOnError")]
    pub position: Position,
    #[serde_as(deserialize_as = "DefaultOnError")]
    pub battery_state: BatteryState,
    #[serde_as(deserialize_as = "DefaultOnError")]
    pub operating_mode: OperatingMode,
    /// Passed through untouched; the controller never inspects action states.
    #[serde_as(deserialize_as = "DefaultOnError")]
    pub action_states: Vec<serde_json::Value>,
    /// True while the AGV is paused by an instant action or an external trigger.
    #[serde_as(deserialize_as = "DefaultOnError")]
    pub paused: Option<bool>,
}

/// Current operating mode of the AGV.
///
/// Vehicles in the field also report modes outside the standard set (e.g.
/// "MOVING"); those are kept verbatim in [`OperatingMode::Other`].
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(from = "String", into = "String")]
pub enum OperatingMode {
    /// AGV is under full control of the master control.
    #[default]
    Automatic,
    /// AGV is under control of the master control, speed is controlled manually.
    Semiautomatic,
    /// Master control is not in control of the AGV.
    Manual,
    /// Master control is not in control of the AGV; authorized personnel may reconfigure it.
    Service,
    /// AGV is being taught, e.g. mapping is done by a master control.
    Teachin,
    /// The vehicle was stopped. Receiving this resets the controller's local state.
    Stopped,
    Other(String),
}

impl OperatingMode {
    pub fn as_str(&self) -> &str {
        match self {
            OperatingMode::Automatic => "AUTOMATIC",
            OperatingMode::Semiautomatic => "SEMIAUTOMATIC",
            OperatingMode::Manual => "MANUAL",
            OperatingMode::Service => "SERVICE",
            OperatingMode::Teachin => "TEACHIN",
            OperatingMode::Stopped => "STOPPED",
            OperatingMode::Other(mode) => mode,
        }
    }
}

impl From<String> for OperatingMode {
    fn from(mode: String) -> Self {
        match mode.as_str() {
            "AUTOMATIC" => OperatingMode::Automatic,
            "SEMIAUTOMATIC" => OperatingMode::Semiautomatic,
            "MANUAL" => OperatingMode::Manual,
            "SERVICE" => OperatingMode::Service,
            "TEACHIN" => OperatingMode::Teachin,
            "STOPPED" => OperatingMode::Stopped,
            _ => OperatingMode::Other(mode),
        }
    }
}

impl From<OperatingMode> for String {
    fn from(mode: OperatingMode) -> Self {
        match mode {
            OperatingMode::Other(mode) => mode,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for OperatingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
