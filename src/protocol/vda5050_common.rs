use serde::{Deserialize, Serialize};
use serde_with::DefaultOnError;

/// header_id of a message. Defined per topic by the sender; not validated on receipt.
pub type HeaderId = u32;

/// Header fields shared by every message exchanged between controller and AGV.
#[serde_with::serde_as]
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Header {
    /// header_id of the message.
    #[serde_as(deserialize_as = "DefaultOnError")]
    pub header_id: HeaderId,
    /// Timestamp (ISO8601, UTC); YYYY-MM-DDTHH:mm:ss.ssZ; e.g. 2017-04-15T11:40:03.12Z
    #[serde_as(deserialize_as = "DefaultOnError")]
    pub timestamp: String,
    /// Version of the protocol [Major].[Minor].[Patch], e.g. 1.3.2
    #[serde_as(deserialize_as = "DefaultOnError")]
    pub version: String,
    /// Manufacturer of the AGV
    #[serde_as(deserialize_as = "DefaultOnError")]
    pub manufacturer: String,
    /// Serial number of the AGV
    #[serde_as(deserialize_as = "DefaultOnError")]
    pub serial_number: String,
}

/// Position of the AGV as reported in its state.
#[serde_with::serde_as]
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct Position {
    #[serde_as(deserialize_as = "DefaultOnError")]
    pub x: f64,
    #[serde_as(deserialize_as = "DefaultOnError")]
    pub y: f64,
    /// Orientation of the AGV in radians.
    #[serde_as(deserialize_as = "DefaultOnError")]
    pub theta: f64,
}

#[serde_with::serde_as]
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct BatteryState {
    /// State of charge in percent.
    #[serde_as(deserialize_as = "DefaultOnError")]
    pub battery_charge: f64,
    /// True while the AGV is charging.
    #[serde_as(deserialize_as = "DefaultOnError")]
    pub charging: bool,
}

/// Destination node of an order.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct NodePosition {
    pub node_id: String,
    pub x: f64,
    pub y: f64,
}

/// Position published on the visualization topic.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct AgvPosition {
    pub x: f64,
    pub y: f64,
    pub orientation: f64,
}

/// The AGV's velocity in vehicle coordinates.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct Velocity {
    pub vx: f64,
    pub vy: f64,
    pub omega: f64,
}
