use serde::{Deserialize, Serialize};

use crate::protocol::vda5050_common::Header;

/// Capability description of a vehicle.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Factsheet {
    #[serde(flatten)]
    pub header: Header,
    /// Vehicle model name.
    pub model: String,
    /// Supported protocol, e.g. "VDA5050 2.0".
    pub protocol: String,
    pub capabilities: Vec<String>,
    /// Maximum speed in m/s.
    pub max_speed: f64,
    /// Maximum rotation speed in rad/s.
    pub max_rotation_speed: f64,
    pub dimensions: Dimensions,
}

/// Vehicle dimensions in metres.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct Dimensions {
    pub length: f64,
    pub width: f64,
    pub height: f64,
}

/// Request for a factsheet, published on the factsheet topic. Carries
/// nothing but these two fields, so a reply echoing `requestId` is never
/// mistaken for one.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct FactsheetRequest {
    pub request_id: i64,
    pub timestamp: String,
}

/// Requests and replies share one topic. A payload is a request only when it
/// has exactly the request's fields; every other object is a reply.
#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(untagged)]
pub enum FactsheetMessage {
    Request(FactsheetRequest),
    Reply(Factsheet),
}
