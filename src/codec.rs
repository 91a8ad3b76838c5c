//! Wire (de)serialization of the JSON payloads.
//!
//! Decoding only checks that the payload is well-formed JSON of the expected
//! shape. Envelope contents (header id ordering, version) are not validated.

use serde::Serialize;

use crate::error::DecodeError;
use crate::protocol::vda_2_0_0::vda5050_2_0_0_error::ErrorMessage;
use crate::protocol::vda_2_0_0::vda5050_2_0_0_factsheet::FactsheetMessage;
use crate::protocol::vda_2_0_0::vda5050_2_0_0_state::State;
use crate::protocol::vda_2_0_0::vda5050_2_0_0_visualization::Visualization;
use crate::router::Route;

/// A decoded message from one of the subscribed topics.
#[derive(Debug, Clone, PartialEq)]
pub enum InboundMessage {
    State(State),
    Visualization(Visualization),
    Factsheet(FactsheetMessage),
    Error(ErrorMessage),
}

pub fn decode(route: Route, topic: &str, payload: &[u8]) -> Result<InboundMessage, DecodeError> {
    let decoded = match route {
        Route::State => serde_json::from_slice(payload).map(InboundMessage::State),
        Route::Visualization => serde_json::from_slice(payload).map(InboundMessage::Visualization),
        Route::Factsheet => serde_json::from_slice(payload).map(InboundMessage::Factsheet),
        Route::Error => serde_json::from_slice(payload).map(InboundMessage::Error),
    };

    decoded.map_err(|source| DecodeError {
        topic: topic.to_string(),
        payload: String::from_utf8_lossy(payload).into_owned(),
        source,
    })
}

pub fn encode<T: Serialize>(message: &T) -> Result<Vec<u8>, serde_json::Error> {
    serde_json::to_vec(message)
}
