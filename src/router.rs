//! Fixed topic table and exact-match dispatch.

use crate::mqtt_utils;

pub const ORDER: &str = "order";
pub const STATE: &str = "state";
pub const INSTANT_ACTIONS: &str = "instantActions";
pub const ACK: &str = "ack";
pub const VISUALIZATION: &str = "visualization";
pub const FACTSHEET: &str = "factsheet";
pub const ERROR: &str = "error";

/// Inbound handler a subscribed topic is routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    State,
    Visualization,
    Factsheet,
    Error,
}

/// Full topic names for one interface prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicTable {
    pub order: String,
    pub state: String,
    pub instant_actions: String,
    pub ack: String,
    pub visualization: String,
    pub factsheet: String,
    pub error: String,
}

impl TopicTable {
    pub fn new(vda_interface: &str) -> Self {
        let topic = |name| mqtt_utils::generate_vda_mqtt_topic(vda_interface, name);
        Self {
            order: topic(ORDER),
            state: topic(STATE),
            instant_actions: topic(INSTANT_ACTIONS),
            ack: topic(ACK),
            visualization: topic(VISUALIZATION),
            factsheet: topic(FACTSHEET),
            error: topic(ERROR),
        }
    }

    /// Exact string match; no wildcards. Unknown topics yield `None`.
    pub fn route(&self, topic: &str) -> Option<Route> {
        if topic == self.state {
            Some(Route::State)
        } else if topic == self.visualization {
            Some(Route::Visualization)
        } else if topic == self.factsheet {
            Some(Route::Factsheet)
        } else if topic == self.error {
            Some(Route::Error)
        } else {
            None
        }
    }

    /// Telemetry topics subscribed right after connecting, at default QoS.
    /// The factsheet topic is subscribed separately with the no-local option.
    pub fn telemetry(&self) -> Vec<String> {
        vec![self.visualization.clone(), self.error.clone()]
    }

    /// Every topic held by a session, in subscription order.
    pub fn subscriptions(&self) -> Vec<String> {
        vec![
            self.visualization.clone(),
            self.error.clone(),
            self.factsheet.clone(),
            self.state.clone(),
        ]
    }
}
