//! The controller's view of one AGV.
//!
//! [`Dashboard`] owns all local truth (state, factsheet, error log, latest
//! visualization) and the user-visible status line. Inbound messages are
//! handled one at a time, including any acknowledgement they trigger.

use std::fmt::Write;
use tracing::{debug, info, warn};

use crate::ack::AckEmitter;
use crate::action_dispatcher::ActionDispatcher;
use crate::codec::{self, InboundMessage};
use crate::config::Config;
use crate::connection::Publisher;
use crate::error::{DecodeError, DispatchError, TransportError};
use crate::error_log::ErrorLog;
use crate::factsheet::FactsheetNegotiator;
use crate::order_dispatcher::OrderDispatcher;
use crate::protocol::vda_2_0_0::vda5050_2_0_0_action::ActionType;
use crate::protocol::vda_2_0_0::vda5050_2_0_0_error::ErrorMessage;
use crate::protocol::vda_2_0_0::vda5050_2_0_0_factsheet::{Factsheet, FactsheetMessage};
use crate::protocol::vda_2_0_0::vda5050_2_0_0_instant_actions::InstantAction;
use crate::protocol::vda_2_0_0::vda5050_2_0_0_order::Order;
use crate::protocol::vda_2_0_0::vda5050_2_0_0_state::State;
use crate::protocol::vda_2_0_0::vda5050_2_0_0_visualization::Visualization;
use crate::reconciler::{LocalState, Reconciled, StateReconciler};
use crate::router::TopicTable;
use crate::utils;

pub const MSG_CONNECTED: &str = "Connected to MQTT broker successfully";
pub const MSG_CONNECT_FAILED: &str = "Failed to connect to MQTT broker";
pub const MSG_CONNECTION_LOST: &str = "Lost connection to MQTT broker";
pub const MSG_STATE_UPDATED: &str = "AGV state updated successfully";
pub const MSG_PARSE_FAILED: &str = "Error parsing message";
pub const MSG_INVALID_COORDINATES: &str = "Invalid coordinates. Use format: \"x, y\"";
pub const MSG_NOT_CONNECTED: &str = "MQTT client not connected";

pub struct Dashboard {
    topics: TopicTable,
    reconciler: StateReconciler,
    local_state: LocalState,
    ack_emitter: AckEmitter,
    orders: OrderDispatcher,
    actions: ActionDispatcher,
    factsheet: FactsheetNegotiator,
    error_log: ErrorLog,
    visualization: Option<Visualization>,
    message: String,
}

impl Dashboard {
    pub fn new(config: &Config) -> Self {
        let topics = TopicTable::new(&config.mqtt_broker.vda_interface);
        let reconciler = StateReconciler::new(&config.vehicle);
        let local_state = reconciler.initial_local_state();

        Self {
            ack_emitter: AckEmitter::new(topics.ack.clone()),
            orders: OrderDispatcher::new(topics.order.clone(), config.vehicle.clone()),
            actions: ActionDispatcher::new(topics.instant_actions.clone(), config.vehicle.clone()),
            factsheet: FactsheetNegotiator::new(topics.factsheet.clone(), &config.vehicle),
            error_log: ErrorLog::new(),
            visualization: None,
            message: String::new(),
            topics,
            reconciler,
            local_state,
        }
    }

    pub fn topics(&self) -> &TopicTable {
        &self.topics
    }

    pub fn local_state(&self) -> &LocalState {
        &self.local_state
    }

    pub fn agv_state(&self) -> &State {
        self.local_state.state()
    }

    pub fn factory_initial_state(&self) -> &State {
        self.reconciler.factory_initial()
    }

    pub fn factsheet(&self) -> &Factsheet {
        self.factsheet.current()
    }

    pub fn factsheet_negotiator(&self) -> &FactsheetNegotiator {
        &self.factsheet
    }

    pub fn error_log(&self) -> &ErrorLog {
        &self.error_log
    }

    pub fn visualization(&self) -> Option<&Visualization> {
        self.visualization.as_ref()
    }

    /// Latest user-visible status message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Called once the session reached `Connected`.
    pub fn on_connected(&mut self, publisher: &dyn Publisher) {
        self.message = MSG_CONNECTED.to_string();
        self.request_factsheet(publisher);
    }

    pub fn on_transport_error(&mut self, err: &TransportError) {
        warn!(error = %err, "transport error");
        self.message = match err {
            TransportError::ConnectionLost => MSG_CONNECTION_LOST.to_string(),
            TransportError::NotConnected => MSG_NOT_CONNECTED.to_string(),
            _ => MSG_CONNECT_FAILED.to_string(),
        };
    }

    /// Routes one raw inbound message. Never fails: unknown topics are
    /// ignored and malformed payloads only update the status line.
    pub fn handle_message(&mut self, publisher: &dyn Publisher, topic: &str, payload: &[u8]) {
        let Some(route) = self.topics.route(topic) else {
            debug!(topic, "ignoring message on unknown topic");
            return;
        };

        match codec::decode(route, topic, payload) {
            Ok(message) => self.dispatch(publisher, message),
            Err(err) => self.on_decode_error(err),
        }
    }

    fn dispatch(&mut self, publisher: &dyn Publisher, message: InboundMessage) {
        match message {
            InboundMessage::State(state) => self.handle_state(publisher, state),
            InboundMessage::Visualization(visualization) => self.handle_visualization(visualization),
            InboundMessage::Factsheet(factsheet) => self.handle_factsheet(factsheet),
            InboundMessage::Error(error) => self.handle_error(error),
        }
    }

    fn on_decode_error(&mut self, err: DecodeError) {
        warn!(topic = %err.topic, payload = %err.payload, error = %err.source, "failed to parse message");
        self.message = MSG_PARSE_FAILED.to_string();
    }

    fn handle_state(&mut self, publisher: &dyn Publisher, state: State) {
        let Reconciled {
            state,
            ack,
            reset,
            superseded_optimistic,
        } = self
            .reconciler
            .apply(&self.local_state, state, utils::get_timestamp());

        if reset {
            info!(header_id = ack.state_id, "AGV reported STOPPED; local state reset");
        }
        if superseded_optimistic {
            debug!(header_id = ack.state_id, "optimistic pause superseded by reported state");
        }
        self.local_state = state;
        self.message = MSG_STATE_UPDATED.to_string();

        if let Err(err) = self.ack_emitter.emit(publisher, &ack) {
            warn!(state_id = ack.state_id, error = %err, "failed to acknowledge state");
            self.message = format!("Failed to acknowledge state {}: {}", ack.state_id, err);
        }
    }

    fn handle_visualization(&mut self, visualization: Visualization) {
        debug!(
            x = visualization.agv_position.x,
            y = visualization.agv_position.y,
            "visualization received"
        );
        self.visualization = Some(visualization);
    }

    fn handle_factsheet(&mut self, message: FactsheetMessage) {
        self.factsheet.on_message(message);
    }

    fn handle_error(&mut self, error: ErrorMessage) {
        warn!(
            error_type = %error.error_type,
            error_level = %error.error_level,
            error_code = error.error_code,
            description = %error.error_description,
            "AGV reported an error"
        );
        self.message = format!("Error: {}", error.error_description);
        self.error_log.record(error);
    }

    pub fn submit_order(
        &mut self,
        publisher: &dyn Publisher,
        coordinates: &str,
    ) -> Result<Order, DispatchError> {
        if !publisher.is_connected() {
            self.message = MSG_NOT_CONNECTED.to_string();
            return Err(TransportError::NotConnected.into());
        }

        let result = self.orders.submit(publisher, coordinates);
        self.message = match &result {
            Ok(order) => format!("Order {} sent", order.order_id),
            Err(DispatchError::Validation(err)) => {
                warn!(input = coordinates, error = %err, "rejected order coordinates");
                MSG_INVALID_COORDINATES.to_string()
            }
            Err(err) => format!("Failed to send order: {}", err),
        };
        result
    }

    pub fn send_instant_action(
        &mut self,
        publisher: &dyn Publisher,
        action_type: ActionType,
    ) -> Result<InstantAction, DispatchError> {
        if !publisher.is_connected() {
            self.message = MSG_NOT_CONNECTED.to_string();
            return Err(TransportError::NotConnected.into());
        }

        let result = self
            .actions
            .dispatch(publisher, &mut self.local_state, action_type);
        self.message = match &result {
            Ok(_) => format!("{} sent", action_type),
            Err(err) => format!("Failed to send {}: {}", action_type, err),
        };
        result
    }

    pub fn request_factsheet(&mut self, publisher: &dyn Publisher) {
        if let Err(err) = self.factsheet.request_factsheet(publisher) {
            warn!(error = %err, "failed to request factsheet");
        }
    }

    /// Plain-text rendering of the current local truth.
    pub fn summary(&self) -> String {
        let state = self.local_state.state();
        let mut out = String::new();

        let _ = writeln!(out, "Status: {}", self.message);
        let _ = writeln!(
            out,
            "State #{} [{:?}] mode={} driving={} order={} last_node={}",
            state.header.header_id,
            self.local_state.origin(),
            state.operating_mode,
            state.driving,
            state.order_id,
            state.last_node_id,
        );
        let _ = writeln!(
            out,
            "Position x={:.2} y={:.2} theta={:.2} battery={:.1}%{}",
            state.position.x,
            state.position.y,
            state.position.theta,
            state.battery_state.battery_charge,
            if state.battery_state.charging { " (charging)" } else { "" },
        );
        if let Some(visualization) = &self.visualization {
            let _ = writeln!(
                out,
                "Visualization x={:.2} y={:.2} orientation={:.2}",
                visualization.agv_position.x,
                visualization.agv_position.y,
                visualization.agv_position.orientation,
            );
        }

        let factsheet = self.factsheet.current();
        let _ = writeln!(
            out,
            "Factsheet{} {} ({}) max_speed={} m/s dimensions={}m x {}m x {}m capabilities=[{}]",
            if self.factsheet.is_negotiated() { "" } else { " (default)" },
            factsheet.model,
            factsheet.protocol,
            factsheet.max_speed,
            factsheet.dimensions.length,
            factsheet.dimensions.width,
            factsheet.dimensions.height,
            factsheet.capabilities.join(", "),
        );
        let _ = write!(out, "Errors: {}", self.error_log.len());
        out
    }
}
