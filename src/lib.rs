//! Controller side of a simplified VDA5050 exchange with a single AGV over
//! MQTT: orders, instant actions, state reconciliation with acknowledgements,
//! visualization, factsheet negotiation and error reporting.

pub mod ack;
pub mod action_dispatcher;
pub mod codec;
pub mod config;
pub mod connection;
pub mod console;
pub mod dashboard;
pub mod error;
pub mod error_log;
pub mod factsheet;
pub mod logging;
pub mod mqtt_handler;
pub mod mqtt_utils;
pub mod order_dispatcher;
pub mod protocol;
pub mod reconciler;
pub mod router;
pub mod utils;
