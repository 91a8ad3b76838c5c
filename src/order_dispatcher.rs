use paho_mqtt as mqtt;
use tracing::info;

use crate::codec;
use crate::config::VehicleConfig;
use crate::connection::Publisher;
use crate::error::{DispatchError, ValidationError};
use crate::protocol::vda5050_common::{HeaderId, NodePosition};
use crate::protocol::vda_2_0_0::vda5050_2_0_0_order::Order;
use crate::utils;

/// Node id of the single destination node of a dashboard order.
pub const DESTINATION_NODE_ID: &str = "N1";
pub const ORDER_UPDATE_ID: u32 = 1;

/// Parses `"x, y"`: exactly two comma-separated finite numbers.
pub fn parse_coordinates(input: &str) -> Result<(f64, f64), ValidationError> {
    let tokens: Vec<&str> = input.split(',').map(str::trim).collect();
    if tokens.len() != 2 {
        return Err(ValidationError::TokenCount(tokens.len()));
    }

    let parse = |token: &str| -> Result<f64, ValidationError> {
        let value: f64 = token
            .parse()
            .map_err(|_| ValidationError::NotANumber(token.to_string()))?;
        if !value.is_finite() {
            return Err(ValidationError::NotFinite(token.to_string()));
        }
        Ok(value)
    };

    Ok((parse(tokens[0])?, parse(tokens[1])?))
}

pub struct OrderDispatcher {
    topic: String,
    vehicle: VehicleConfig,
    header_id: HeaderId,
}

impl OrderDispatcher {
    pub fn new(topic: impl Into<String>, vehicle: VehicleConfig) -> Self {
        Self {
            topic: topic.into(),
            vehicle,
            header_id: 0,
        }
    }

    pub fn build_order(&mut self, x: f64, y: f64) -> Order {
        self.header_id += 1;
        Order {
            header: utils::create_header(&self.vehicle, self.header_id),
            order_id: utils::generate_order_id(),
            order_update_id: ORDER_UPDATE_ID,
            nodes: vec![NodePosition {
                node_id: DESTINATION_NODE_ID.to_string(),
                x,
                y,
            }],
        }
    }

    /// Validates `input` and publishes a single-node order. Nothing is
    /// published when validation fails.
    pub fn submit(&mut self, publisher: &dyn Publisher, input: &str) -> Result<Order, DispatchError> {
        let (x, y) = parse_coordinates(input)?;
        let order = self.build_order(x, y);
        publisher.publish(&self.topic, codec::encode(&order)?, mqtt::QOS_0)?;
        info!(order_id = %order.order_id, x, y, "order sent");
        Ok(order)
    }
}
