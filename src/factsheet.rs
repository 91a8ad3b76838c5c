use paho_mqtt as mqtt;
use tracing::{debug, info};

use crate::codec;
use crate::config::VehicleConfig;
use crate::connection::Publisher;
use crate::error::DispatchError;
use crate::protocol::vda_2_0_0::vda5050_2_0_0_factsheet::{
    Dimensions, Factsheet, FactsheetMessage, FactsheetRequest,
};
use crate::utils;

/// Capabilities assumed until the vehicle answers a request.
pub fn default_factsheet(vehicle: &VehicleConfig) -> Factsheet {
    Factsheet {
        header: utils::create_header(vehicle, 1),
        model: "AGV-Simulator-2024".to_string(),
        protocol: "VDA5050 2.0".to_string(),
        capabilities: ["movement", "pause", "resume", "stop"]
            .iter()
            .map(|capability| capability.to_string())
            .collect(),
        max_speed: 2.0,
        max_rotation_speed: 1.0,
        dimensions: Dimensions {
            length: 1.2,
            width: 0.8,
            height: 0.5,
        },
    }
}

/// Requests and caches the vehicle factsheet. There is no timeout: without
/// a reply the default stays in effect.
pub struct FactsheetNegotiator {
    topic: String,
    factsheet: Factsheet,
    negotiated: bool,
    last_request: Option<FactsheetRequest>,
}

impl FactsheetNegotiator {
    pub fn new(topic: impl Into<String>, vehicle: &VehicleConfig) -> Self {
        Self {
            topic: topic.into(),
            factsheet: default_factsheet(vehicle),
            negotiated: false,
            last_request: None,
        }
    }

    pub fn current(&self) -> &Factsheet {
        &self.factsheet
    }

    /// False while the default factsheet is still in effect.
    pub fn is_negotiated(&self) -> bool {
        self.negotiated
    }

    pub fn last_request(&self) -> Option<&FactsheetRequest> {
        self.last_request.as_ref()
    }

    pub fn request_factsheet(
        &mut self,
        publisher: &dyn Publisher,
    ) -> Result<FactsheetRequest, DispatchError> {
        let request = FactsheetRequest {
            request_id: utils::generate_request_id(),
            timestamp: utils::get_timestamp(),
        };
        publisher.publish(&self.topic, codec::encode(&request)?, mqtt::QOS_0)?;
        info!(request_id = request.request_id, "factsheet requested");
        self.last_request = Some(request.clone());
        Ok(request)
    }

    /// Returns true when the message replaced the cached factsheet.
    pub fn on_message(&mut self, message: FactsheetMessage) -> bool {
        match message {
            FactsheetMessage::Request(request) => {
                debug!(request_id = request.request_id, "ignoring factsheet request");
                false
            }
            FactsheetMessage::Reply(factsheet) => {
                self.on_reply(factsheet);
                true
            }
        }
    }

    pub fn on_reply(&mut self, factsheet: Factsheet) {
        info!(model = %factsheet.model, "factsheet received");
        self.factsheet = factsheet;
        self.negotiated = true;
    }
}
