use paho_mqtt as mqtt;
use tracing::info;

use crate::codec;
use crate::config::VehicleConfig;
use crate::connection::Publisher;
use crate::error::DispatchError;
use crate::protocol::vda5050_common::HeaderId;
use crate::protocol::vda_2_0_0::vda5050_2_0_0_action::ActionType;
use crate::protocol::vda_2_0_0::vda5050_2_0_0_instant_actions::InstantAction;
use crate::reconciler::LocalState;
use crate::utils;

pub struct ActionDispatcher {
    topic: String,
    vehicle: VehicleConfig,
    header_id: HeaderId,
}

impl ActionDispatcher {
    pub fn new(topic: impl Into<String>, vehicle: VehicleConfig) -> Self {
        Self {
            topic: topic.into(),
            vehicle,
            header_id: 0,
        }
    }

    pub fn build_action(&mut self, action_type: ActionType) -> InstantAction {
        self.header_id += 1;
        InstantAction {
            header: utils::create_header(&self.vehicle, self.header_id),
            action_id: utils::generate_action_id(),
            action_type,
        }
    }

    /// Publishes an instant action. PAUSE clears `driving` locally before
    /// publishing, without waiting for the AGV to report it.
    pub fn dispatch(
        &mut self,
        publisher: &dyn Publisher,
        local_state: &mut LocalState,
        action_type: ActionType,
    ) -> Result<InstantAction, DispatchError> {
        if action_type == ActionType::Pause {
            local_state.pause_optimistically();
        }

        let action = self.build_action(action_type);
        publisher.publish(&self.topic, codec::encode(&action)?, mqtt::QOS_0)?;
        info!(action_id = %action.action_id, %action_type, "instant action sent");
        Ok(action)
    }
}
