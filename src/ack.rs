use paho_mqtt as mqtt;
use tracing::debug;

use crate::codec;
use crate::connection::Publisher;
use crate::error::DispatchError;
use crate::protocol::vda_2_0_0::vda5050_2_0_0_ack::AckRequest;

/// Publishes one acknowledgement per accepted state message.
pub struct AckEmitter {
    topic: String,
}

impl AckEmitter {
    pub fn new(topic: impl Into<String>) -> Self {
        Self { topic: topic.into() }
    }

    /// Called synchronously from state handling; a failure is returned to the
    /// caller together with the acknowledged header id still in hand.
    pub fn emit(&self, publisher: &dyn Publisher, ack: &AckRequest) -> Result<(), DispatchError> {
        let payload = codec::encode(ack)?;
        publisher.publish(&self.topic, payload, mqtt::QOS_0)?;
        debug!(state_id = ack.state_id, "acknowledged state");
        Ok(())
    }
}
