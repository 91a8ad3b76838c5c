//! Broker session lifecycle.
//!
//! ```text
//! Disconnected --create_session/connect--> Connecting --> Connected
//!                                              |
//!                                              +--> Failed (until retried,
//!                                                   kept across disconnect)
//! ```
//!
//! At most one session exists per manager. Creating a second one while the
//! first is open is refused, so re-entrant startup cannot double the
//! subscriptions (and with them the acknowledgements).

use futures_util::stream::Stream;
use paho_mqtt as mqtt;
use std::fmt;
use tracing::{debug, info, warn};

use crate::config::MqttBrokerConfig;
use crate::error::TransportError;
use crate::mqtt_utils;
use crate::router::TopicTable;

/// Outbound side of the transport, as seen by protocol code.
///
/// Publishing never waits for the broker: it either queues the message or
/// fails immediately.
pub trait Publisher {
    fn is_connected(&self) -> bool;
    fn publish(&self, topic: &str, payload: Vec<u8>, qos: i32) -> Result<(), TransportError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionStatus {
    Disconnected,
    Connecting,
    Connected,
    Failed,
}

impl fmt::Display for ConnectionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConnectionStatus::Disconnected => f.write_str("Disconnected"),
            ConnectionStatus::Connecting => f.write_str("Connecting"),
            ConnectionStatus::Connected => f.write_str("Connected"),
            ConnectionStatus::Failed => f.write_str("Connection Failed"),
        }
    }
}

struct Session {
    client: mqtt::AsyncClient,
}

pub struct ConnectionManager {
    broker: MqttBrokerConfig,
    topics: TopicTable,
    status: ConnectionStatus,
    session: Option<Session>,
}

impl ConnectionManager {
    pub fn new(broker: MqttBrokerConfig, topics: TopicTable) -> Self {
        Self {
            broker,
            topics,
            status: ConnectionStatus::Disconnected,
            session: None,
        }
    }

    pub fn status(&self) -> ConnectionStatus {
        self.status
    }

    pub fn topics(&self) -> &TopicTable {
        &self.topics
    }

    pub fn has_session(&self) -> bool {
        self.session.is_some()
    }

    /// Creates the client and returns its inbound stream. The stream yields
    /// `None` items when the connection is lost.
    pub fn create_session(
        &mut self,
    ) -> Result<impl Stream<Item = Option<mqtt::Message>> + Unpin, TransportError> {
        if self.session.is_some() {
            return Err(TransportError::SessionActive(self.broker.server_uri()));
        }

        let mut client = mqtt::AsyncClient::new(mqtt_utils::mqtt_create_opts(&self.broker))
            .map_err(|err| {
                self.status = ConnectionStatus::Failed;
                TransportError::Create(err)
            })?;
        let message_stream = client.get_stream(self.broker.inbound_buffer);

        self.session = Some(Session { client });
        Ok(message_stream)
    }

    /// Connects the created session and subscribes: telemetry topics first,
    /// then the state topic at-least-once, so every state message arrives on
    /// a session that can already publish its acknowledgement.
    pub async fn connect(&mut self) -> Result<(), TransportError> {
        let Some(session) = self.session.as_ref() else {
            return Err(TransportError::NotConnected);
        };

        self.status = ConnectionStatus::Connecting;
        let result = Self::establish(&session.client, &self.broker, &self.topics).await;
        self.status = match result {
            Ok(()) => ConnectionStatus::Connected,
            Err(_) => ConnectionStatus::Failed,
        };
        result
    }

    async fn establish(
        client: &mqtt::AsyncClient,
        broker: &MqttBrokerConfig,
        topics: &TopicTable,
    ) -> Result<(), TransportError> {
        let uri = broker.server_uri();
        client
            .connect(mqtt_utils::mqtt_connect_opts(broker))
            .await
            .map_err(|source| TransportError::Connect { uri: uri.clone(), source })?;
        info!(%uri, "connected to MQTT broker");

        let telemetry = topics.telemetry();
        let qos = vec![mqtt::QOS_0; telemetry.len()];
        client
            .subscribe_many(telemetry.as_slice(), qos.as_slice())
            .await
            .map_err(|source| TransportError::Subscribe { topics: telemetry.clone(), source })?;

        // Our own factsheet requests are published on the same topic.
        client
            .subscribe_with_options(
                topics.factsheet.as_str(),
                mqtt::QOS_0,
                mqtt::SUBSCRIBE_NO_LOCAL,
                None::<mqtt::Properties>,
            )
            .await
            .map_err(|source| TransportError::Subscribe {
                topics: vec![topics.factsheet.clone()],
                source,
            })?;

        client
            .subscribe(topics.state.as_str(), mqtt::QOS_1)
            .await
            .map_err(|source| TransportError::Subscribe {
                topics: vec![topics.state.clone()],
                source,
            })?;
        info!(topics = ?topics.subscriptions(), "subscribed");

        Ok(())
    }

    /// Records a lost connection. The session stays allocated until
    /// [`disconnect`](Self::disconnect) releases it.
    pub fn mark_lost(&mut self) {
        warn!("lost connection to MQTT broker");
        self.status = ConnectionStatus::Failed;
    }

    /// Releases the session and all of its subscriptions. Calling it without
    /// an open session does nothing. A `Failed` status survives the release
    /// and is only cleared by the next connection attempt.
    pub async fn disconnect(&mut self) -> Result<(), TransportError> {
        let Some(session) = self.session.take() else {
            debug!("disconnect requested without an open session");
            return Ok(());
        };
        if self.status != ConnectionStatus::Failed {
            self.status = ConnectionStatus::Disconnected;
        }

        session.client.stop_consuming();
        if !session.client.is_connected() {
            return Ok(());
        }

        info!("disconnecting from MQTT broker");
        let subscriptions = self.topics.subscriptions();
        if let Err(err) = session.client.unsubscribe_many(subscriptions.as_slice()).await {
            warn!(error = %err, "failed to unsubscribe before disconnecting");
        }
        session
            .client
            .disconnect(None::<mqtt::DisconnectOptions>)
            .await
            .map_err(TransportError::Disconnect)?;
        Ok(())
    }
}

impl Publisher for ConnectionManager {
    fn is_connected(&self) -> bool {
        self.session
            .as_ref()
            .map_or(false, |session| session.client.is_connected())
    }

    fn publish(&self, topic: &str, payload: Vec<u8>, qos: i32) -> Result<(), TransportError> {
        let session = self.session.as_ref().ok_or(TransportError::NotConnected)?;
        session
            .client
            .try_publish(mqtt_utils::mqtt_message(topic, payload, qos))
            .map(|_token| ())
            .map_err(|source| TransportError::Publish {
                topic: topic.to_string(),
                source,
            })
    }
}
