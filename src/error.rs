use paho_mqtt as mqtt;
use thiserror::Error;

/// Failures of the broker session. Only these change the connection status.
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("failed to create MQTT client: {0}")]
    Create(#[source] mqtt::Error),
    #[error("failed to connect to MQTT broker at {uri}: {source}")]
    Connect {
        uri: String,
        #[source]
        source: mqtt::Error,
    },
    #[error("failed to subscribe to {topics:?}: {source}")]
    Subscribe {
        topics: Vec<String>,
        #[source]
        source: mqtt::Error,
    },
    #[error("failed to publish on {topic}: {source}")]
    Publish {
        topic: String,
        #[source]
        source: mqtt::Error,
    },
    #[error("failed to disconnect from MQTT broker: {0}")]
    Disconnect(#[source] mqtt::Error),
    #[error("MQTT client not connected")]
    NotConnected,
    #[error("a session to {0} is already open")]
    SessionActive(String),
    #[error("lost connection to MQTT broker")]
    ConnectionLost,
}

/// A payload on a subscribed topic that could not be parsed.
#[derive(Error, Debug)]
#[error("failed to parse message on {topic}: {source}")]
pub struct DecodeError {
    pub topic: String,
    pub payload: String,
    #[source]
    pub source: serde_json::Error,
}

/// Rejected order coordinates. Nothing is published when this is returned.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("expected two comma-separated values, got {0}")]
    TokenCount(usize),
    #[error("'{0}' is not a number")]
    NotANumber(String),
    #[error("'{0}' is not a finite number")]
    NotFinite(String),
}

/// Failure of a user-initiated or protocol-initiated publish.
#[derive(Error, Debug)]
pub enum DispatchError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("failed to encode message: {0}")]
    Encode(#[from] serde_json::Error),
    #[error(transparent)]
    Transport(#[from] TransportError),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to load {path}: {source}")]
    File {
        path: String,
        #[source]
        source: config_file::ConfigFileError,
    },
    #[error("invalid value for {name}: {value:?}")]
    InvalidEnv { name: &'static str, value: String },
}
