#![allow(dead_code)]

use std::cell::RefCell;

use vda5050_dashboard::{
    config::{Config, MqttBrokerConfig, VehicleConfig},
    connection::Publisher,
    error::TransportError,
};

pub fn create_test_config() -> Config {
    Config {
        mqtt_broker: MqttBrokerConfig {
            host: "localhost".to_string(),
            port: 1883,
            vda_interface: "vda5050".to_string(),
            username: Some("dashboard".to_string()),
            password: Some("secret".to_string()),
            use_tls: false,
            keep_alive_secs: 30,
            inbound_buffer: 25,
        },
        vehicle: VehicleConfig {
            manufacturer: "AGVSimulator".to_string(),
            serial_number: "AGV001".to_string(),
            vda_full_version: "2.0.0".to_string(),
        },
    }
}

pub struct Published {
    pub topic: String,
    pub payload: Vec<u8>,
    pub qos: i32,
}

impl Published {
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.payload).unwrap()
    }
}

/// Records every publish instead of sending it.
pub struct RecordingPublisher {
    pub connected: bool,
    pub fail_publish: bool,
    pub published: RefCell<Vec<Published>>,
}

impl RecordingPublisher {
    pub fn new() -> Self {
        Self {
            connected: true,
            fail_publish: false,
            published: RefCell::new(vec![]),
        }
    }

    pub fn disconnected() -> Self {
        Self {
            connected: false,
            ..Self::new()
        }
    }

    pub fn failing() -> Self {
        Self {
            fail_publish: true,
            ..Self::new()
        }
    }

    pub fn count(&self) -> usize {
        self.published.borrow().len()
    }

    pub fn on_topic(&self, topic: &str) -> Vec<serde_json::Value> {
        self.published
            .borrow()
            .iter()
            .filter(|published| published.topic == topic)
            .map(Published::json)
            .collect()
    }
}

impl Publisher for RecordingPublisher {
    fn is_connected(&self) -> bool {
        self.connected
    }

    fn publish(&self, topic: &str, payload: Vec<u8>, qos: i32) -> Result<(), TransportError> {
        if self.fail_publish {
            return Err(TransportError::NotConnected);
        }
        self.published.borrow_mut().push(Published {
            topic: topic.to_string(),
            payload,
            qos,
        });
        Ok(())
    }
}

pub fn state_payload(header_id: u32, operating_mode: &str, driving: bool) -> Vec<u8> {
    serde_json::json!({
        "headerId": header_id,
        "timestamp": "2024-05-01T10:00:00.000Z",
        "version": "2.0.0",
        "manufacturer": "AGVSimulator",
        "serialNumber": "AGV001",
        "orderId": "ORDER-1714557600000",
        "orderUpdateId": 1,
        "lastNodeId": "N1",
        "lastNodeSequenceId": 1,
        "driving": driving,
        "position": { "x": 12.5, "y": 20.0, "theta": 0.0 },
        "batteryState": { "batteryCharge": 87.5, "charging": false },
        "operatingMode": operating_mode,
        "actionStates": [{ "actionId": "a1", "actionStatus": "RUNNING" }]
    })
    .to_string()
    .into_bytes()
}

pub fn error_payload(description: &str, level: &str, code: i64) -> Vec<u8> {
    serde_json::json!({
        "headerId": 3,
        "timestamp": "2024-05-01T10:00:01.000Z",
        "errorType": "HARDWARE",
        "errorLevel": level,
        "errorDescription": description,
        "errorCode": code
    })
    .to_string()
    .into_bytes()
}
